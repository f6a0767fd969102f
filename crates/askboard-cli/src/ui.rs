//! Terminal implementations of the front-end collaborators.
//!
//! Everything goes to stderr so `--json` output on stdout stays clean.

use console::style;

use askboard_core::port::ui::{Navigator, Notifier};
use askboard_types::ui::{Notification, NotificationLevel, Route};

/// Reports where a browser front-end would have navigated.
pub struct TerminalNavigator {
    quiet: bool,
}

impl TerminalNavigator {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &Route) {
        tracing::debug!(route = %route, "Navigation requested");
        if self.quiet {
            return;
        }
        let hint = match route {
            Route::NotFound => "the requested item does not exist",
            Route::Root => "returning to the start page",
            Route::Path(_) => "redirected",
        };
        eprintln!(
            "  {} {} ({})",
            style("→").cyan().bold(),
            style(route).bold(),
            style(hint).dim()
        );
    }
}

/// Prints notifications as styled one-line toasts.
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.level {
            NotificationLevel::Info => {
                if !self.quiet {
                    eprintln!(
                        "  {} {}",
                        style("i").blue().bold(),
                        notification.message
                    );
                }
            }
            NotificationLevel::Error => {
                eprintln!(
                    "  {} {}",
                    style("✗").red().bold(),
                    style(&notification.message).red()
                );
            }
        }
    }
}
