//! Front-end collaborators the response interceptor reports to.

use askboard_types::ui::{Notification, NotificationLevel, Route};

/// Moves the front-end to another view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &Route);
}

/// Shows a transient message to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Navigator used when no front-end is attached: records the request in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: &Route) {
        tracing::info!(route = %route, "Navigation requested");
    }
}

/// Notifier used when no front-end is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.level {
            NotificationLevel::Info => tracing::info!("{}", notification.message),
            NotificationLevel::Error => tracing::error!("{}", notification.message),
        }
    }
}
