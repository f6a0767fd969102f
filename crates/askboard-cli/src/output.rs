//! Shared printing helpers for command output.

use anyhow::Result;
use console::style;
use serde::Serialize;
use serde_json::Value;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a mutation's outcome: the raw server reply with `--json`, a check mark otherwise.
pub fn print_outcome(message: &str, reply: &Value, json: bool) -> Result<()> {
    if json {
        return print_json(reply);
    }

    println!();
    println!("  {} {}", style("✓").green().bold(), message);
    if !reply.is_null() {
        println!();
        println!("{}", serde_json::to_string_pretty(reply)?);
    }
    println!();
    Ok(())
}

/// Shorten `text` to at most `max_chars` characters, appending `...` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_cuts_on_char_boundaries() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn truncate_flattens_newlines() {
        assert_eq!(truncate("a\nb", 10), "a b");
    }
}
