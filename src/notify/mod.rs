//! Fire-and-forget user feedback, the CLI stand-in for toast
//! notifications.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

pub trait Notifier {
    fn notify(&self, message: &str, kind: NotifyKind);
}

/// Prints ✓/✗ lines; successes to stdout, errors to stderr so they
/// survive piping.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str, kind: NotifyKind) {
        match kind {
            NotifyKind::Success => println!("  {} {}", "✓".green(), message),
            NotifyKind::Error => eprintln!("  {} {}", "✗".red(), message),
        }
    }
}
