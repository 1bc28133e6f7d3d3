//! Injectable user-interaction ports.
//!
//! The pipeline and the list views never print or prompt on their own; they
//! report through a [`Notifier`] and ask through a [`Confirm`]. Front ends
//! supply terminal implementations, tests supply recording fakes.

use log::info;

/// Shows a message to the administrator.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Asks the administrator a yes/no question.
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Notifier that only writes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!("{message}");
    }
}
