/// Feedback channel towards the user of an editor panel.
///
/// Replaces direct calls of platform globals (alerts, clipboard)
/// so that use cases stay testable without a UI environment.
pub trait Notifier {
    fn notify(&self, notification: Notification);

    /// Put the given text onto the clipboard of the user.
    fn copy_to_clipboard(&self, text: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }
}
