/// Severity of a user-visible notification.
///
/// The frontend maps each variant onto the matching toast styling of the UI
/// toolkit; the backend only decides how serious the event is.
#[derive(Debug, Clone)]
pub enum NotificationType {
    /// Neutral information, neither success nor failure.
    Info,
    /// An operation finished successfully.
    Success,
    /// Something went wrong without blocking the user.
    Warning,
    /// A failure the user should know about.
    Error,
}

/// A notification payload intended for the user interface.
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    /// The severity, determining the toast's visual style.
    pub notification_type: NotificationType,
    /// The text shown to the user.
    pub message: String,
}

impl NotificationMessage {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}
