//! Collaborators an action talks to besides the backend.

use crate::api::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Error, message)
    }

    fn with_level(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// One-way sink for transient banners.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Yes/no gate shown before destructive calls.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Prompt for call sites that already collected the user's answer
/// (the UI shows its own modal before starting the action).
#[derive(Debug, Clone, Copy, Default)]
pub struct Confirmed;

impl ConfirmPrompt for Confirmed {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// The list view an action was started from.
pub trait ListHandle {
    fn clear_selection(&self);

    /// The stored data for `kind` changed; cached pages must be refetched.
    fn data_changed(&self, kind: ResourceKind);
}
