use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Loading,
    Success,
    Error,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    /// A "work in progress" notification.
    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Loading,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// The notifications currently on screen, one per key.
///
/// Posting under a key that is already shown replaces the old notification.
#[derive(Debug, Clone, Default)]
pub struct NotificationBoard {
    active: HashMap<String, Notification>,
}

impl NotificationBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` under `key`, returning the one it replaced.
    pub fn post(&mut self, key: &str, notification: Notification) -> Option<Notification> {
        self.active.insert(key.to_string(), notification)
    }

    /// The notification currently shown under `key`.
    pub fn get(&self, key: &str) -> Option<&Notification> {
        self.active.get(key)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
