use serde::{Deserialize, Serialize};

pub const REPORT_ACCEPTED: &str = "Food availability reported successfully!";
pub const REPORT_REJECTED: &str = "Please fill all required fields correctly.";
pub const UNEXPECTED_FAILURE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class of the banner element.
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success-message",
            NotificationKind::Error => "error-message",
        }
    }
}

/// A message banner shown above the report form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }

    pub fn report_accepted() -> Self {
        Self::success(REPORT_ACCEPTED)
    }

    pub fn report_rejected() -> Self {
        Self::error(REPORT_REJECTED)
    }

    pub fn unexpected() -> Self {
        Self::error(UNEXPECTED_FAILURE)
    }

    pub fn registered(title: &str) -> Self {
        Self::success(format!(
            "Successfully registered for {title}! You will receive a confirmation email shortly."
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

/// Banners currently on screen, newest first.
///
/// Each banner is removed by id when its own timer fires, so several can be
/// visible at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCenter {
    next_id: u64,
    active: Vec<(NotificationId, Notification)>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.active.insert(0, (id, notification));
        id
    }

    /// Remove a banner. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|(n, _)| *n != id);
        self.active.len() != before
    }

    pub fn active(&self) -> &[(NotificationId, Notification)] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
