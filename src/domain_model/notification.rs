use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => f.write_str("success"),
            NotificationKind::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NotificationRecord {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub visible: bool,
}

impl Default for NotificationRecord {
    fn default() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: String::new(),
            message: String::new(),
            visible: false,
        }
    }
}
