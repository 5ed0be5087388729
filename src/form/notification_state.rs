use crate::domain_model::{NotificationKind, NotificationRecord};

/// Holds the single transient notification. A new `show` replaces whatever
/// was there; nothing is queued.
#[derive(Debug, Default)]
pub struct NotificationState {
    record: NotificationRecord,
    revision: u64,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &NotificationRecord {
        &self.record
    }

    /// Bumped on every `show`, untouched by `hide`.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn show(&mut self, kind: NotificationKind, title: &str, message: &str) {
        self.record = NotificationRecord {
            kind,
            title: title.to_owned(),
            message: message.to_owned(),
            visible: true,
        };
        self.revision += 1;
    }

    /// Returns whether anything changed.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.record.visible, false)
    }
}
