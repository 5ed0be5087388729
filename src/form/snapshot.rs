use crate::domain_model::*;

/// Immutable view of the whole form handed to renderers.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct FormSnapshot {
    pub email: String,
    pub password_display: String,
    pub password_visible: bool,
    pub remember_me: bool,
    pub phase: SubmissionPhase,
    pub submit_enabled: bool,
    pub notification: NotificationRecord,
    pub notification_revision: u64,
}

impl FormSnapshot {
    pub fn submit_label(&self) -> &'static str {
        if self.phase.is_in_flight() {
            "Signing in..."
        } else {
            "Sign in"
        }
    }
}

impl std::fmt::Debug for FormSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSnapshot")
            .field("email", &self.email)
            .field("password_visible", &self.password_visible)
            .field("remember_me", &self.remember_me)
            .field("phase", &self.phase)
            .field("notification", &self.notification)
            .field("notification_revision", &self.notification_revision)
            .finish_non_exhaustive()
    }
}
