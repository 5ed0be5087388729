use super::NotificationKind;

pub const SIGNED_IN_TITLE: &str = "Welcome back!";
pub const SIGNED_IN_MESSAGE: &str = "You have been successfully signed in.";
pub const REJECTED_TITLE: &str = "Sign In Failed";
pub const UNREACHABLE_TITLE: &str = "Connection Error";
pub const UNREACHABLE_MESSAGE: &str = "Unable to connect to the server. Please try again.";

/// Application-level answer of the auth service to one login attempt.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SubmissionOutcome {
    Success,
    Failure { message: String },
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    InFlight,
}

impl SubmissionPhase {
    pub fn is_in_flight(self) -> bool {
        self == SubmissionPhase::InFlight
    }
}

/// How a submission attempt ended, after transport failures have been folded in.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Settlement {
    SignedIn,
    Rejected { message: String },
    Unreachable,
}

impl Settlement {
    pub fn notification(&self) -> (NotificationKind, &str, &str) {
        match self {
            Settlement::SignedIn => (NotificationKind::Success, SIGNED_IN_TITLE, SIGNED_IN_MESSAGE),
            Settlement::Rejected { message } => {
                (NotificationKind::Error, REJECTED_TITLE, message.as_str())
            }
            Settlement::Unreachable => {
                (NotificationKind::Error, UNREACHABLE_TITLE, UNREACHABLE_MESSAGE)
            }
        }
    }
}

impl From<SubmissionOutcome> for Settlement {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Success => Settlement::SignedIn,
            SubmissionOutcome::Failure { message } => Settlement::Rejected { message },
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SubmitStatus {
    /// Another submission was already in flight; nothing was sent.
    Dropped,
    Settled(Settlement),
}
