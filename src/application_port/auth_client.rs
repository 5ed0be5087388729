use crate::domain_model::{Credentials, SubmissionOutcome};

/// The login call itself did not complete. Application-level rejections are
/// not errors; they come back as [`SubmissionOutcome::Failure`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("auth service unreachable: {0}")]
    Unreachable(String),
    #[error("unexpected response from auth service (status {status}): {reason}")]
    InvalidResponse { status: u16, reason: String },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AuthClient: Send + Sync {
    /// Called exactly once per submission. Takes the credentials by value so
    /// the password does not outlive the call.
    async fn login(&self, credentials: Credentials) -> Result<SubmissionOutcome, TransportError>;
}
