use crate::application_port::*;
use crate::domain_model::{Credentials, SubmissionOutcome};

pub const FAKE_ACCEPTED_PASSWORD: &str = "password";
pub const FAKE_LOCKED_DOMAIN: &str = "@locked.example";
pub const FAKE_OFFLINE_DOMAIN: &str = "@offline.example";

#[derive(Debug, Default)]
pub struct FakeAuthClient;

impl FakeAuthClient {
    pub fn new() -> Self {
        Self
    }
}

// Magic values only; swap in the http backend for anything real.
#[async_trait::async_trait]
impl AuthClient for FakeAuthClient {
    async fn login(&self, credentials: Credentials) -> Result<SubmissionOutcome, TransportError> {
        if credentials.email.ends_with(FAKE_OFFLINE_DOMAIN) {
            return Err(TransportError::Unreachable(
                "simulated network failure".to_string(),
            ));
        }
        if credentials.email.ends_with(FAKE_LOCKED_DOMAIN) {
            return Ok(SubmissionOutcome::Failure {
                message: "Your account is locked.".to_string(),
            });
        }
        match credentials.password.as_str() {
            FAKE_ACCEPTED_PASSWORD => Ok(SubmissionOutcome::Success),
            _ => Ok(SubmissionOutcome::Failure {
                message: "Invalid email or password.".to_string(),
            }),
        }
    }
}
