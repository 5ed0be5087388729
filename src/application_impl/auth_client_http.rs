use crate::application_port::*;
use crate::domain_model::{Credentials, SubmissionOutcome};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_REJECTION_MESSAGE: &str = "Invalid email or password.";

#[derive(Debug, Clone)]
pub struct HttpAuthConfig {
    pub base_url: String,
    pub login_path: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    success: bool,
    message: Option<String>,
    error: Option<LoginResponseError>,
}

#[derive(Debug, Deserialize)]
struct LoginResponseError {
    message: String,
}

impl From<LoginResponse> for SubmissionOutcome {
    fn from(response: LoginResponse) -> Self {
        if response.success {
            return SubmissionOutcome::Success;
        }
        let message = response
            .message
            .or_else(|| response.error.map(|e| e.message))
            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
        SubmissionOutcome::Failure { message }
    }
}

/// Posts credentials as JSON and reads a `{ success, message }` envelope back.
/// Tokens or session data in the response are left to the service.
#[derive(Debug)]
pub struct HttpAuthClient {
    client: reqwest::Client,
    url: String,
}

impl HttpAuthClient {
    pub fn new(config: HttpAuthConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        let url = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.login_path.trim_start_matches('/')
        );
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: Credentials) -> Result<SubmissionOutcome, TransportError> {
        let response = self
            .client
            .post(&self.url)
            .json(&credentials)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        let parsed: LoginResponse =
            serde_json::from_slice(&body).map_err(|e| TransportError::InvalidResponse {
                status: status.as_u16(),
                reason: e.to_string(),
            })?;
        tracing::debug!(status = status.as_u16(), success = parsed.success, "login response");

        Ok(parsed.into())
    }
}
