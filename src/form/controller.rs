use super::*;
use crate::application_port::*;
use crate::domain_model::*;
use futures_util::FutureExt;
use parking_lot::Mutex;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{Instrument, debug, error, info, info_span, warn};

#[derive(Debug, Default)]
struct ControllerState {
    form: FormState,
    notification: NotificationState,
    password: PasswordVisibilityToggle,
}

impl ControllerState {
    fn snapshot(&self) -> FormSnapshot {
        let credentials = self.form.credentials();
        FormSnapshot {
            email: credentials.email.clone(),
            password_display: self.password.render(&credentials.password),
            password_visible: self.password.is_visible(),
            remember_me: credentials.remember_me,
            phase: self.form.phase(),
            submit_enabled: !self.form.phase().is_in_flight(),
            notification: self.notification.record().clone(),
            notification_revision: self.notification.revision(),
        }
    }
}

/// Drives one sign-in form: field edits, the submit lifecycle and the
/// feedback notification. Every mutation republishes a [`FormSnapshot`].
pub struct SubmissionController {
    auth_client: Arc<dyn AuthClient>,
    navigator: Arc<dyn Navigator>,
    destination: Route,
    state: Mutex<ControllerState>,
    snapshots: watch::Sender<FormSnapshot>,
}

/// Returns the form to `Idle` however the attempt ends.
struct InFlightGuard<'a> {
    controller: &'a SubmissionController,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.controller.mutate(|state| state.form.finish_submission());
    }
}

impl SubmissionController {
    pub fn new(
        auth_client: Arc<dyn AuthClient>,
        navigator: Arc<dyn Navigator>,
        destination: Route,
    ) -> Self {
        let state = ControllerState::default();
        let (snapshots, _) = watch::channel(state.snapshot());
        Self {
            auth_client,
            navigator,
            destination,
            state: Mutex::new(state),
            snapshots,
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.state.lock().snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormSnapshot> {
        self.snapshots.subscribe()
    }

    /// Current field values. Exposed for the calling surface's required-field check.
    pub fn credentials(&self) -> Credentials {
        self.state.lock().form.credentials().clone()
    }

    pub fn set_field(&self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let mut state = self.state.lock();
        state.form.set_field(name, value)?;
        self.snapshots.send_replace(state.snapshot());
        Ok(())
    }

    pub fn toggle_password_visibility(&self) -> bool {
        self.mutate(|state| state.password.toggle())
    }

    pub fn dismiss_notification(&self) {
        self.mutate(|state| {
            state.notification.hide();
        });
    }

    /// Hides the notification only if it is still the one shown at `revision`.
    pub fn expire_notification(&self, revision: u64) -> bool {
        self.mutate(|state| {
            state.notification.revision() == revision && state.notification.hide()
        })
    }

    pub async fn submit(&self) -> SubmitStatus {
        let Some(credentials) = self.mutate(|state| state.form.begin_submission()) else {
            debug!("submission already in flight, dropping submit");
            return SubmitStatus::Dropped;
        };
        let _in_flight = InFlightGuard { controller: self };

        let span = info_span!("submission", attempt = %uuid::Uuid::new_v4(), email = %credentials.email);
        let settlement = self.attempt(credentials).instrument(span).await;

        let (kind, title, message) = settlement.notification();
        self.mutate(|state| state.notification.show(kind, title, message));

        if settlement == Settlement::SignedIn {
            info!(destination = %self.destination, "signed in, navigating");
            self.navigator.go_to(&self.destination);
        }

        SubmitStatus::Settled(settlement)
    }

    async fn attempt(&self, credentials: Credentials) -> Settlement {
        let auth_client = Arc::clone(&self.auth_client);
        let call = AssertUnwindSafe(async move { auth_client.login(credentials).await });

        match call.catch_unwind().await {
            Ok(Ok(outcome)) => {
                let settlement = Settlement::from(outcome);
                if let Settlement::Rejected { message } = &settlement {
                    info!(reason = %message, "sign in rejected");
                }
                settlement
            }
            Ok(Err(err)) => {
                warn!(error = %err, "sign in request failed");
                Settlement::Unreachable
            }
            Err(_) => {
                error!("auth client panicked during sign in");
                Settlement::Unreachable
            }
        }
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut ControllerState) -> R) -> R {
        let mut state = self.state.lock();
        let result = f(&mut state);
        self.snapshots.send_replace(state.snapshot());
        result
    }
}
