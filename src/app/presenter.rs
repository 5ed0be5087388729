use crate::application_port::FormView;
use crate::form::{FormSnapshot, SubmissionController};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Feeds controller snapshots to a [`FormView`] and owns the auto-dismiss
/// timer for notifications.
///
/// Snapshots arrive over a `watch` channel, so the view sees the latest state
/// each time the presenter runs, not every intermediate one. A submission
/// that settles before the presenter is scheduled never shows its in-flight
/// state; only the resulting notification is rendered.
pub struct Presenter {
    view: Arc<dyn FormView>,
    controller: Arc<SubmissionController>,
    auto_dismiss: Option<Duration>,
    cancellation_token: CancellationToken,
}

#[derive(Debug, Clone, Copy)]
struct Expiry {
    revision: u64,
    at: Instant,
}

impl Presenter {
    pub fn new(
        view: Arc<dyn FormView>,
        controller: Arc<SubmissionController>,
        auto_dismiss: Option<Duration>,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            view,
            controller,
            auto_dismiss,
            cancellation_token,
        }
    }

    fn next_expiry(&self, snapshot: &FormSnapshot, current: Option<Expiry>) -> Option<Expiry> {
        let auto_dismiss = self.auto_dismiss?;
        if !snapshot.notification.visible {
            return None;
        }
        match current {
            Some(expiry) if expiry.revision == snapshot.notification_revision => Some(expiry),
            _ => Some(Expiry {
                revision: snapshot.notification_revision,
                at: Instant::now() + auto_dismiss,
            }),
        }
    }

    pub async fn run(self) {
        let mut snapshots = self.controller.subscribe();
        let initial = snapshots.borrow_and_update().clone();
        self.view.render(&initial);
        let mut expiry = self.next_expiry(&initial, None);

        loop {
            tokio::select! {
                biased;
                _ = self.cancellation_token.cancelled() => {
                    if snapshots.has_changed().unwrap_or(false) {
                        let last = snapshots.borrow_and_update().clone();
                        self.view.render(&last);
                    }
                    tracing::debug!("presenter shutting down...");
                    break;
                }
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = snapshots.borrow_and_update().clone();
                    self.view.render(&snapshot);
                    expiry = self.next_expiry(&snapshot, expiry);
                }
                _ = sleep_until(expiry.map(|e| e.at)) => {
                    if let Some(Expiry { revision, .. }) = expiry.take() {
                        if self.controller.expire_notification(revision) {
                            tracing::debug!(revision, "notification auto-dismissed");
                        }
                    }
                }
            }
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
