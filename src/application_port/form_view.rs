use crate::form::FormSnapshot;

/// Rendering surface for the form. Receives immutable snapshots and never
/// mutates form state directly.
#[cfg_attr(test, mockall::automock)]
pub trait FormView: Send + Sync {
    fn render(&self, snapshot: &FormSnapshot);
}
