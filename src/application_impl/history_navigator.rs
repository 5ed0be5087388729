use crate::application_port::Navigator;
use crate::domain_model::Route;
use parking_lot::Mutex;

/// Keeps every route it was sent to, newest last.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        self.history.lock().last().cloned()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.lock().clone()
    }
}

impl Navigator for HistoryNavigator {
    fn go_to(&self, route: &Route) {
        tracing::info!(%route, "navigating");
        self.history.lock().push(route.clone());
    }
}
