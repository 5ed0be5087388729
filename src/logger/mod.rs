//! Logs go to stderr through `tracing`; stdout belongs to the form's console view.

mod logger;
pub use logger::*;

pub use tracing::{debug, error, info, trace, warn};
