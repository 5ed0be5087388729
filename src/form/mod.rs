mod controller;
mod form_state;
mod notification_state;
mod password_toggle;
mod snapshot;

pub use controller::*;
pub use form_state::*;
pub use notification_state::*;
pub use password_toggle::*;
pub use snapshot::*;
