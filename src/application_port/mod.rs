mod auth_client;
mod form_view;
mod navigator;

pub use auth_client::*;
pub use form_view::*;
pub use navigator::*;
