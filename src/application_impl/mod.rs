mod auth_client_fake;
mod auth_client_http;
mod console_view;
mod history_navigator;

pub use auth_client_fake::*;
pub use auth_client_http::*;
pub use console_view::*;
pub use history_navigator::*;
