mod credentials;
mod notification;
mod route;
mod submission;

pub use credentials::*;
pub use notification::*;
pub use route::*;
pub use submission::*;
