mod app;
mod presenter;

pub use app::*;
pub use presenter::*;
