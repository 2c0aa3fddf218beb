//! Application state module

mod app_state;
mod forms;
mod splash_state;
mod theme;

pub use app_state::*;
pub use forms::*;
pub use splash_state::*;
pub use theme::*;
