//! Form rendering module
//!
//! - `field_renderer`: one input with its inline error
//! - `auth_form`: login, register and recover screens

mod auth_form;
mod field_renderer;

pub use auth_form::draw_auth_form;
