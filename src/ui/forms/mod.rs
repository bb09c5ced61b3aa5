//! Form rendering module
//!
//! - `field_renderer`: one bordered control per field
//! - `registration_form`: the full registration form with its action panel

mod field_renderer;
mod registration_form;

pub use registration_form::draw;
