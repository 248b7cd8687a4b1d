//! Form rendering module
//!
//! - `field_renderer`: single input with its inline error
//! - `registration_form`: the scrolling input list and action panel

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration_form;
