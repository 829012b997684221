//! Form rendering module
//!
//! - `field_renderer`: text, select and checkbox controls
//! - `order_form`: the pizza order form

mod field_renderer;
mod order_form;

pub use order_form::draw_order_form;
