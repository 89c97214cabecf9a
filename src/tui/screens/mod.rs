//! TUI screen implementations.

pub mod help;
pub mod product_form;

pub use help::{HelpState, draw_help};
pub use product_form::{ProductFormState, draw_product_form};
