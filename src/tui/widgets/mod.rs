//! Reusable TUI widgets.

pub mod flash;
pub mod form;
pub mod results;

pub use flash::{FlashKind, draw_flash};
pub use form::{Focus, FormRow, draw_form};
pub use results::draw_results;
