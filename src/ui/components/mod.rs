//! Reusable UI components

mod button;
mod dialog;

pub use button::render_button;
pub use dialog::{render_error_dialog, render_notice_dialog};
