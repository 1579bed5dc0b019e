//! Form domain layer
//!
//! Presentation and focus handling for the contact form. Values and
//! validation live in `crate::validation`.

mod field;
mod form_state;

pub use field::{FormField, InputKind};
pub use form_state::{ContactForm, Form, SUBMIT_ROW};
