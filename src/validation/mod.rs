//! Contact form validation
//!
//! The validation core is a pure function of the current field values and
//! which fields have been touched:
//! - `rules`: per-field rule tables; first failing rule wins
//! - `session`: `FormSession`, owning one form's values and touch state
//! - `result`: `ValidationResult` and `SubmitOutcome`
//!
//! Displayed messages are gated on touch state, while `is_submittable` is
//! always computed from live values.

mod field;
mod result;
mod rules;
mod session;

pub use field::{ContactDetails, FieldId, Gender};
pub use result::{SubmitOutcome, ValidationResult};
pub use rules::live_errors;
pub use session::FormSession;
