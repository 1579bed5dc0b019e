//! Form session: owns the contact details and touch state of one mounted form

use super::field::{ContactDetails, FieldId};
use super::result::{SubmitOutcome, ValidationResult};
use super::rules::validate_field;
use std::collections::{BTreeMap, BTreeSet};

/// Compute the result for a snapshot.
///
/// Messages are only reported for touched fields, while the submit gate is
/// always computed against every field's live value.
pub fn validate(details: &ContactDetails, touched: &BTreeSet<FieldId>) -> ValidationResult {
    let mut errors = BTreeMap::new();
    let mut is_submittable = true;

    for field in FieldId::ALL {
        if let Some(error) = validate_field(field, details) {
            is_submittable = false;
            if touched.contains(&field) {
                errors.insert(field, error.message);
            }
        }
    }

    ValidationResult::new(errors, is_submittable)
}

/// State of one form from mount until unmount or successful submit
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    details: ContactDetails,
    touched: BTreeSet<FieldId>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.details.value(field)
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    /// Current result without changing anything
    pub fn result(&self) -> ValidationResult {
        validate(&self.details, &self.touched)
    }

    /// Store a new value for one field and mark it touched
    pub fn on_field_change(&mut self, field: FieldId, value: &str) -> ValidationResult {
        self.details.set(field, value);
        self.touched.insert(field);
        tracing::trace!(field = %field, "field changed");
        self.result()
    }

    /// Mark a field touched after the user left it, keeping its value
    pub fn on_field_blur(&mut self, field: FieldId) -> ValidationResult {
        if self.touched.insert(field) {
            tracing::trace!(field = %field, "field touched on blur");
        }
        self.result()
    }

    /// Force-validate every field and accept the form if nothing fails.
    ///
    /// An accepted submit resets the session so the next form starts fresh.
    pub fn on_submit_attempt(&mut self) -> SubmitOutcome {
        self.touched.extend(FieldId::ALL);
        let result = self.result();

        if result.is_submittable() {
            let submitted = std::mem::take(&mut self.details);
            self.reset();
            tracing::info!("submit accepted");
            SubmitOutcome::Accepted(submitted)
        } else {
            let invalid: Vec<&str> = result.errors().keys().map(|f| f.name()).collect();
            tracing::info!(?invalid, "submit rejected");
            SubmitOutcome::Rejected(result)
        }
    }

    /// Discard all values and touch state
    pub fn reset(&mut self) {
        self.details = ContactDetails::default();
        self.touched.clear();
        tracing::debug!("form session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::field::Gender;
    use crate::validation::rules::*;
    use pretty_assertions::assert_eq;

    fn fill(session: &mut FormSession, values: &[(FieldId, &str)]) -> ValidationResult {
        let mut result = session.result();
        for (field, value) in values {
            result = session.on_field_change(*field, value);
        }
        result
    }

    fn valid_values() -> Vec<(FieldId, &'static str)> {
        vec![
            (FieldId::FirstName, "Al"),
            (FieldId::Email, "a@b.com"),
            (FieldId::Mobile, "123456789"),
            (FieldId::Password, "abcdefgh"),
            (FieldId::ConfirmPassword, "abcdefgh"),
        ]
    }

    /// Type a value one character at a time, like a user would
    fn type_into(session: &mut FormSession, field: FieldId, text: &str) -> ValidationResult {
        let mut value = session.value(field).to_string();
        let mut result = session.result();
        for c in text.chars() {
            value.push(c);
            result = session.on_field_change(field, &value);
        }
        result
    }

    mod initial_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_no_errors_visible_but_not_submittable() {
            let session = FormSession::new();
            let result = session.result();
            assert!(!result.has_errors());
            assert!(!result.is_submittable());
        }

        #[test]
        fn test_all_fields_empty_and_untouched() {
            let session = FormSession::new();
            for field in FieldId::ALL {
                assert_eq!(session.value(field), "");
                assert!(!session.is_touched(field));
            }
            assert_eq!(session.details().gender, Gender::Unset);
        }
    }

    mod field_change {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_change_marks_only_that_field_touched() {
            let mut session = FormSession::new();
            let result = session.on_field_change(FieldId::FirstName, "A");
            assert!(session.is_touched(FieldId::FirstName));
            assert!(!session.is_touched(FieldId::Email));
            assert_eq!(
                result.errors().clone(),
                BTreeMap::from([(FieldId::FirstName, FIRST_NAME_TOO_SHORT)])
            );
        }

        #[test]
        fn test_first_name_message_clears_at_two_chars() {
            let mut session = FormSession::new();
            let result = type_into(&mut session, FieldId::FirstName, "A");
            assert_eq!(result.error(FieldId::FirstName), Some(FIRST_NAME_TOO_SHORT));

            let result = type_into(&mut session, FieldId::FirstName, "l");
            assert_eq!(result.error(FieldId::FirstName), None);
            assert!(!result.has_errors());
            assert!(!result.is_submittable());
        }

        #[test]
        fn test_clearing_a_touched_field_shows_required() {
            let mut session = FormSession::new();
            session.on_field_change(FieldId::Email, "a");
            let result = session.on_field_change(FieldId::Email, "");
            assert_eq!(result.error(FieldId::Email), Some(EMAIL_REQUIRED));
        }

        #[test]
        fn test_change_to_initial_value_still_touches() {
            let mut session = FormSession::new();
            let result = session.on_field_change(FieldId::Mobile, "");
            assert_eq!(result.error(FieldId::Mobile), Some(MOBILE_REQUIRED));
        }

        #[test]
        fn test_gender_change_never_produces_error() {
            let mut session = FormSession::new();
            let result = session.on_field_change(FieldId::Gender, "male");
            assert_eq!(session.details().gender, Gender::Male);
            assert!(result.error(FieldId::Gender).is_none());

            let result = session.on_field_change(FieldId::Gender, "select");
            assert_eq!(session.details().gender, Gender::Unset);
            assert!(!result.has_errors());
        }

        #[test]
        fn test_blur_touches_without_changing_value() {
            let mut session = FormSession::new();
            let result = session.on_field_blur(FieldId::Password);
            assert_eq!(session.value(FieldId::Password), "");
            assert_eq!(result.error(FieldId::Password), Some(PASSWORD_REQUIRED));
        }

        #[test]
        fn test_password_mismatch_clears_when_completed() {
            let mut session = FormSession::new();
            fill(
                &mut session,
                &[
                    (FieldId::Password, "abcdefgh"),
                    (FieldId::ConfirmPassword, "abcdefg"),
                ],
            );
            assert_eq!(
                session.result().error(FieldId::ConfirmPassword),
                Some(PASSWORD_MISMATCH)
            );

            let result = type_into(&mut session, FieldId::ConfirmPassword, "h");
            assert_eq!(result.error(FieldId::ConfirmPassword), None);
        }

        #[test]
        fn test_editing_password_revalidates_touched_confirm() {
            let mut session = FormSession::new();
            fill(
                &mut session,
                &[
                    (FieldId::Password, "abcdefgh"),
                    (FieldId::ConfirmPassword, "abcdefgh"),
                ],
            );
            let result = session.on_field_change(FieldId::Password, "abcdefghi");
            assert_eq!(result.error(FieldId::ConfirmPassword), Some(PASSWORD_MISMATCH));
        }

        #[test]
        fn test_untouched_confirm_stays_hidden_on_password_change() {
            let mut session = FormSession::new();
            let result = session.on_field_change(FieldId::Password, "abcdefgh");
            assert_eq!(result.error(FieldId::ConfirmPassword), None);
            assert!(!result.is_submittable());
        }
    }

    mod gating {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_valid_is_submittable() {
            let mut session = FormSession::new();
            let result = fill(&mut session, &valid_values());
            assert!(result.is_submittable());
            assert!(!result.has_errors());
        }

        #[test]
        fn test_any_single_failure_blocks_submit() {
            for (broken, bad_value) in [
                (FieldId::FirstName, "A"),
                (FieldId::Email, "a@b"),
                (FieldId::Mobile, "12345"),
                (FieldId::Password, "abc"),
                (FieldId::ConfirmPassword, "abcdefgx"),
            ] {
                let mut session = FormSession::new();
                fill(&mut session, &valid_values());
                let result = session.on_field_change(broken, bad_value);
                assert!(!result.is_submittable(), "{broken} = {bad_value:?}");
            }
        }

        #[test]
        fn test_gating_ignores_touch_state() {
            let details = ContactDetails {
                first_name: "Al".to_string(),
                email: "a@b.com".to_string(),
                mobile: "123456789".to_string(),
                password: "abcdefgh".to_string(),
                confirm_password: "abcdefgh".to_string(),
                ..Default::default()
            };
            let untouched = validate(&details, &BTreeSet::new());
            let touched = validate(&details, &FieldId::ALL.into_iter().collect());
            assert!(untouched.is_submittable());
            assert_eq!(untouched, touched);
        }

        #[test]
        fn test_validate_is_deterministic() {
            let mut session = FormSession::new();
            fill(&mut session, &[(FieldId::Email, "nope")]);
            assert_eq!(session.result(), session.result());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_submit_shows_five_required_messages() {
            let mut session = FormSession::new();
            let outcome = session.on_submit_attempt();

            assert!(!outcome.is_accepted());
            assert_eq!(
                outcome.errors(),
                BTreeMap::from([
                    (FieldId::FirstName, FIRST_NAME_REQUIRED),
                    (FieldId::Email, EMAIL_REQUIRED),
                    (FieldId::Mobile, MOBILE_REQUIRED),
                    (FieldId::Password, PASSWORD_REQUIRED),
                    (FieldId::ConfirmPassword, CONFIRM_PASSWORD_REQUIRED),
                ])
            );
            assert!(!session.result().is_submittable());
        }

        #[test]
        fn test_rejected_submit_keeps_values_and_touches_all() {
            let mut session = FormSession::new();
            fill(&mut session, &[(FieldId::FirstName, "Jhon")]);
            let outcome = session.on_submit_attempt();

            assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
            assert_eq!(session.value(FieldId::FirstName), "Jhon");
            for field in FieldId::ALL {
                assert!(session.is_touched(field));
            }
        }

        #[test]
        fn test_rejected_result_points_at_first_invalid_field() {
            let mut session = FormSession::new();
            fill(&mut session, &[(FieldId::FirstName, "Jhon")]);
            match session.on_submit_attempt() {
                SubmitOutcome::Rejected(result) => {
                    assert_eq!(result.first_invalid_field(), Some(FieldId::Email));
                }
                SubmitOutcome::Accepted(_) => panic!("expected rejection"),
            }
        }

        #[test]
        fn test_valid_submit_is_accepted_and_resets() {
            let mut session = FormSession::new();
            fill(&mut session, &valid_values());
            session.on_field_change(FieldId::Gender, "female");

            let outcome = session.on_submit_attempt();
            assert!(outcome.is_accepted());
            assert!(outcome.errors().is_empty());
            match outcome {
                SubmitOutcome::Accepted(details) => {
                    assert_eq!(details.first_name, "Al");
                    assert_eq!(details.gender, Gender::Female);
                    assert_eq!(details.confirm_password, "abcdefgh");
                }
                SubmitOutcome::Rejected(_) => panic!("expected acceptance"),
            }

            // Fresh session after acceptance
            let result = session.result();
            assert_eq!(session.details(), &ContactDetails::default());
            assert!(!result.has_errors());
            assert!(!session.is_touched(FieldId::FirstName));
        }

        #[test]
        fn test_valid_with_unset_gender_is_accepted() {
            let mut session = FormSession::new();
            fill(
                &mut session,
                &[
                    (FieldId::FirstName, "Jhon"),
                    (FieldId::Email, "jhon@deriv.com"),
                    (FieldId::Mobile, "6037583745"),
                    (FieldId::Password, "asdX76!fghjkl"),
                    (FieldId::ConfirmPassword, "asdX76!fghjkl"),
                ],
            );
            assert!(session.on_submit_attempt().is_accepted());
        }
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = FormSession::new();
        fill(&mut session, &valid_values());
        session.reset();
        assert_eq!(session.details(), &ContactDetails::default());
        assert!(FieldId::ALL.iter().all(|f| !session.is_touched(*f)));
    }
}
