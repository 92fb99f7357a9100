//! # Credentials Form
//!
//! Wires the single-field validators of a sign-up / sign-in form together:
//! validate every field at once, keep the submit button in step, show the
//! errors the server rendered after a rejected submission, and clear them
//! again once the user edits the offending field.
//!
//! Every part is optional. A login form has no confirmation field, a reset
//! form has no email field.

use shared::FieldErrors;

use crate::handle::{BackendErrorNode, ErrorSlot, Field, Styled, SubmitButton};
use crate::validator::{FieldCheck, FieldValidator};

/// Field key of the email input, as used by [`FieldErrors`].
pub const EMAIL: &str = "email";
/// Field key of the password input.
pub const PASSWORD: &str = "password";
/// Field key of the password confirmation input.
pub const CONFIRM_PASSWORD: &str = "confirmpassword";

/// An input with its (optional) error slot.
#[derive(Clone, Copy)]
pub struct FormField<'a> {
    pub input: &'a dyn Field,
    pub slot: Option<&'a dyn ErrorSlot>,
}

impl<'a> FormField<'a> {
    pub fn new(input: &'a dyn Field, slot: Option<&'a dyn ErrorSlot>) -> Self {
        Self { input, slot }
    }
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    /// Messages shown for rejected fields.
    pub errors: FieldErrors,
    /// Keys of fields that are still empty.
    pub missing: Vec<&'static str>,
}

impl FormReport {
    /// Every present field has a value and passed.
    pub fn is_valid(&self) -> bool {
        !self.errors.has_errors() && self.missing.is_empty()
    }

    fn record(&mut self, key: &'static str, check: &FieldCheck) {
        match check {
            FieldCheck::Empty => self.missing.push(key),
            FieldCheck::Invalid(message) => self.errors.add_error(key, message.clone()),
            FieldCheck::Valid => {}
        }
    }
}

/// The fields of a credentials form.
#[derive(Clone, Copy, Default)]
pub struct CredentialsForm<'a> {
    pub email: Option<FormField<'a>>,
    pub password: Option<FormField<'a>>,
    pub confirm_password: Option<FormField<'a>>,
    pub submit: Option<&'a dyn SubmitButton>,
    /// Minimum password length, `None` for the configured default.
    pub min_password_length: Option<usize>,
}

impl<'a> CredentialsForm<'a> {
    pub fn field(&self, key: &str) -> Option<FormField<'a>> {
        match key {
            EMAIL => self.email,
            PASSWORD => self.password,
            CONFIRM_PASSWORD => self.confirm_password,
            _ => None,
        }
    }

    /// Check the field named `key` without touching the page.
    ///
    /// The confirmation is only checked when a password field exists to
    /// compare it with.
    pub fn check(
        &self,
        validator: &FieldValidator<'_>,
        key: &str,
    ) -> Option<(FormField<'a>, FieldCheck)> {
        match key {
            EMAIL => self
                .email
                .map(|email| (email, validator.check_email(&email.input.value()))),
            PASSWORD => self.password.map(|password| {
                let check = validator.check_password(&password.input.value(), self.min_password_length);
                (password, check)
            }),
            CONFIRM_PASSWORD => {
                let password = self.password?;
                self.confirm_password.map(|confirm| {
                    let check = validator
                        .check_confirm_password(&password.input.value(), &confirm.input.value());
                    (confirm, check)
                })
            }
            _ => None,
        }
    }

    /// Check every present field without touching the page.
    pub fn report(&self, validator: &FieldValidator<'_>) -> FormReport {
        let mut report = FormReport::default();
        for key in [EMAIL, PASSWORD, CONFIRM_PASSWORD] {
            if let Some((_, check)) = self.check(validator, key) {
                report.record(key, &check);
            }
        }
        report
    }

    /// Validate every present field, updating each field's slot and class.
    pub fn validate_all(&self, validator: &FieldValidator<'_>) -> FormReport {
        let mut report = FormReport::default();
        for key in [EMAIL, PASSWORD, CONFIRM_PASSWORD] {
            let Some((field, check)) = self.check(validator, key) else { continue };
            validator.apply(field.input, field.slot, &check);
            report.record(key, &check);
        }

        log::debug!(
            "form validated: {} error(s), {} missing",
            report.errors.len(),
            report.missing.len()
        );
        report
    }

    /// Revalidate and enable the submit button iff the whole form is valid.
    pub fn refresh_submit(&self, validator: &FieldValidator<'_>) -> bool {
        let is_valid = self.validate_all(validator).is_valid();
        if let Some(submit) = self.submit {
            validator.update_submit_button(submit, is_valid);
        }
        is_valid
    }

    /// Show server-rendered messages in the matching slots.
    ///
    /// Keys without a matching field on this form are skipped.
    pub fn apply_backend_errors(&self, validator: &FieldValidator<'_>, errors: &FieldErrors) {
        let error_class = &validator.config().classes.error;
        for (key, message) in errors.all() {
            let Some(field) = self.field(key) else {
                log::debug!("no field for backend error '{}'", key);
                continue;
            };
            validator.show_error(field.slot, message);
            field.input.add_class(error_class);
        }
    }

    /// The user edited the field named `key`.
    ///
    /// Clears its backend error (if `node` is given) and revalidates that
    /// field alone, plus a filled-in confirmation when the password changed.
    /// Other fields keep whatever they show, server messages included. The
    /// submit button follows the whole form. Returns whether the form is now
    /// valid.
    pub fn on_field_edited(
        &self,
        validator: &FieldValidator<'_>,
        key: &str,
        node: Option<&dyn BackendErrorNode>,
    ) -> bool {
        if let Some(field) = self.field(key) {
            validator.clear_backend_error(field.input, node);
        }

        let mut touched = vec![key];
        if key == PASSWORD && self.confirm_password.is_some_and(|c| !c.input.value().is_empty()) {
            touched.push(CONFIRM_PASSWORD);
        }
        for key in touched {
            if let Some((field, check)) = self.check(validator, key) {
                validator.apply(field.input, field.slot, &check);
            }
        }

        let is_valid = self.report(validator).is_valid();
        if let Some(submit) = self.submit {
            validator.update_submit_button(submit, is_valid);
        }
        is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationConfig;
    use crate::testing::{FakeBackendError, FakeButton, FakeField, FakeSlot};

    struct Page {
        email: FakeField,
        email_error: FakeSlot,
        password: FakeField,
        password_error: FakeSlot,
        confirm: FakeField,
        confirm_error: FakeSlot,
        submit: FakeButton,
    }

    impl Page {
        fn new(email: &str, password: &str, confirm: &str) -> Self {
            Self {
                email: FakeField::new(email),
                email_error: FakeSlot::hidden(),
                password: FakeField::password(password),
                password_error: FakeSlot::hidden(),
                confirm: FakeField::password(confirm),
                confirm_error: FakeSlot::hidden(),
                submit: FakeButton::new(),
            }
        }

        fn form(&self) -> CredentialsForm<'_> {
            CredentialsForm {
                email: Some(FormField::new(&self.email, Some(&self.email_error))),
                password: Some(FormField::new(&self.password, Some(&self.password_error))),
                confirm_password: Some(FormField::new(&self.confirm, Some(&self.confirm_error))),
                submit: Some(&self.submit),
                min_password_length: None,
            }
        }
    }

    #[test]
    fn test_valid_form_enables_submit() {
        let config = ValidationConfig::default();
        let validator = FieldValidator::new(&config);
        let page = Page::new("alice@example.com", "abc123", "abc123");

        let report = page.form().validate_all(&validator);
        assert!(report.is_valid());
        assert!(!report.errors.has_errors());

        assert!(page.form().refresh_submit(&validator));
        assert!(!page.submit.is_disabled());
        assert!(!page.submit.has_class("opacity-50"));
    }

    #[test]
    fn test_collects_messages_per_field() {
        let config = ValidationConfig::default();
        let validator = FieldValidator::new(&config);
        let page = Page::new("alice", "abc", "abd");

        let report = page.form().validate_all(&validator);

        assert_eq!(report.errors.get(EMAIL), Some("Must be a valid email address"));
        assert_eq!(report.errors.get(PASSWORD), Some("Password must be at least 6 characters"));
        assert_eq!(report.errors.get(CONFIRM_PASSWORD), Some("Passwords do not match"));
        assert!(page.email_error.is_visible());
        assert!(page.password_error.is_visible());
        assert!(page.confirm_error.is_visible());
    }

    #[test]
    fn test_empty_fields_are_missing_not_errors() {
        let config = ValidationConfig::default();
        let validator = FieldValidator::new(&config);
        let page = Page::new("", "", "");

        let report = page.form().validate_all(&validator);

        assert!(!report.errors.has_errors());
        assert_eq!(report.missing, vec![EMAIL, PASSWORD, CONFIRM_PASSWORD]);
        assert!(!report.is_valid());
        assert!(!page.email_error.is_visible());

        assert!(!page.form().refresh_submit(&validator));
        assert!(page.submit.is_disabled());
        assert!(page.submit.has_class("cursor-not-allowed"));
    }

    #[test]
    fn test_login_form_without_confirmation() {
        let config = ValidationConfig::default();
        let validator = FieldValidator::new(&config);
        let page = Page::new("alice@example.com", "abc123", "");
        let form = CredentialsForm {
            confirm_password: None,
            ..page.form()
        };

        assert!(form.refresh_submit(&validator));
    }

    #[test]
    fn test_custom_min_password_length() {
        let config = ValidationConfig::default();
        let validator = FieldValidator::new(&config);
        let page = Page::new("alice@example.com", "abc123", "abc123");
        let form = CredentialsForm {
            min_password_length: Some(8),
            ..page.form()
        };

        let report = form.validate_all(&validator);
        assert_eq!(report.errors.get(PASSWORD), Some("Password must be at least 8 characters"));
    }

    #[test]
    fn test_backend_errors_shown_then_cleared_on_edit() {
        // Arrange
        let config = ValidationConfig::default();
        let validator = FieldValidator::new(&config);
        let page = Page::new("taken@example.com", "abc123", "abc123");
        let node = FakeBackendError::new();
        let mut errors = FieldErrors::new();
        errors.add_error(EMAIL, "This email is already registered");
        errors.add_error("name", "This username is already taken");

        // Act
        page.form().apply_backend_errors(&validator, &errors);

        // Assert
        assert_eq!(page.email_error.text(), "This email is already registered");
        assert!(page.email.has_class("input-error"));
        assert!(!page.password.has_class("input-error"));

        page.email.set_value("fresh@example.com");
        let valid = page.form().on_field_edited(&validator, EMAIL, Some(&node));

        assert!(valid);
        assert!(node.is_removed());
        assert!(!page.email.has_class("input-error"));
        assert!(!page.email_error.is_visible());
        assert!(!page.submit.is_disabled());
    }

    #[test]
    fn test_editing_one_field_keeps_other_backend_errors() {
        // Arrange
        let config = ValidationConfig::default();
        let validator = FieldValidator::new(&config);
        let page = Page::new("taken@example.com", "", "");
        let mut errors = FieldErrors::new();
        errors.add_error(EMAIL, "This email is already registered");
        page.form().apply_backend_errors(&validator, &errors);

        // Act
        page.password.set_value("abc123");
        let valid = page.form().on_field_edited(&validator, PASSWORD, None);

        // Assert
        assert!(!valid);
        assert!(page.email_error.is_visible());
        assert_eq!(page.email_error.text(), "This email is already registered");
        assert!(page.email.has_class("input-error"));
        assert!(!page.password_error.is_visible());
        assert!(page.submit.is_disabled());
    }

    #[test]
    fn test_password_edit_rechecks_filled_confirmation() {
        let config = ValidationConfig::default();
        let validator = FieldValidator::new(&config);
        let page = Page::new("alice@example.com", "abc123", "abc123");
        assert!(page.form().refresh_submit(&validator));

        page.password.set_value("abc1234");
        let valid = page.form().on_field_edited(&validator, PASSWORD, None);

        assert!(!valid);
        assert_eq!(page.confirm_error.text(), "Passwords do not match");
        assert!(page.confirm.has_class("input-error"));
        assert!(page.submit.is_disabled());
    }

    #[test]
    fn test_report_leaves_page_untouched() {
        let config = ValidationConfig::default();
        let validator = FieldValidator::new(&config);
        let page = Page::new("alice", "abc", "abc");

        let report = page.form().report(&validator);

        assert_eq!(report.errors.get(EMAIL), Some("Must be a valid email address"));
        assert!(!page.email_error.is_visible());
        assert!(!page.email.has_class("input-error"));
    }

    #[test]
    fn test_unknown_field_edit_still_refreshes_submit() {
        let config = ValidationConfig::default();
        let validator = FieldValidator::new(&config);
        let page = Page::new("alice@example.com", "abc", "abc");

        assert!(!page.form().on_field_edited(&validator, "name", None));
        assert!(page.submit.is_disabled());
    }
}
