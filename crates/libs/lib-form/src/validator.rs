//! # Field Validators
//!
//! Each validator recomputes its verdict from the field's current value and
//! mirrors it into the page: the message goes to the paired error slot and
//! the field gets or loses the error class. Nothing is remembered between
//! calls.
//!
//! An empty field is "not yet validated": the validator returns `false` but
//! hides the message and clears the error class, so a form does not shout at
//! the user before they have typed anything.

use crate::config::{form_config, ValidationConfig};
use crate::email::is_valid_email;
use crate::handle::{BackendErrorNode, ErrorSlot, Field, Styled};

/// Verdict for a single field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    /// Nothing entered yet.
    Empty,
    /// Entered but rejected, with the message to show.
    Invalid(String),
    Valid,
}

impl FieldCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message.as_str()),
            Self::Empty | Self::Valid => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Invalid(_) => "invalid",
            Self::Valid => "valid",
        }
    }
}

/// Validators and UI helpers bound to one configuration.
///
/// ```rust
/// use lib_form::{FieldCheck, FieldValidator, ValidationConfig};
///
/// let config = ValidationConfig::default();
/// let validator = FieldValidator::new(&config);
///
/// assert_eq!(validator.check_email("  "), FieldCheck::Empty);
/// assert!(validator.check_email(" alice@example.com ").is_valid());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldValidator<'c> {
    config: &'c ValidationConfig,
}

impl FieldValidator<'static> {
    /// Validator using the global configuration.
    pub fn global() -> Self {
        Self::new(form_config())
    }
}

impl Default for FieldValidator<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl<'c> FieldValidator<'c> {
    pub fn new(config: &'c ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'c ValidationConfig {
        self.config
    }

    // -- Pure checks -----------------------------------------------------

    /// Check an email value. Surrounding whitespace is ignored.
    pub fn check_email(&self, value: &str) -> FieldCheck {
        let email = value.trim();
        if email.is_empty() {
            FieldCheck::Empty
        } else if !is_valid_email(email) {
            FieldCheck::Invalid(self.config.messages.invalid_email.clone())
        } else {
            FieldCheck::Valid
        }
    }

    /// Check a password value against a minimum length.
    ///
    /// Length is counted in UTF-16 code units, the unit a browser reports
    /// for an input's value, so a character outside the Basic Multilingual
    /// Plane counts twice. `None` or `Some(0)` selects the configured default.
    pub fn check_password(&self, value: &str, min_length: Option<usize>) -> FieldCheck {
        let min = self.min_length(min_length);
        if value.is_empty() {
            FieldCheck::Empty
        } else if value.encode_utf16().count() < min {
            FieldCheck::Invalid(self.config.messages.password_too_short_for(min))
        } else {
            FieldCheck::Valid
        }
    }

    /// Check that `confirm` repeats `password` exactly.
    pub fn check_confirm_password(&self, password: &str, confirm: &str) -> FieldCheck {
        if confirm.is_empty() {
            FieldCheck::Empty
        } else if password != confirm {
            FieldCheck::Invalid(self.config.messages.passwords_mismatch.clone())
        } else {
            FieldCheck::Valid
        }
    }

    /// Minimum length from a loosely typed number, as page scripts pass it.
    ///
    /// Missing, zero and NaN select the default (`None`). A negative minimum
    /// accepts any non-empty password. Fractions round up, since a length can
    /// only fall short of `5.5` by being 5 or less.
    pub fn min_length_from_number(raw: Option<f64>) -> Option<usize> {
        match raw {
            None => None,
            Some(raw) if raw.is_nan() || raw == 0.0 => None,
            Some(raw) if raw < 0.0 => Some(1),
            Some(raw) => Some(raw.ceil() as usize),
        }
    }

    pub fn min_length(&self, min_length: Option<usize>) -> usize {
        match min_length {
            Some(min) if min > 0 => min,
            _ => self.config.min_password_length,
        }
    }

    // -- Validators --------------------------------------------------------

    pub fn validate_email(&self, field: &dyn Field, slot: Option<&dyn ErrorSlot>) -> bool {
        let check = self.check_email(&field.value());
        log::debug!("email field is {}", check.kind());
        self.apply(field, slot, &check)
    }

    pub fn validate_password(
        &self,
        field: &dyn Field,
        slot: Option<&dyn ErrorSlot>,
        min_length: Option<usize>,
    ) -> bool {
        let check = self.check_password(&field.value(), min_length);
        log::debug!("password field is {}", check.kind());
        self.apply(field, slot, &check)
    }

    /// Validate `confirm` against the current value of `password`.
    ///
    /// Only `confirm` is marked; the primary password field is left alone.
    pub fn validate_confirm_password(
        &self,
        password: &dyn Field,
        confirm: &dyn Field,
        slot: Option<&dyn ErrorSlot>,
    ) -> bool {
        let check = self.check_confirm_password(&password.value(), &confirm.value());
        log::debug!("confirm password field is {}", check.kind());
        self.apply(confirm, slot, &check)
    }

    /// Mirror `check` into the page and report whether it passed.
    pub fn apply(&self, field: &dyn Field, slot: Option<&dyn ErrorSlot>, check: &FieldCheck) -> bool {
        let error_class = &self.config.classes.error;
        match check {
            FieldCheck::Invalid(message) => {
                self.show_error(slot, message);
                field.add_class(error_class);
                false
            }
            FieldCheck::Empty | FieldCheck::Valid => {
                self.hide_error(slot);
                field.remove_class(error_class);
                check.is_valid()
            }
        }
    }

    // -- Error slots ---------------------------------------------------------

    pub fn show_error(&self, slot: Option<&dyn ErrorSlot>, message: &str) {
        let Some(slot) = slot else { return };
        slot.set_text(message);
        slot.remove_class(&self.config.classes.hidden);
    }

    pub fn hide_error(&self, slot: Option<&dyn ErrorSlot>) {
        let Some(slot) = slot else { return };
        slot.set_text("");
        slot.add_class(&self.config.classes.hidden);
    }

    /// Drop a server-rendered error once the user edits `field`.
    ///
    /// `field` only needs to carry classes, so any element works. Without a
    /// node there is nothing to clear and `field` keeps its classes.
    pub fn clear_backend_error<F: Styled + ?Sized>(
        &self,
        field: &F,
        node: Option<&dyn BackendErrorNode>,
    ) {
        let Some(node) = node else { return };
        node.remove();
        field.remove_class(&self.config.classes.error);
        log::debug!("backend error cleared");
    }
}
