//! # Form Validation Library
//!
//! Client-side checks for credential forms (email shape, password length,
//! password confirmation) and the small UI updates that go with them: error
//! messages, the input error class, the submit button state and the password
//! visibility toggle.
//!
//! The library never touches a concrete UI toolkit. Pages hand it element
//! handles through the traits in [`handle`]; `form-web` implements them for
//! browser elements.
//!
//! ## Structure
//!
//! - **[`validator`]**: [`FieldValidator`], per-field checks and error slots
//! - **[`email`]**: [`is_valid_email`]
//! - **[`form`]**: [`CredentialsForm`], whole-form validation and backend errors
//! - **[`toggle`]**: password visibility toggle
//! - **[`config`]**: class names, messages, default minimum length
//! - **[`error`]**: [`FormError`]
//!
//! ## Usage
//!
//! The free functions below use the global configuration
//! ([`config::form_config`]). Use [`FieldValidator::new`] to validate against
//! a specific [`ValidationConfig`] instead.

pub mod button;
pub mod config;
pub mod email;
pub mod error;
pub mod form;
pub mod handle;
pub mod toggle;
pub mod validator;

#[cfg(test)]
mod testing;

use std::rc::Rc;

// Re-export commonly used items
pub use config::{form_config, init_config, ValidationConfig};
pub use email::is_valid_email;
pub use error::{FormError, Result};
pub use form::{CredentialsForm, FormField, FormReport};
pub use handle::{BackendErrorNode, ClickTarget, ErrorSlot, Field, Styled, SubmitButton};
pub use toggle::VisibilityMode;
pub use validator::{FieldCheck, FieldValidator};

pub fn show_error(slot: Option<&dyn ErrorSlot>, message: &str) {
    FieldValidator::global().show_error(slot, message)
}

pub fn hide_error(slot: Option<&dyn ErrorSlot>) {
    FieldValidator::global().hide_error(slot)
}

pub fn clear_backend_error<F: Styled + ?Sized>(field: &F, node: Option<&dyn BackendErrorNode>) {
    FieldValidator::global().clear_backend_error(field, node)
}

pub fn validate_email(field: &dyn Field, slot: Option<&dyn ErrorSlot>) -> bool {
    FieldValidator::global().validate_email(field, slot)
}

pub fn validate_password(
    field: &dyn Field,
    slot: Option<&dyn ErrorSlot>,
    min_length: Option<usize>,
) -> bool {
    FieldValidator::global().validate_password(field, slot, min_length)
}

pub fn validate_confirm_password(
    password: &dyn Field,
    confirm: &dyn Field,
    slot: Option<&dyn ErrorSlot>,
) -> bool {
    FieldValidator::global().validate_confirm_password(password, confirm, slot)
}

pub fn update_submit_button(button: &dyn SubmitButton, is_valid: bool) {
    FieldValidator::global().update_submit_button(button, is_valid)
}

pub fn setup_password_toggle(
    toggle: Option<&dyn ClickTarget>,
    field: Rc<dyn Field>,
    shown_icon: Rc<dyn Styled>,
    hidden_icon: Rc<dyn Styled>,
) {
    FieldValidator::global().setup_password_toggle(toggle, field, shown_icon, hidden_icon)
}
