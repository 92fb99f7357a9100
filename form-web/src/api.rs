//! `FormValidation` namespace exported to page scripts.
//!
//! ```text
//! import init, { FormValidation } from "./form_web.js";
//!
//! await init();
//! FormValidation.init({ classes: { error: "is-invalid" } });
//! emailInput.addEventListener("input", () => {
//!     const ok = FormValidation.validateEmail(emailInput, emailError);
//!     FormValidation.updateSubmitButton(submitBtn, ok);
//! });
//! ```

use std::rc::Rc;

use lib_form::{init_config, BackendErrorNode, ErrorSlot, FieldValidator, FormError, ValidationConfig};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{DomElement, DomField};

pub(crate) fn to_js(err: FormError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Wrap `element` as a text input, logging instead of failing.
fn field(element: Element) -> Option<DomField> {
    match DomField::from_element(element) {
        Ok(field) => Some(field),
        Err(err) => {
            log::warn!("{}", err);
            None
        }
    }
}

fn slot(element: Option<Element>) -> Option<DomElement> {
    element.map(DomElement::new)
}

#[wasm_bindgen]
pub struct FormValidation {}

#[wasm_bindgen]
impl FormValidation {
    /// Install a configuration object. `undefined` keeps the defaults.
    pub fn init(config: JsValue) -> Result<(), JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            ValidationConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| to_js(FormError::Decoding(e.to_string())))?
        };
        init_config(config).map_err(to_js)
    }

    #[wasm_bindgen(js_name = isValidEmail)]
    pub fn is_valid_email(email: &str) -> bool {
        lib_form::is_valid_email(email)
    }

    #[wasm_bindgen(js_name = showError)]
    pub fn show_error(element: Option<Element>, message: &str) {
        let slot = slot(element);
        lib_form::show_error(slot.as_ref().map(|s| s as &dyn ErrorSlot), message);
    }

    #[wasm_bindgen(js_name = hideError)]
    pub fn hide_error(element: Option<Element>) {
        let slot = slot(element);
        lib_form::hide_error(slot.as_ref().map(|s| s as &dyn ErrorSlot));
    }

    #[wasm_bindgen(js_name = clearBackendError)]
    pub fn clear_backend_error(input: Element, backend_error: Option<Element>) {
        let node = backend_error.map(DomElement::new);
        lib_form::clear_backend_error(
            &DomElement::new(input),
            node.as_ref().map(|n| n as &dyn BackendErrorNode),
        );
    }

    #[wasm_bindgen(js_name = validateEmail)]
    pub fn validate_email(input: Element, error: Option<Element>) -> bool {
        let Some(field) = field(input) else { return false };
        let slot = slot(error);
        lib_form::validate_email(&field, slot.as_ref().map(|s| s as &dyn ErrorSlot))
    }

    #[wasm_bindgen(js_name = validatePassword)]
    pub fn validate_password(input: Element, error: Option<Element>, min_length: Option<f64>) -> bool {
        let Some(field) = field(input) else { return false };
        let slot = slot(error);
        lib_form::validate_password(
            &field,
            slot.as_ref().map(|s| s as &dyn ErrorSlot),
            FieldValidator::min_length_from_number(min_length),
        )
    }

    #[wasm_bindgen(js_name = validateConfirmPassword)]
    pub fn validate_confirm_password(
        password: Element,
        confirm: Element,
        error: Option<Element>,
    ) -> bool {
        let (Some(password), Some(confirm)) = (field(password), field(confirm)) else {
            return false;
        };
        let slot = slot(error);
        lib_form::validate_confirm_password(&password, &confirm, slot.as_ref().map(|s| s as &dyn ErrorSlot))
    }

    #[wasm_bindgen(js_name = updateSubmitButton)]
    pub fn update_submit_button(button: Element, is_valid: bool) {
        lib_form::update_submit_button(&DomElement::new(button), is_valid);
    }

    #[wasm_bindgen(js_name = setupPasswordToggle)]
    pub fn setup_password_toggle(
        toggle: Option<Element>,
        input: Element,
        eye_icon: Element,
        eye_off_icon: Element,
    ) {
        let Some(toggle) = toggle.map(DomElement::new) else { return };
        let Some(field) = field(input) else { return };
        FieldValidator::global().setup_password_toggle(
            Some(&toggle),
            Rc::new(field),
            Rc::new(DomElement::new(eye_icon)),
            Rc::new(DomElement::new(eye_off_icon)),
        );
    }
}
