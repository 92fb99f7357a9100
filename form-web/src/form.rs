//! `CredentialsForm` bound to page elements by id.
//!
//! ```text
//! const form = new CredentialsForm({
//!     email: { input: "email", error: "email-error", backendError: "email-backend-error" },
//!     password: { input: "password", error: "password-error" },
//!     confirmPassword: { input: "confirmPassword", error: "confirm-password-error" },
//!     submit: "submit-btn",
//! });
//! form.attachLiveValidation();
//! ```

use std::rc::Rc;

use lib_form::form::{CONFIRM_PASSWORD, EMAIL, PASSWORD};
use lib_form::{
    BackendErrorNode, CredentialsForm, ErrorSlot, FieldValidator, FormError, FormField, SubmitButton,
};
use serde::Deserialize;
use shared::FieldErrors;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::api::to_js;
use crate::dom::{document, element_by_id, listen, DomElement, DomField};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldBinding {
    input: String,
    #[serde(default)]
    error: Option<String>,
    /// Id of the server-rendered error shown next to this field, if any.
    #[serde(default)]
    backend_error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FormBindings {
    email: Option<FieldBinding>,
    password: Option<FieldBinding>,
    confirm_password: Option<FieldBinding>,
    submit: Option<String>,
    min_password_length: Option<usize>,
}

struct BoundField {
    input: DomField,
    slot: Option<DomElement>,
    backend_error: Option<String>,
}

impl BoundField {
    fn resolve(document: &Document, binding: FieldBinding) -> lib_form::Result<Self> {
        let input = DomField::from_element(element_by_id(document, &binding.input)?)?;
        let slot = match binding.error {
            Some(id) => Some(DomElement::new(element_by_id(document, &id)?)),
            None => None,
        };
        Ok(Self {
            input,
            slot,
            backend_error: binding.backend_error,
        })
    }

    fn form_field(&self) -> FormField<'_> {
        FormField::new(&self.input, self.slot.as_ref().map(|s| s as &dyn ErrorSlot))
    }

    /// The backend error element, while it is still in the page.
    fn backend_error(&self) -> Option<DomElement> {
        let id = self.backend_error.as_deref()?;
        let document = document().ok()?;
        document.get_element_by_id(id).map(DomElement::new)
    }
}

struct Parts {
    email: Option<BoundField>,
    password: Option<BoundField>,
    confirm_password: Option<BoundField>,
    submit: Option<DomElement>,
    min_password_length: Option<usize>,
}

impl Parts {
    fn resolve(bindings: FormBindings) -> lib_form::Result<Self> {
        let document = document()?;
        let bind = |binding: Option<FieldBinding>| {
            binding
                .map(|binding| BoundField::resolve(&document, binding))
                .transpose()
        };
        Ok(Self {
            email: bind(bindings.email)?,
            password: bind(bindings.password)?,
            confirm_password: bind(bindings.confirm_password)?,
            submit: match bindings.submit {
                Some(id) => Some(DomElement::new(element_by_id(&document, &id)?)),
                None => None,
            },
            min_password_length: bindings.min_password_length,
        })
    }

    fn form(&self) -> CredentialsForm<'_> {
        CredentialsForm {
            email: self.email.as_ref().map(BoundField::form_field),
            password: self.password.as_ref().map(BoundField::form_field),
            confirm_password: self.confirm_password.as_ref().map(BoundField::form_field),
            submit: self.submit.as_ref().map(|s| s as &dyn SubmitButton),
            min_password_length: self.min_password_length,
        }
    }

    fn bound(&self, key: &str) -> Option<&BoundField> {
        match key {
            EMAIL => self.email.as_ref(),
            PASSWORD => self.password.as_ref(),
            CONFIRM_PASSWORD => self.confirm_password.as_ref(),
            _ => None,
        }
    }

    fn field_edited(&self, key: &str) -> bool {
        let node = self.bound(key).and_then(BoundField::backend_error);
        self.form().on_field_edited(
            &FieldValidator::global(),
            key,
            node.as_ref().map(|n| n as &dyn BackendErrorNode),
        )
    }
}

#[wasm_bindgen(js_name = CredentialsForm)]
pub struct WebForm {
    parts: Rc<Parts>,
}

#[wasm_bindgen(js_class = CredentialsForm)]
impl WebForm {
    /// Look up the form's elements by id.
    #[wasm_bindgen(constructor)]
    pub fn new(bindings: JsValue) -> Result<WebForm, JsValue> {
        let bindings: FormBindings = serde_wasm_bindgen::from_value(bindings)
            .map_err(|e| to_js(FormError::Decoding(e.to_string())))?;
        let parts = Parts::resolve(bindings).map_err(to_js)?;
        Ok(Self {
            parts: Rc::new(parts),
        })
    }

    /// Validate every field and update the submit button.
    pub fn validate(&self) -> bool {
        self.parts.form().refresh_submit(&FieldValidator::global())
    }

    /// Show a `{ errors: { field: message } }` object from the server.
    #[wasm_bindgen(js_name = applyBackendErrors)]
    pub fn apply_backend_errors(&self, errors: JsValue) -> Result<(), JsValue> {
        let errors: FieldErrors = serde_wasm_bindgen::from_value(errors)
            .map_err(|e| to_js(FormError::Decoding(e.to_string())))?;
        self.parts
            .form()
            .apply_backend_errors(&FieldValidator::global(), &errors);
        Ok(())
    }

    /// Clear `key`'s backend error and revalidate that field.
    #[wasm_bindgen(js_name = fieldEdited)]
    pub fn field_edited(&self, key: &str) -> bool {
        self.parts.field_edited(key)
    }

    /// Run [`WebForm::field_edited`] on every `input` event of every field.
    #[wasm_bindgen(js_name = attachLiveValidation)]
    pub fn attach_live_validation(&self) {
        for key in [EMAIL, PASSWORD, CONFIRM_PASSWORD] {
            let Some(bound) = self.parts.bound(key) else { continue };
            let parts = Rc::clone(&self.parts);
            listen(
                bound.input.input(),
                "input",
                Box::new(move || {
                    parts.field_edited(key);
                }),
            );
        }
        log::debug!("live validation attached");
    }
}
