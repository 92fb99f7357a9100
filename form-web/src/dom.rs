//! Browser elements behind the validator's handle traits.
//!
//! DOM calls that fail here are logged and dropped; a validation helper must
//! never throw into the page script.

use lib_form::{BackendErrorNode, ClickTarget, ErrorSlot, Field, FormError, Styled, SubmitButton};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlButtonElement, HtmlInputElement};

/// Run `handler` on every `event` fired at `target`, for the life of the page.
pub fn listen(target: &EventTarget, event: &str, handler: Box<dyn FnMut()>) {
    let closure = Closure::<dyn FnMut()>::wrap(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to register '{}' listener: {:?}", event, e);
    }
    closure.forget();
}

pub fn document() -> lib_form::Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| FormError::Dom("no document available".to_string()))
}

pub fn element_by_id(document: &Document, id: &str) -> lib_form::Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FormError::Handle(format!("no element with id '{}'", id)))
}

fn add_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().add_1(class) {
        log::warn!("failed to add class '{}': {:?}", class, e);
    }
}

fn remove_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().remove_1(class) {
        log::warn!("failed to remove class '{}': {:?}", class, e);
    }
}

/// Any element: error slot, icon, submit button, toggle or backend error.
#[derive(Clone, Debug)]
pub struct DomElement(Element);

impl DomElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl Styled for DomElement {
    fn add_class(&self, class: &str) {
        add_class(&self.0, class);
    }

    fn remove_class(&self, class: &str) {
        remove_class(&self.0, class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

impl ErrorSlot for DomElement {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

impl SubmitButton for DomElement {
    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        } else {
            let result = if disabled {
                self.0.set_attribute("disabled", "")
            } else {
                self.0.remove_attribute("disabled")
            };
            if let Err(e) = result {
                log::warn!("failed to set disabled on <{}>: {:?}", self.0.tag_name(), e);
            }
        }
    }
}

impl BackendErrorNode for DomElement {
    fn remove(&self) {
        self.0.remove();
    }
}

impl ClickTarget for DomElement {
    fn on_click(&self, handler: Box<dyn FnMut()>) {
        listen(&self.0, "click", handler);
    }
}

/// A text `<input>`.
#[derive(Clone, Debug)]
pub struct DomField(HtmlInputElement);

impl DomField {
    pub fn from_element(element: Element) -> lib_form::Result<Self> {
        element.dyn_into::<HtmlInputElement>().map(Self).map_err(|element| {
            FormError::Handle(format!(
                "expected an <input> element, got <{}>",
                element.tag_name().to_lowercase()
            ))
        })
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.0
    }
}

impl Styled for DomField {
    fn add_class(&self, class: &str) {
        add_class(&self.0, class);
    }

    fn remove_class(&self, class: &str) {
        remove_class(&self.0, class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

impl Field for DomField {
    fn value(&self) -> String {
        self.0.value()
    }

    fn input_type(&self) -> Option<String> {
        self.0.get_attribute("type")
    }

    fn set_input_type(&self, input_type: &str) {
        if let Err(e) = self.0.set_attribute("type", input_type) {
            log::warn!("failed to set input type '{}': {:?}", input_type, e);
        }
    }
}
