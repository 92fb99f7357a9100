//! In-memory page elements for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::handle::{BackendErrorNode, ClickTarget, ErrorSlot, Field, Styled, SubmitButton};

#[derive(Debug, Default)]
pub struct ClassList {
    classes: RefCell<BTreeSet<String>>,
}

impl ClassList {
    fn add(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

macro_rules! impl_styled {
    ($($ty:ty),*) => {
        $(impl Styled for $ty {
            fn add_class(&self, class: &str) {
                self.classes.add(class);
            }

            fn remove_class(&self, class: &str) {
                self.classes.remove(class);
            }

            fn has_class(&self, class: &str) -> bool {
                self.classes.contains(class)
            }
        })*
    };
}

impl_styled!(FakeField, FakeSlot, FakeButton, FakeIcon);

#[derive(Debug, Default)]
pub struct FakeField {
    value: RefCell<String>,
    input_type: RefCell<Option<String>>,
    classes: ClassList,
}

impl FakeField {
    pub fn new(value: &str) -> Self {
        let field = Self::default();
        field.set_value(value);
        field
    }

    pub fn password(value: &str) -> Self {
        let field = Self::new(value);
        field.set_input_type("password");
        field
    }

    pub fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
}

impl Field for FakeField {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn input_type(&self) -> Option<String> {
        self.input_type.borrow().clone()
    }

    fn set_input_type(&self, input_type: &str) {
        *self.input_type.borrow_mut() = Some(input_type.to_string());
    }
}

#[derive(Debug)]
pub struct FakeSlot {
    text: RefCell<String>,
    hidden_class: String,
    classes: ClassList,
}

impl FakeSlot {
    pub fn with_hidden_class(hidden_class: &str) -> Self {
        let slot = Self {
            text: RefCell::new(String::new()),
            hidden_class: hidden_class.to_string(),
            classes: ClassList::default(),
        };
        slot.add_class(hidden_class);
        slot
    }

    pub fn hidden() -> Self {
        Self::with_hidden_class("hidden")
    }

    pub fn showing(text: &str) -> Self {
        let slot = Self::hidden();
        slot.set_text(text);
        slot.remove_class("hidden");
        slot
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        !self.has_class(&self.hidden_class)
    }
}

impl ErrorSlot for FakeSlot {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

#[derive(Debug, Default)]
pub struct FakeButton {
    disabled: Cell<bool>,
    classes: ClassList,
}

impl FakeButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }
}

impl SubmitButton for FakeButton {
    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }
}

#[derive(Debug, Default)]
pub struct FakeIcon {
    classes: ClassList,
}

impl FakeIcon {
    pub fn visible() -> Self {
        Self::default()
    }

    pub fn hidden() -> Self {
        let icon = Self::default();
        icon.add_class("hidden");
        icon
    }

    pub fn is_visible(&self) -> bool {
        !self.has_class("hidden")
    }
}

#[derive(Debug, Default)]
pub struct FakeBackendError {
    removed: Cell<bool>,
}

impl FakeBackendError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_removed(&self) -> bool {
        self.removed.get()
    }
}

impl BackendErrorNode for FakeBackendError {
    fn remove(&self) {
        self.removed.set(true);
    }
}

/// A button whose registered click handlers run on [`FakeToggle::click`].
#[derive(Default)]
pub struct FakeToggle {
    handlers: RefCell<Vec<Box<dyn FnMut()>>>,
}

impl FakeToggle {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn click(&self) {
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler();
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl ClickTarget for FakeToggle {
    fn on_click(&self, handler: Box<dyn FnMut()>) {
        self.handlers.borrow_mut().push(handler);
    }
}
