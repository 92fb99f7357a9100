//! Element handles the validator operates on.
//!
//! The page owns its elements; the validator only borrows them through these
//! traits. Every method takes `&self` because page elements are shared,
//! interior-mutable references (a DOM node, a widget behind an `Rc`).

/// An element carrying a set of style classes.
pub trait Styled {
    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn has_class(&self, class: &str) -> bool;

    fn toggle_class(&self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }
}

/// A text input.
pub trait Field: Styled {
    /// Current value, untrimmed.
    fn value(&self) -> String;

    /// The input's `type` attribute, `None` when absent.
    fn input_type(&self) -> Option<String>;

    fn set_input_type(&self, input_type: &str);
}

/// A region that displays one validation message.
pub trait ErrorSlot: Styled {
    fn set_text(&self, text: &str);
}

/// A form submit control.
pub trait SubmitButton: Styled {
    fn set_disabled(&self, disabled: bool);
}

/// A server-rendered error element that can be detached from the page.
pub trait BackendErrorNode {
    fn remove(&self);
}

/// Something the user can click.
pub trait ClickTarget {
    /// Register `handler` to run on every click for the lifetime of the target.
    fn on_click(&self, handler: Box<dyn FnMut()>);
}
