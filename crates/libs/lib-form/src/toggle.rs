//! # Password Visibility Toggle
//!
//! A click on the toggle flips the password input between masked and plain
//! text and swaps which of the two eye icons is shown.

use std::rc::Rc;

use crate::handle::{ClickTarget, Field, Styled};
use crate::validator::FieldValidator;

const MASKED_TYPE: &str = "password";
const PLAIN_TYPE: &str = "text";

/// How a password input renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityMode {
    Masked,
    Plain,
}

impl VisibilityMode {
    /// Mode for an input `type` attribute. Only `password` masks.
    pub fn from_input_type(input_type: Option<&str>) -> Self {
        match input_type {
            Some(MASKED_TYPE) => Self::Masked,
            _ => Self::Plain,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => MASKED_TYPE,
            Self::Plain => PLAIN_TYPE,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Masked => Self::Plain,
            Self::Plain => Self::Masked,
        }
    }
}

/// Flip `field` and both icons once.
fn flip(
    field: &dyn Field,
    shown_icon: &dyn Styled,
    hidden_icon: &dyn Styled,
    hidden_class: &str,
) -> VisibilityMode {
    let mode = VisibilityMode::from_input_type(field.input_type().as_deref()).flipped();
    field.set_input_type(mode.input_type());
    shown_icon.toggle_class(hidden_class);
    hidden_icon.toggle_class(hidden_class);
    log::debug!("password visibility switched to {:?}", mode);
    mode
}

impl FieldValidator<'_> {
    /// Run one click's worth of toggling and return the new mode.
    ///
    /// `shown_icon` is the icon displayed while the password is masked
    /// ("show password"), `hidden_icon` the one displayed while it is plain.
    pub fn toggle_password_visibility(
        &self,
        field: &dyn Field,
        shown_icon: &dyn Styled,
        hidden_icon: &dyn Styled,
    ) -> VisibilityMode {
        flip(field, shown_icon, hidden_icon, &self.config().classes.hidden)
    }

    /// Make every click on `toggle` flip `field` and the icons.
    ///
    /// Without a toggle control nothing is registered.
    pub fn setup_password_toggle(
        &self,
        toggle: Option<&dyn ClickTarget>,
        field: Rc<dyn Field>,
        shown_icon: Rc<dyn Styled>,
        hidden_icon: Rc<dyn Styled>,
    ) {
        let Some(toggle) = toggle else { return };
        let hidden_class = self.config().classes.hidden.clone();
        toggle.on_click(Box::new(move || {
            flip(field.as_ref(), shown_icon.as_ref(), hidden_icon.as_ref(), &hidden_class);
        }));
    }
}
