//! Submit button state.

use crate::handle::{Styled, SubmitButton};
use crate::validator::FieldValidator;

impl FieldValidator<'_> {
    /// Enable `button` iff the form is valid.
    ///
    /// A disabled button also carries the dimmed and not-allowed classes; an
    /// enabled one carries neither.
    pub fn update_submit_button(&self, button: &dyn SubmitButton, is_valid: bool) {
        let classes = &self.config().classes;
        button.set_disabled(!is_valid);
        if is_valid {
            button.remove_class(&classes.dimmed);
            button.remove_class(&classes.not_allowed);
        } else {
            button.add_class(&classes.dimmed);
            button.add_class(&classes.not_allowed);
        }
    }
}
