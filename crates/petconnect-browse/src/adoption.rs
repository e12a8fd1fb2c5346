//! The adoption-request form lifecycle.
//!
//! Entirely local: submitting sets a confirmation flag and clears the draft
//! without transmitting anything.

use serde::Serialize;

/// One of the three form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

/// Draft state of the adoption-request form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AdoptionForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Set once a complete draft has been submitted.
    pub submitted: bool,
}

impl AdoptionForm {
    /// Replace the value of a single draft field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    /// Whether every required field has a non-blank value.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Submit the draft.
    ///
    /// An incomplete draft is rejected and left untouched. A complete draft
    /// marks the form submitted and clears the fields.
    pub fn submit(&mut self) -> bool {
        if !self.is_complete() {
            return false;
        }
        self.submitted = true;
        self.name.clear();
        self.email.clear();
        self.message.clear();
        true
    }
}
