//! Contact-form state and submit lifecycle.
//!
//! Validation lives in folio-core; this tracks field values, the errors
//! from the last submit attempt, and the simulated-send status.

use folio_core::{ContactMessage, Field, FieldError};

/// Where the form is in its submit lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactState {
    pub message: ContactMessage,
    pub errors: Vec<FieldError>,
    pub status: SubmitStatus,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: String) {
        self.message.name = value;
        self.clear_error(Field::Name);
    }

    pub fn set_email(&mut self, value: String) {
        self.message.email = value;
        self.clear_error(Field::Email);
    }

    pub fn set_message(&mut self, value: String) {
        self.message.message = value;
        self.clear_error(Field::Message);
    }

    fn clear_error(&mut self, field: Field) {
        self.errors.retain(|e| e.field != field);
    }

    /// Validates and, on success, enters the sending state. Returns whether
    /// the send should proceed.
    pub fn submit(&mut self) -> bool {
        match self.message.validate() {
            Ok(()) => {
                self.errors.clear();
                self.status = SubmitStatus::Sending;
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Completes a simulated send: clears the form and returns to idle.
    pub fn finish_send(&mut self) {
        self.message = ContactMessage::default();
        self.errors.clear();
        self.status = SubmitStatus::Idle;
    }

    /// CSS class for a field's input: error styling after a failed submit,
    /// confirmation styling once the field has content.
    pub fn field_class(&self, field: Field) -> &'static str {
        if self.errors.iter().any(|e| e.field == field) {
            return "field-invalid";
        }
        let value = match field {
            Field::Name => &self.message.name,
            Field::Email => &self.message.email,
            Field::Message => &self.message.message,
        };
        if value.trim().is_empty() { "" } else { "field-valid" }
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_with_blank_form_collects_errors() {
        let mut state = ContactState::new();
        assert!(!state.submit());
        assert_eq!(state.errors.len(), 3);
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn typing_clears_that_fields_error() {
        let mut state = ContactState::new();
        state.submit();
        state.set_name("Yu".into());
        assert!(state.errors.iter().all(|e| e.field != Field::Name));
        assert!(state.errors.iter().any(|e| e.field == Field::Email));
    }

    #[test]
    fn valid_submit_enters_sending_then_resets() {
        let mut state = ContactState::new();
        state.set_name("Yu".into());
        state.set_email("yu@example.org".into());
        state.set_message("Hello!".into());

        assert!(state.submit());
        assert!(state.is_sending());

        state.finish_send();
        assert_eq!(state, ContactState::new());
    }

    #[test]
    fn field_class_reflects_validation() {
        let mut state = ContactState::new();
        state.submit();
        assert_eq!(state.field_class(Field::Email), "field-invalid");

        state.set_email("yu@example.org".into());
        assert_eq!(state.field_class(Field::Email), "field-valid");

        assert_eq!(ContactState::new().field_class(Field::Name), "");
    }
}
