//! Contact-form validation.
//!
//! Submission is simulated in the UI; this module only decides whether a
//! message is well-formed (no blank fields, plausible email).

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// A contact-form field, used to point error styling at the right input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Email => write!(f, "email"),
            Field::Message => write!(f, "message"),
        }
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    InvalidEmail,
}

/// A failed field with its reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub error: ValidationError,
}

/// A message entered into the contact form. Fields are kept as typed, so
/// validation trims before checking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"))
}

impl ContactMessage {
    /// Validates all fields, returning every failure rather than the first.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Name,
                error: ValidationError::Required,
            });
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError {
                field: Field::Email,
                error: ValidationError::Required,
            });
        } else if !email_regex().is_match(email) {
            errors.push(FieldError {
                field: Field::Email,
                error: ValidationError::InvalidEmail,
            });
        }

        if self.message.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Message,
                error: ValidationError::Required,
            });
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
