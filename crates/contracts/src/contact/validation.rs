//! Client-side rules for the contact form.
//!
//! Lengths are counted in characters of the trimmed value.

use once_cell::sync::Lazy;
use regex::Regex;

use super::dto::ContactRequest;

pub const NAME_MIN: usize = 2;
pub const SUBJECT_MIN: usize = 3;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1000;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// One optional message per form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Subject => self.subject.as_deref(),
            ContactField::Message => self.message.as_deref(),
        }
    }
}

pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value.trim())
}

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

impl ContactRequest {
    /// Validate the four user-entered fields. `source_url` is not checked.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if char_len(&self.name) < NAME_MIN {
            errors.name = Some(format!("Name must be at least {} characters", NAME_MIN));
        }
        if !is_email_shaped(&self.email) {
            errors.email = Some("Please enter a valid email address".to_string());
        }
        if char_len(&self.subject) < SUBJECT_MIN {
            errors.subject = Some(format!(
                "Subject must be at least {} characters",
                SUBJECT_MIN
            ));
        }
        let message_len = char_len(&self.message);
        if message_len < MESSAGE_MIN {
            errors.message = Some(format!(
                "Message must be at least {} characters",
                MESSAGE_MIN
            ));
        } else if message_len > MESSAGE_MAX {
            errors.message = Some(format!(
                "Message must be at most {} characters",
                MESSAGE_MAX
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
