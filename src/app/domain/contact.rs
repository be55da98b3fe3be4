//! Contact form model and its client-side validation rules.

use std::fmt;
use std::sync::OnceLock;

use regex_lite::Regex;

pub const NAME_MIN_CHARS: usize = 2;
pub const SUBJECT_MIN_CHARS: usize = 5;
pub const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn all() -> &'static [ContactField] {
        &[Self::Name, Self::Email, Self::Subject, Self::Message]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Every failing field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn get(&self, field: ContactField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    fn push(&mut self, field: ContactField, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message).collect();
        f.write_str(&messages.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

fn email_shape() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_shape().is_match(value)
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.chars().count() < NAME_MIN_CHARS {
            errors.push(ContactField::Name, "Name must be at least 2 characters.");
        }
        if !is_valid_email(&self.email) {
            errors.push(ContactField::Email, "Please enter a valid email address.");
        }
        if self.subject.chars().count() < SUBJECT_MIN_CHARS {
            errors.push(ContactField::Subject, "Subject must be at least 5 characters.");
        }
        if self.message.chars().count() < MESSAGE_MIN_CHARS {
            errors.push(ContactField::Message, "Message must be at least 10 characters.");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "I'd like to talk.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_name_boundary() {
        let form = valid_form();
        assert!(form.validate().is_ok());

        let form = ContactForm { name: "J".to_string(), ..valid_form() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(ContactField::Name).map(|e| e.message),
            Some("Name must be at least 2 characters.")
        );
    }

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        // Two chars, four bytes
        let form = ContactForm { name: "Ég".to_string(), ..valid_form() };
        assert!(form.validate().is_ok());
        let form = ContactForm { name: "É".to_string(), ..valid_form() };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("no-tld@example"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_subject_and_message_boundaries() {
        let form = ContactForm {
            subject: "Hey!".to_string(),
            message: "Too short".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(ContactField::Subject).map(|e| e.message),
            Some("Subject must be at least 5 characters.")
        );
        assert_eq!(
            errors.get(ContactField::Message).map(|e| e.message),
            Some("Message must be at least 10 characters.")
        );

        let form = ContactForm {
            subject: "Hey!!".to_string(),
            message: "Ten chars!".to_string(),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_empty_form_reports_every_field_in_order() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ContactField::all());
    }
}
