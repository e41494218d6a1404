// Neonfolio contact form model
//
// Field values and submission status. Only the checks a browser would do
// natively are applied: every field required, email shaped like an address.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^ \t\r\n@]+@[^ \t\r\n@]+$").expect("email pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "John Doe",
            ContactField::Email => "john@example.com",
            ContactField::Subject => "Project Inquiry",
            ContactField::Message => "Tell me about your project...",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    Missing(ContactField),
    InvalidEmail,
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldProblem::Missing(field) => write!(f, "{} is required", field.label()),
            FieldProblem::InvalidEmail => write!(f, "Email must look like name@host"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Every problem, in field order
    pub fn validate(&self) -> Vec<FieldProblem> {
        let mut problems: Vec<FieldProblem> = ContactField::ALL
            .iter()
            .filter(|field| self.get(**field).trim().is_empty())
            .map(|field| FieldProblem::Missing(*field))
            .collect();
        let email = self.email.trim();
        if !email.is_empty() && !EMAIL_RE.is_match(email) {
            problems.push(FieldProblem::InvalidEmail);
        }
        problems
    }
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error(String),
}

impl SubmitStatus {
    /// Submit button caption
    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Sending => "Sending...",
            SubmitStatus::Success => "Message Sent!",
            SubmitStatus::Error(_) => "Error - Try Again",
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }
}

impl fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitStatus::Idle => write!(f, "idle"),
            SubmitStatus::Sending => write!(f, "sending"),
            SubmitStatus::Success => write!(f, "success"),
            SubmitStatus::Error(_) => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something".to_string(),
        }
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let fields = ContactFields {
            subject: "Hi".to_string(),
            ..ContactFields::default()
        };
        assert_eq!(
            fields.validate(),
            vec![
                FieldProblem::Missing(ContactField::Name),
                FieldProblem::Missing(ContactField::Email),
                FieldProblem::Missing(ContactField::Message),
            ]
        );
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut fields = filled();
        fields.set(ContactField::Message, "   ");
        assert_eq!(
            fields.validate(),
            vec![FieldProblem::Missing(ContactField::Message)]
        );
    }

    #[test]
    fn test_email_shape() {
        let mut fields = filled();
        for bad in ["ada", "ada@", "@example.com", "a da@example.com"] {
            fields.set(ContactField::Email, bad);
            assert_eq!(fields.validate(), vec![FieldProblem::InvalidEmail], "{}", bad);
        }
        fields.set(ContactField::Email, "ada@localhost");
        assert!(fields.validate().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut fields = filled();
        assert!(!fields.is_empty());
        fields.clear();
        assert!(fields.is_empty());
        assert_eq!(fields, ContactFields::default());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Success.button_label(), "Message Sent!");
        assert_eq!(
            SubmitStatus::Error("boom".to_string()).button_label(),
            "Error - Try Again"
        );
        assert_eq!(SubmitStatus::Sending.to_string(), "sending");
        assert!(SubmitStatus::Sending.is_sending());
    }
}
