//! Contact form state and validation.

use std::fmt;
use tracing::info;

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    MissingFields,
    InvalidEmail,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Please fill out all fields"),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

impl std::error::Error for ContactError {}

/// Message shown after a successful submission.
pub const SENT_MESSAGE: &str = "Your message has been sent successfully!";

/// Which input currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

/// A validated, trimmed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: ContactField,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn handle_char_input(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn handle_backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Validate the form. On success the form is cleared.
    pub fn submit(&mut self) -> Result<Submission, ContactError> {
        let submission = Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        if submission.name.is_empty() || submission.email.is_empty() || submission.message.is_empty()
        {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&submission.email) {
            return Err(ContactError::InvalidEmail);
        }

        info!(
            name = %submission.name,
            email = %submission.email,
            message_len = submission.message.len(),
            "Form Submitted"
        );
        *self = Self::new();
        Ok(submission)
    }
}

/// `local@domain.tld`: exactly one `@`, no whitespace, and a dot inside the
/// domain with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            focus: ContactField::Name,
        }
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@bco"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.de"));
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut form = filled("  ", "a@b.co", "hi");
        assert_eq!(form.submit(), Err(ContactError::MissingFields));
        // Rejected submissions keep the input
        assert_eq!(form.email, "a@b.co");
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut form = filled("Ada", "ada-at-home", "hi");
        let err = form.submit().unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_submit_trims_and_resets() {
        let mut form = filled(" Ada ", " ada@example.com ", " hello \n");
        form.focus = ContactField::Message;
        let submission = form.submit().unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "hello");
        assert!(form.name.is_empty());
        assert_eq!(form.focus, ContactField::Name);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ContactForm::new();
        form.handle_char_input('A');
        form.focus_next();
        form.handle_char_input('b');
        form.handle_char_input('c');
        form.handle_backspace();
        assert_eq!(form.name, "A");
        assert_eq!(form.email, "b");
        form.focus_prev();
        form.focus_prev();
        assert_eq!(form.focus, ContactField::Message);
    }
}
