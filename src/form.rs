//! Contact form: three fields, validate on submit, never persist.
//!
//! Submission runs Idle → Validating → {Rejected, Accepted} synchronously
//! inside the handler: values are read at submit time, rejection keeps them,
//! acceptance clears them and hands the draft back for a diagnostic log line.

use std::sync::OnceLock;

use regex::Regex;

pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email";
pub const MSG_SENT: &str = "Message sent successfully! I will get back to you soon.";

/// A submitted draft; exists only long enough to be logged.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Some field was empty or whitespace-only; values retained.
    MissingFields,
    /// Email failed the shape check; values retained.
    InvalidEmail,
    /// All checks passed; fields cleared, draft returned for logging.
    Accepted(Draft),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Cycle to the next field (Tab behavior inside the form).
    pub fn next(&self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: Field,
}

impl ContactForm {
    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.value_mut(self.focus).push(c);
    }

    pub fn backspace(&mut self) {
        self.value_mut(self.focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Validate and "submit". No network call is made; acceptance clears the
    /// fields and returns the draft so the caller can log it.
    pub fn submit(&mut self) -> Submission {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Submission::MissingFields;
        }
        if !valid_email(email) {
            return Submission::InvalidEmail;
        }

        let draft = Draft {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        };
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = Field::Name;
        Submission::Accepted(draft)
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, at least one
/// `.` after it.
pub fn valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    re.is_match(email)
}
