//! Form field validation for the contact and account forms
//!
//! Values are trimmed before checking. The phone and password rules are
//! illustrative; they have not been checked against any carrier or security
//! requirement.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_PATTERN: Regex =
        Regex::new(r"^\+?[1-9][0-9]{0,2}[\s\-]?\(?[0-9]{1,3}\)?[\s\-]?[0-9]{3,4}[\s\-]?[0-9]{3,4}$").unwrap();
    static ref PASSWORD_CHARSET: Regex = Regex::new(r"^[a-zA-Z0-9@$!%*?&]{8,}$").unwrap();
}

/// Which rule applies to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Email,
    Phone,
    Password,
    /// Any non-blank value
    Text,
}

impl FieldKind {
    /// Map an HTML input type to its rule ("tel" is a phone, unknown types are text)
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.trim().to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "tel" => FieldKind::Phone,
            "password" => FieldKind::Password,
            _ => FieldKind::Text,
        }
    }

    /// Message shown next to an invalid field
    pub fn error_message(&self) -> &'static str {
        match self {
            FieldKind::Email => "Please enter a valid email address",
            FieldKind::Phone => "Please enter a valid phone number",
            FieldKind::Password => {
                "Password must be at least 8 characters with upper case, lower case, and a digit"
            }
            FieldKind::Text => "This field is required",
        }
    }
}

/// Check a single value against the rule for its kind
pub fn validate_field(kind: FieldKind, value: &str) -> bool {
    let value = value.trim();
    match kind {
        FieldKind::Email => EMAIL_PATTERN.is_match(value),
        FieldKind::Phone => PHONE_PATTERN.is_match(value),
        FieldKind::Password => is_strong_password(value),
        FieldKind::Text => !value.is_empty(),
    }
}

fn is_strong_password(value: &str) -> bool {
    PASSWORD_CHARSET.is_match(value)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// A named form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
}

impl FormField {
    pub fn required(name: &str, kind: FieldKind, value: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value: value.to_string(),
            required: true,
        }
    }

    pub fn optional(name: &str, kind: FieldKind, value: &str) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind, value)
        }
    }

    /// Required fields must pass their rule; optional fields only when filled in
    pub fn is_valid(&self) -> bool {
        if !self.required && self.value.trim().is_empty() {
            return true;
        }
        validate_field(self.kind, &self.value)
    }
}

/// A field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Outcome of validating a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Every failing field, in form order
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate every field, collecting all failures rather than stopping at the first
pub fn validate_form(fields: &[FormField]) -> ValidationReport {
    let errors = fields
        .iter()
        .filter(|f| !f.is_valid())
        .map(|f| FieldError {
            field: f.name.clone(),
            message: f.kind.error_message().to_string(),
        })
        .collect();

    ValidationReport { errors }
}

/// The landing page contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Optional
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::required("name", FieldKind::Text, &self.name),
            FormField::required("email", FieldKind::Email, &self.email),
            FormField::optional("phone", FieldKind::Phone, &self.phone),
            FormField::required("message", FieldKind::Text, &self.message),
        ]
    }

    pub fn validate(&self) -> ValidationReport {
        validate_form(&self.fields())
    }
}
