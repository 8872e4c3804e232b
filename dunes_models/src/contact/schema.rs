//! Declarative rules for a contact form submission.
//!
//! [`CONTACT_SUBMISSION_SCHEMA`] is plain data. The server evaluates it
//! before anything is persisted, the typed field wrappers in
//! [`super`] use the same rules as their validation predicates, and the
//! serialized form is published to clients so the web form shows the same
//! messages for the same violations.

use email_address::{EmailAddress, Options};
use serde::Serialize;
use serde_json::{Map, Value};

use super::EventCategory;

pub mod fields {
    use super::{EventCategory, FieldSchema, Rule};

    pub const NAME: FieldSchema = FieldSchema {
        name: "name",
        required: true,
        rule: Rule::MinLength { min: 2 },
        message: "Name is required",
        options: &[],
    };

    pub const EMAIL: FieldSchema = FieldSchema {
        name: "email",
        required: true,
        rule: Rule::Email,
        message: "Please enter a valid email",
        options: &[],
    };

    pub const PHONE: FieldSchema = FieldSchema {
        name: "phone",
        required: false,
        rule: Rule::Any,
        message: "",
        options: &[],
    };

    /// The options are suggestions for the form's select box. Any string is
    /// accepted.
    pub const EVENT_TYPE: FieldSchema = FieldSchema {
        name: "eventType",
        required: false,
        rule: Rule::Any,
        message: "",
        options: &EventCategory::LABELS,
    };

    pub const MESSAGE: FieldSchema = FieldSchema {
        name: "message",
        required: true,
        rule: Rule::MinLength { min: 10 },
        message: "Message must be at least 10 characters",
        options: &[],
    };
}

pub static CONTACT_SUBMISSION_SCHEMA: Schema = Schema {
    fields: &[
        fields::NAME,
        fields::EMAIL,
        fields::PHONE,
        fields::EVENT_TYPE,
        fields::MESSAGE,
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub fields: &'static [FieldSchema],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    /// Key of the field in the submitted record.
    pub name: &'static str,
    pub required: bool,
    pub rule: Rule,
    /// Shown to the user when a present value violates `rule`.
    #[serde(skip_serializing_if = "str::is_empty")]
    pub message: &'static str,
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],
}

/// Constraint on the text of a present field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Rule {
    Any,
    /// At least `min` UTF-16 code units, the length a browser reports.
    MinLength {
        min: usize,
    },
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub field: &'static str,
    pub code: IssueCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    TooSmall,
    InvalidString,
}

impl Schema {
    /// Evaluates every field of the schema against `record` and returns all
    /// violations in field order.
    pub fn check(&self, record: &Map<String, Value>) -> Vec<Issue> {
        self.fields
            .iter()
            .filter_map(|field| field.check(record.get(field.name)))
            .collect()
    }

}

impl FieldSchema {
    /// Returns the violation of this field, if any.
    pub fn check(&self, value: Option<&Value>) -> Option<Issue> {
        match value {
            None if self.required => Some(self.issue(IssueCode::InvalidType, "Required".into())),
            None | Some(Value::Null) if !self.required => None,
            Some(Value::String(text)) => (!self.accepts(text)).then(|| self.violation()),
            Some(other) => Some(self.issue(
                IssueCode::InvalidType,
                format!("Expected string, received {}", json_type(other)),
            )),
            None => None,
        }
    }

    pub fn accepts(&self, text: &str) -> bool {
        self.rule.accepts(text)
    }

    /// The issue reported for a present string that fails `rule`.
    pub fn violation(&self) -> Issue {
        self.issue(self.rule.code(), self.message.into())
    }

    fn issue(&self, code: IssueCode, message: String) -> Issue {
        Issue {
            field: self.name,
            code,
            message,
        }
    }
}

impl Rule {
    pub fn accepts(&self, text: &str) -> bool {
        match *self {
            Self::Any => true,
            Self::MinLength { min } => text.encode_utf16().count() >= min,
            Self::Email => EmailAddress::parse_with_options(text, email_options())
                .is_ok_and(|email| is_plain_address(&email)),
        }
    }

    fn code(&self) -> IssueCode {
        match self {
            Self::Any | Self::MinLength { .. } => IssueCode::TooSmall,
            Self::Email => IssueCode::InvalidString,
        }
    }
}

fn email_options() -> Options {
    Options::default()
        .with_required_tld()
        .without_domain_literal()
        .without_display_text()
}

/// Restricts RFC 5322 syntax to what the web form accepts: an unquoted local
/// part and a domain ending in an alphabetic top level label of at least two
/// letters.
fn is_plain_address(email: &EmailAddress) -> bool {
    let local_part = email.local_part();
    let domain = email.domain();
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    local_part
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c))
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-.".contains(c))
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
