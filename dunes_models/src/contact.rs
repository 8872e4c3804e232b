use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use self::schema::{fields, FieldSchema, Issue, CONTACT_SUBMISSION_SCHEMA};
use crate::macros::{id, nutype_string};

pub mod schema;

id!(ContactMessageId);

nutype_string!(ContactName(validate(
    predicate = |name| crate::contact::schema::fields::NAME.accepts(name)
)));
nutype_string!(ContactEmail(validate(
    predicate = |email| crate::contact::schema::fields::EMAIL.accepts(email)
)));
nutype_string!(ContactPhone(validate(
    predicate = |phone| crate::contact::schema::fields::PHONE.accepts(phone)
)));
nutype_string!(
    /// Free text. See [`EventCategory`] for the categories offered by the form.
    ContactEventType(validate(
        predicate = |event_type| crate::contact::schema::fields::EVENT_TYPE.accepts(event_type)
    ))
);
nutype_string!(ContactMessageContent(validate(
    predicate = |message| crate::contact::schema::fields::MESSAGE.accepts(message)
)));

/// A stored contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub submission: ContactSubmission,
    pub created_at: DateTime<Utc>,
}

/// A contact form submission that satisfies [`CONTACT_SUBMISSION_SCHEMA`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub phone: Option<ContactPhone>,
    pub event_type: Option<ContactEventType>,
    pub message: ContactMessageContent,
}

/// An untrusted submission, exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawContactSubmission(pub Map<String, Value>);

#[derive(Debug, Error)]
pub enum RawContactSubmissionError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid form data ({} issues)", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

impl RawContactSubmission {
    /// Parses a request body. An empty body is an empty record.
    pub fn from_json(body: &[u8]) -> Result<Self, RawContactSubmissionError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice(body)? {
            Value::Object(record) => Ok(Self(record)),
            _ => Err(RawContactSubmissionError::NotAnObject),
        }
    }
}

impl From<Map<String, Value>> for RawContactSubmission {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl ContactSubmission {
    /// Validates `raw` against [`CONTACT_SUBMISSION_SCHEMA`], reporting every
    /// violated field at once.
    pub fn parse(raw: &RawContactSubmission) -> Result<Self, ValidationError> {
        let issues = CONTACT_SUBMISSION_SCHEMA.check(&raw.0);
        if !issues.is_empty() {
            return Err(ValidationError { issues });
        }

        let build = || -> Result<Self, Issue> {
            Ok(Self {
                name: required(raw, &fields::NAME)?,
                email: required(raw, &fields::EMAIL)?,
                phone: optional(raw, &fields::PHONE)?,
                event_type: optional(raw, &fields::EVENT_TYPE)?,
                message: required(raw, &fields::MESSAGE)?,
            })
        };

        build().map_err(|issue| ValidationError {
            issues: vec![issue],
        })
    }
}

fn optional<T: TryFrom<String>>(
    raw: &RawContactSubmission,
    field: &FieldSchema,
) -> Result<Option<T>, Issue> {
    match raw.0.get(field.name) {
        Some(Value::String(text)) => T::try_from(text.clone())
            .map(Some)
            .map_err(|_| field.violation()),
        Some(Value::Null) | None if !field.required => Ok(None),
        value => Err(field
            .check(value)
            .unwrap_or_else(|| field.violation())),
    }
}

fn required<T: TryFrom<String>>(
    raw: &RawContactSubmission,
    field: &FieldSchema,
) -> Result<T, Issue> {
    optional(raw, field)?.ok_or_else(|| field.violation())
}

/// Event categories offered by the contact form.
///
/// Submissions are not restricted to these, see [`ContactEventType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Conference,
    CollectorsExhibition,
    CulturalEvent,
    Wedding,
    Exhibition,
    HybridEvent,
    Other,
}

impl EventCategory {
    pub const LABELS: [&'static str; 7] = [
        Self::Conference.label(),
        Self::CollectorsExhibition.label(),
        Self::CulturalEvent.label(),
        Self::Wedding.label(),
        Self::Exhibition.label(),
        Self::HybridEvent.label(),
        Self::Other.label(),
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Conference => "Conference",
            Self::CollectorsExhibition => "Collectors Exhibition",
            Self::CulturalEvent => "Cultural Event",
            Self::Wedding => "Wedding",
            Self::Exhibition => "Exhibition",
            Self::HybridEvent => "Hybrid Event",
            Self::Other => "Other",
        }
    }
}
