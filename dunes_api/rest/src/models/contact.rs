use chrono::{DateTime, Utc};
use dunes_models::contact::{
    schema::{Issue, IssueCode},
    ContactEmail, ContactEventType, ContactMessage, ContactMessageContent, ContactMessageId,
    ContactName, ContactPhone, RawContactSubmissionError,
};
use serde::Serialize;

/// A stored contact message as returned to the form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactMessage {
    pub id: ContactMessageId,
    pub name: ContactName,
    pub email: ContactEmail,
    pub phone: Option<ContactPhone>,
    pub event_type: Option<ContactEventType>,
    pub message: ContactMessageContent,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ApiContactMessage {
    fn from(value: ContactMessage) -> Self {
        let ContactMessage {
            id,
            submission,
            created_at,
        } = value;

        Self {
            id,
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            event_type: submission.event_type,
            message: submission.message,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiIssue {
    pub code: ApiIssueCode,
    /// Location of the offending value. Empty for the request body itself.
    pub path: Vec<&'static str>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiIssueCode {
    InvalidType,
    TooSmall,
    InvalidString,
    InvalidJson,
}

impl From<Issue> for ApiIssue {
    fn from(value: Issue) -> Self {
        Self {
            code: value.code.into(),
            path: vec![value.field],
            message: value.message,
        }
    }
}

impl From<IssueCode> for ApiIssueCode {
    fn from(value: IssueCode) -> Self {
        match value {
            IssueCode::InvalidType => Self::InvalidType,
            IssueCode::TooSmall => Self::TooSmall,
            IssueCode::InvalidString => Self::InvalidString,
        }
    }
}

impl From<RawContactSubmissionError> for ApiIssue {
    fn from(value: RawContactSubmissionError) -> Self {
        let code = match value {
            RawContactSubmissionError::Json(_) => ApiIssueCode::InvalidJson,
            RawContactSubmissionError::NotAnObject => ApiIssueCode::InvalidType,
        };

        Self {
            code,
            path: Vec::new(),
            message: value.to_string(),
        }
    }
}
