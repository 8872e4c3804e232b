use anyhow::anyhow;
use dunes_core_contact_contracts::{
    create::MockContactCreateCommandService, ContactFeatureService, ContactSubmitError,
};
use dunes_demo::contact::{CONFERENCE, WEDDING};
use dunes_models::contact::{schema::IssueCode, RawContactSubmission, ValidationError};
use dunes_persistence_contracts::MockDatabase;
use dunes_utils::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::{tests::Sut, ContactFeatureServiceImpl};

fn raw(value: Value) -> RawContactSubmission {
    match value {
        Value::Object(record) => record.into(),
        _ => panic!("expected an object"),
    }
}

#[tokio::test]
async fn ok() {
    // Arrange
    let submission = raw(json!({
        "name": "Sara Ali",
        "email": "sara@example.com",
        "phone": "+971 50 123 4567",
        "eventType": "Conference",
        "message": "We would like to host a conference for 200 guests in March.",
    }));

    let db = MockDatabase::build(true);
    let contact_create = MockContactCreateCommandService::new()
        .with_invoke(CONFERENCE.submission.clone(), Ok(CONFERENCE.clone()));

    let sut = ContactFeatureServiceImpl { db, contact_create };

    // Act
    let result = sut.submit_message(submission).await;

    // Assert
    assert_eq!(result.unwrap(), *CONFERENCE);
}

#[tokio::test]
async fn ok_without_optional_fields() {
    // Arrange
    let submission = raw(json!({
        "name": "Omar Haddad",
        "email": "omar.haddad@example.org",
        "phone": null,
        "eventType": "Wedding",
        "message": "Looking for an outdoor venue for about 150 guests in October.",
    }));

    let db = MockDatabase::build(true);
    let contact_create = MockContactCreateCommandService::new()
        .with_invoke(WEDDING.submission.clone(), Ok(WEDDING.clone()));

    let sut = ContactFeatureServiceImpl { db, contact_create };

    // Act
    let result = sut.submit_message(submission).await;

    // Assert
    let result = result.unwrap();
    assert_eq!(result.submission.phone, None);
    assert_eq!(result, *WEDDING);
}

#[tokio::test]
async fn invalid_form_data() {
    // Arrange
    let submission = raw(json!({ "name": "A", "email": "bad", "message": "hi" }));

    let sut = Sut::default();

    // Act
    let result = sut.submit_message(submission).await;

    // Assert
    let issues = match result {
        Err(ContactSubmitError::InvalidFormData(ValidationError { issues })) => issues,
        result => panic!("expected invalid form data, got {result:?}"),
    };
    assert_eq!(
        issues
            .iter()
            .map(|issue| (issue.field, issue.code))
            .collect::<Vec<_>>(),
        [
            ("name", IssueCode::TooSmall),
            ("email", IssueCode::InvalidString),
            ("message", IssueCode::TooSmall),
        ]
    );
}

#[tokio::test]
async fn empty_submission() {
    // Arrange
    let sut = Sut::default();

    // Act
    let result = sut.submit_message(RawContactSubmission::default()).await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSubmitError::InvalidFormData(ValidationError { issues }))
            if issues.iter().all(|issue| issue.code == IssueCode::InvalidType)
    );
}

#[tokio::test]
async fn store_failure() {
    // Arrange
    let submission = raw(json!({
        "name": "Sara Ali",
        "email": "sara@example.com",
        "phone": "+971 50 123 4567",
        "eventType": "Conference",
        "message": "We would like to host a conference for 200 guests in March.",
    }));

    let db = MockDatabase::build(false);
    let contact_create = MockContactCreateCommandService::new()
        .with_invoke(CONFERENCE.submission.clone(), Err(anyhow!("disk full")));

    let sut = ContactFeatureServiceImpl { db, contact_create };

    // Act
    let result = sut.submit_message(submission).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Other(_)));
}

#[tokio::test]
async fn database_unavailable() {
    // Arrange
    let submission = raw(json!({
        "name": "Sara Ali",
        "email": "sara@example.com",
        "message": "We would like to host a conference for 200 guests in March.",
    }));

    let mut db = MockDatabase::new();
    db.expect_begin_transaction()
        .once()
        .return_once(|| Box::pin(std::future::ready(Err(anyhow!("connection refused")))));

    let sut = ContactFeatureServiceImpl {
        db,
        ..Sut::default()
    };

    // Act
    let result = sut.submit_message(submission).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Other(_)));
}
