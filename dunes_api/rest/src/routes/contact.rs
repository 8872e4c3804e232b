use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use dunes_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use dunes_models::contact::{schema::CONTACT_SUBMISSION_SCHEMA, RawContactSubmission};

use crate::{
    errors::{invalid_form_data, send_message_failed},
    models::contact::{ApiContactMessage, ApiIssue},
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit_message))
        .route("/api/contact/schema", routing::get(schema))
        .with_state(service)
}

async fn submit_message(service: State<Arc<impl ContactFeatureService>>, body: Bytes) -> Response {
    let submission = match RawContactSubmission::from_json(&body) {
        Ok(submission) => submission,
        Err(err) => return invalid_form_data(vec![err.into()]),
    };

    match service.submit_message(submission).await {
        Ok(message) => (StatusCode::CREATED, Json(ApiContactMessage::from(message))).into_response(),
        Err(ContactSubmitError::InvalidFormData(err)) => {
            invalid_form_data(err.issues.into_iter().map(ApiIssue::from).collect())
        }
        Err(ContactSubmitError::Other(err)) => send_message_failed(err),
    }
}

async fn schema() -> Response {
    Json(CONTACT_SUBMISSION_SCHEMA).into_response()
}
