use std::future::Future;

use dunes_models::contact::{ContactMessage, RawContactSubmission, ValidationError};
use thiserror::Error;

pub mod create;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact form submission and store it.
    ///
    /// Nothing is written if the submission is invalid.
    fn submit_message(
        &self,
        submission: RawContactSubmission,
    ) -> impl Future<Output = Result<ContactMessage, ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Invalid form data.")]
    InvalidFormData(#[source] ValidationError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit_message(
        mut self,
        submission: RawContactSubmission,
        result: Result<ContactMessage, ContactSubmitError>,
    ) -> Self {
        self.expect_submit_message()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
