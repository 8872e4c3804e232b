use anyhow::Context;
use dunes_core_contact_contracts::{
    create::ContactCreateCommandService, ContactFeatureService, ContactSubmitError,
};
use dunes_di::Build;
use dunes_models::contact::{ContactMessage, ContactSubmission, RawContactSubmission};
use dunes_persistence_contracts::{Database, Transaction};
use dunes_utils::trace_instrument;
use tracing::debug;

pub mod create;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct ContactFeatureServiceImpl<Db, ContactCreate> {
    db: Db,
    contact_create: ContactCreate,
}

impl<Db, ContactCreate> ContactFeatureService for ContactFeatureServiceImpl<Db, ContactCreate>
where
    Db: Database,
    ContactCreate: ContactCreateCommandService<Db::Transaction>,
{
    #[trace_instrument(skip(self, submission))]
    async fn submit_message(
        &self,
        submission: RawContactSubmission,
    ) -> Result<ContactMessage, ContactSubmitError> {
        let submission = ContactSubmission::parse(&submission).map_err(|err| {
            debug!(issues = ?err.issues, "rejected contact form submission");
            ContactSubmitError::InvalidFormData(err)
        })?;

        let mut txn = self.db.begin_transaction().await?;

        let message = self
            .contact_create
            .invoke(&mut txn, submission)
            .await
            .context("Failed to store contact message")?;

        txn.commit().await?;

        Ok(message)
    }
}
