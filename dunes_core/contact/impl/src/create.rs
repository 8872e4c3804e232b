use anyhow::anyhow;
use dunes_core_contact_contracts::create::ContactCreateCommandService;
use dunes_di::Build;
use dunes_models::contact::{ContactMessage, ContactSubmission};
use dunes_persistence_contracts::contact::{ContactRepoError, ContactRepository};
use dunes_shared_contracts::{id::IdService, time::TimeService};
use dunes_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct ContactCreateCommandServiceImpl<Id, Time, ContactRepo> {
    id: Id,
    time: Time,
    contact_repo: ContactRepo,
}

impl<Txn, Id, Time, ContactRepo> ContactCreateCommandService<Txn>
    for ContactCreateCommandServiceImpl<Id, Time, ContactRepo>
where
    Txn: Send + Sync + 'static,
    Id: IdService,
    Time: TimeService,
    ContactRepo: ContactRepository<Txn>,
{
    #[trace_instrument(skip(self, txn, submission))]
    async fn invoke(
        &self,
        txn: &mut Txn,
        submission: ContactSubmission,
    ) -> anyhow::Result<ContactMessage> {
        let message = ContactMessage {
            id: self.id.generate(),
            submission,
            created_at: self.time.now(),
        };

        self.contact_repo
            .create(txn, &message)
            .await
            .map_err(|err| match err {
                ContactRepoError::Conflict => {
                    anyhow!("A contact message with the id {} already exists", message.id)
                }
                ContactRepoError::Other(err) => {
                    err.context("Failed to create contact message in database")
                }
            })?;

        Ok(message)
    }
}
