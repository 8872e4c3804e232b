use dunes_di::Build;
use dunes_models::contact::{ContactMessage, ContactMessageId};
use dunes_persistence_contracts::contact::{ContactRepoError, ContactRepository};

use crate::MemoryTransaction;

#[derive(Debug, Clone, Build)]
pub struct MemoryContactRepository;

impl ContactRepository<MemoryTransaction> for MemoryContactRepository {
    async fn get(
        &self,
        txn: &mut MemoryTransaction,
        id: ContactMessageId,
    ) -> anyhow::Result<Option<ContactMessage>> {
        let committed = txn.committed().await;
        Ok(committed
            .contact_messages
            .iter()
            .chain(&txn.staged.contact_messages)
            .find(|message| message.id == id)
            .cloned())
    }

    async fn list(&self, txn: &mut MemoryTransaction) -> anyhow::Result<Vec<ContactMessage>> {
        let committed = txn.committed().await;
        Ok(committed
            .contact_messages
            .iter()
            .chain(&txn.staged.contact_messages)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        txn: &mut MemoryTransaction,
        message: &ContactMessage,
    ) -> Result<(), ContactRepoError> {
        let exists = {
            let committed = txn.committed().await;
            committed
                .contact_messages
                .iter()
                .chain(&txn.staged.contact_messages)
                .any(|existing| existing.id == message.id)
        };

        if exists {
            return Err(ContactRepoError::Conflict);
        }

        txn.staged.contact_messages.push(message.clone());
        Ok(())
    }
}
