//! Process local storage backend.
//!
//! All committed data lives behind a single [`RwLock`]. A transaction reads
//! the committed state plus its own staged writes and applies the staged
//! writes atomically on commit.

use std::sync::Arc;

use anyhow::anyhow;
use dunes_models::contact::ContactMessage;
use dunes_persistence_contracts::{Database, Transaction};
use dunes_utils::trace_instrument;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::trace;

pub mod contact;

#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    store: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    contact_messages: Vec<ContactMessage>,
}

#[derive(Debug)]
pub struct MemoryTransaction {
    store: Arc<RwLock<Store>>,
    staged: Staged,
}

#[derive(Debug, Default)]
struct Staged {
    contact_messages: Vec<ContactMessage>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Database for MemoryDatabase {
    type Transaction = MemoryTransaction;

    async fn begin_transaction(&self) -> anyhow::Result<Self::Transaction> {
        trace!("begin transaction");

        Ok(MemoryTransaction {
            store: Arc::clone(&self.store),
            staged: Staged::default(),
        })
    }

    #[trace_instrument(skip(self))]
    async fn ping(&self) -> anyhow::Result<()> {
        let _store = self.store.read().await;
        Ok(())
    }
}

impl MemoryTransaction {
    async fn committed(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }
}

impl Transaction for MemoryTransaction {
    async fn commit(self) -> anyhow::Result<()> {
        trace!("commit transaction");

        let mut store = self.store.write().await;

        if let Some(duplicate) = self.staged.contact_messages.iter().find(|message| {
            store
                .contact_messages
                .iter()
                .any(|existing| existing.id == message.id)
        }) {
            return Err(anyhow!(
                "Failed to commit transaction: contact message {} already exists",
                duplicate.id
            ));
        }

        store.contact_messages.extend(self.staged.contact_messages);
        Ok(())
    }

    async fn rollback(self) -> anyhow::Result<()> {
        trace!("rollback transaction");
        Ok(())
    }
}
