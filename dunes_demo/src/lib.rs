use dunes_persistence_contracts::contact::ContactRepository;
use uuid::{uuid, Uuid};

pub mod contact;

pub const UUID1: Uuid = uuid!("eb1cd87a-4475-4d68-a2c2-0216bdaac8f7");
pub const UUID2: Uuid = uuid!("0f6c3b52-9a8e-4e37-8f5b-2d8e1c7a4b90");

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    contact: impl ContactRepository<Txn>,
) -> anyhow::Result<()> {
    contact::create(txn, contact).await?;
    Ok(())
}
