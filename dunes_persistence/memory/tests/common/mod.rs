use dunes_persistence_contracts::{Database, Transaction};
use dunes_persistence_memory::{contact::MemoryContactRepository, MemoryDatabase};

pub type Db = MemoryDatabase;

pub async fn setup() -> Db {
    let db = setup_clean();

    let mut txn = db.begin_transaction().await.unwrap();
    dunes_demo::create(&mut txn, MemoryContactRepository)
        .await
        .unwrap();
    txn.commit().await.unwrap();

    db
}

pub fn setup_clean() -> Db {
    MemoryDatabase::new()
}
