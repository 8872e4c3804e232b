use std::collections::HashSet;

use dunes_demo::{
    contact::{ALL_CONTACT_MESSAGES, CONFERENCE, CONFERENCE_SUBMISSION, WEDDING},
    UUID1, UUID2,
};
use dunes_models::contact::ContactMessage;
use dunes_persistence_contracts::{
    contact::{ContactRepoError, ContactRepository},
    Database, Transaction,
};
use dunes_persistence_memory::contact::MemoryContactRepository;
use dunes_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::common::{setup, setup_clean};

mod common;

const REPO: MemoryContactRepository = MemoryContactRepository;

fn new_message(id: uuid::Uuid) -> ContactMessage {
    ContactMessage {
        id: id.into(),
        submission: CONFERENCE_SUBMISSION.clone(),
        created_at: CONFERENCE.created_at,
    }
}

#[tokio::test]
async fn get() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for &message in &*ALL_CONTACT_MESSAGES {
        let result = REPO.get(&mut txn, message.id).await.unwrap().unwrap();
        assert_eq!(&result, message);
    }

    let result = REPO.get(&mut txn, UUID1.into()).await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn list() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list(&mut txn).await.unwrap();

    assert_eq!(result, [CONFERENCE.clone(), WEDDING.clone()]);
}

#[tokio::test]
async fn list_empty() {
    let db = setup_clean();
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list(&mut txn).await.unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn create_round_trip() {
    let db = setup().await;
    let message = new_message(UUID1);

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &message).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.get(&mut txn, message.id).await.unwrap();
    assert_eq!(result, Some(message.clone()));

    let result = REPO.list(&mut txn).await.unwrap();
    assert_eq!(result.last(), Some(&message));
    assert_eq!(result.len(), ALL_CONTACT_MESSAGES.len() + 1);
}

#[tokio::test]
async fn create_is_visible_inside_transaction() {
    let db = setup_clean();
    let message = new_message(UUID1);

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &message).await.unwrap();

    let mut other = db.begin_transaction().await.unwrap();
    assert_eq!(REPO.get(&mut other, message.id).await.unwrap(), None);

    let result = REPO.get(&mut txn, message.id).await.unwrap();
    assert_eq!(result, Some(message));
}

#[tokio::test]
async fn rollback_discards_writes() {
    let db = setup_clean();

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &new_message(UUID1)).await.unwrap();
    txn.rollback().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    assert!(REPO.list(&mut txn).await.unwrap().is_empty());
}

#[tokio::test]
async fn drop_discards_writes() {
    let db = setup_clean();

    {
        let mut txn = db.begin_transaction().await.unwrap();
        REPO.create(&mut txn, &new_message(UUID1)).await.unwrap();
        REPO.create(&mut txn, &new_message(UUID2)).await.unwrap();
    }

    let mut txn = db.begin_transaction().await.unwrap();
    assert!(REPO.list(&mut txn).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_conflict() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let mut duplicate = new_message(UUID1);
    duplicate.id = CONFERENCE.id;
    let result = REPO.create(&mut txn, &duplicate).await;
    assert_matches!(result, Err(ContactRepoError::Conflict));

    REPO.create(&mut txn, &new_message(UUID1)).await.unwrap();
    let result = REPO.create(&mut txn, &new_message(UUID1)).await;
    assert_matches!(result, Err(ContactRepoError::Conflict));
}

#[tokio::test]
async fn commit_rejects_concurrent_duplicate() {
    let db = setup_clean();
    let message = new_message(UUID1);

    let mut first = db.begin_transaction().await.unwrap();
    let mut second = db.begin_transaction().await.unwrap();
    REPO.create(&mut first, &message).await.unwrap();
    REPO.create(&mut second, &message).await.unwrap();

    first.commit().await.unwrap();
    second.commit().await.unwrap_err();

    let mut txn = db.begin_transaction().await.unwrap();
    assert_eq!(REPO.list(&mut txn).await.unwrap(), [message]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_all_stored() {
    let db = setup_clean();

    let ids = futures::future::join_all((0..32).map(|_| {
        let db = db.clone();
        tokio::spawn(async move {
            let message = new_message(uuid::Uuid::new_v4());
            let mut txn = db.begin_transaction().await.unwrap();
            REPO.create(&mut txn, &message).await.unwrap();
            txn.commit().await.unwrap();
            message.id
        })
    }))
    .await
    .into_iter()
    .map(Result::unwrap)
    .collect::<HashSet<_>>();

    let mut txn = db.begin_transaction().await.unwrap();
    let stored = REPO.list(&mut txn).await.unwrap();
    assert_eq!(stored.len(), 32);
    assert_eq!(
        stored.iter().map(|message| message.id).collect::<HashSet<_>>(),
        ids
    );
}

#[tokio::test]
async fn ping() {
    let db = setup_clean();
    db.ping().await.unwrap();
}
