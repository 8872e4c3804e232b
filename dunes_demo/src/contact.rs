use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use dunes_models::contact::{ContactMessage, ContactSubmission};
use dunes_persistence_contracts::contact::ContactRepository;
use uuid::uuid;

pub static ALL_CONTACT_MESSAGES: LazyLock<Vec<&ContactMessage>> =
    LazyLock::new(|| vec![&CONFERENCE, &WEDDING]);

pub static CONFERENCE: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    id: uuid!("3b0c6d0e-7a3f-4f2b-9d59-5a1c8f0e6b21").into(),
    submission: CONFERENCE_SUBMISSION.clone(),
    created_at: timestamp(1_767_225_600),
});

pub static WEDDING: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    id: uuid!("c4e2a9d7-18b5-4c63-a0f1-6e7d3b2c9a58").into(),
    submission: ContactSubmission {
        name: "Omar Haddad".try_into().unwrap(),
        email: "omar.haddad@example.org".try_into().unwrap(),
        phone: None,
        event_type: Some("Wedding".try_into().unwrap()),
        message: "Looking for an outdoor venue for about 150 guests in October."
            .try_into()
            .unwrap(),
    },
    created_at: timestamp(1_767_225_600 + 4242),
});

/// A valid submission that has not been stored.
pub static CONFERENCE_SUBMISSION: LazyLock<ContactSubmission> =
    LazyLock::new(|| ContactSubmission {
        name: "Sara Ali".try_into().unwrap(),
        email: "sara@example.com".try_into().unwrap(),
        phone: Some("+971 50 123 4567".try_into().unwrap()),
        event_type: Some("Conference".try_into().unwrap()),
        message: "We would like to host a conference for 200 guests in March."
            .try_into()
            .unwrap(),
    });

fn timestamp(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl ContactRepository<Txn>,
) -> anyhow::Result<()> {
    for &message in &*ALL_CONTACT_MESSAGES {
        repo.create(txn, message).await?;
    }
    Ok(())
}
