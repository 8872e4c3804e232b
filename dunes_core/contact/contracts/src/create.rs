use std::future::Future;

use dunes_models::contact::{ContactMessage, ContactSubmission};

/// Stores a validated submission as a new contact message.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactCreateCommandService<Txn: Send + Sync + 'static>:
    Send + Sync + 'static
{
    fn invoke(
        &self,
        txn: &mut Txn,
        submission: ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<ContactMessage>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactCreateCommandService<Txn> {
    pub fn with_invoke(
        mut self,
        submission: ContactSubmission,
        result: anyhow::Result<ContactMessage>,
    ) -> Self {
        self.expect_invoke()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(submission),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
