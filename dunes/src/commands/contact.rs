use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Subcommand;
use dunes_api_rest::models::contact::ApiIssue;
use dunes_models::contact::{
    schema::CONTACT_SUBMISSION_SCHEMA, ContactSubmission, RawContactSubmission, ValidationError,
};
use tokio::io::AsyncReadExt;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Print the contact form schema as JSON
    Schema,
    /// Check a contact form submission against the schema
    Validate {
        /// JSON file containing the submission, stdin if omitted
        file: Option<PathBuf>,
    },
}

impl ContactCommand {
    pub async fn invoke(self) -> anyhow::Result<()> {
        match self {
            ContactCommand::Schema => schema(),
            ContactCommand::Validate { file } => validate(file.as_deref()).await,
        }
    }
}

fn schema() -> anyhow::Result<()> {
    let schema = serde_json::to_string_pretty(&CONTACT_SUBMISSION_SCHEMA)?;
    println!("{schema}");
    Ok(())
}

async fn validate(file: Option<&Path>) -> anyhow::Result<()> {
    let body = match file {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read submission from {}", path.display()))?,
        None => {
            let mut body = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut body)
                .await
                .context("Failed to read submission from stdin")?;
            body
        }
    };

    match check(&body) {
        Ok(_) => {
            println!("Submission is valid");
            Ok(())
        }
        Err(issues) => {
            println!("{}", serde_json::to_string_pretty(&issues)?);
            bail!("Invalid form data ({} issues)", issues.len())
        }
    }
}

/// Reports problems in the same shape as the `details` of a rejected
/// `POST /api/contact`.
fn check(body: &[u8]) -> Result<ContactSubmission, Vec<ApiIssue>> {
    let raw = RawContactSubmission::from_json(body).map_err(|err| vec![err.into()])?;
    ContactSubmission::parse(&raw)
        .map_err(|ValidationError { issues }| issues.into_iter().map(Into::into).collect())
}
