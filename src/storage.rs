use std::fmt::Debug;
use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::sync::Mutex;

use crate::domain::Submission;
use crate::routes::error_chain_fmt;

/// File-backed store for accepted submissions: one JSON file holding an
/// array, rewritten pretty-printed in full on every append.
///
/// The whole read-modify-write runs under `write_lock`, so two in-flight
/// appends can never both read the same prior contents and clobber each
/// other's entry. One store instance must own the file; it is shared across
/// workers via `web::Data`.
pub struct SubmissionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

#[derive(thiserror::Error)]
pub enum StoreError {
    #[error("could not write the submissions file")]
    Write(#[from] std::io::Error),
    #[error("could not serialize the submissions list")]
    Serialize(#[from] serde_json::Error),
}

impl Debug for StoreError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)?;
        Ok(())
    }
}

impl SubmissionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Append one submission and rewrite the file.
    ///
    /// A missing or unparseable file counts as an empty collection (the
    /// store's historical contract), so the first append after corruption
    /// starts the list over; the condition is logged rather than surfaced.
    /// Only the write back can fail.
    #[tracing::instrument(name = "Appending submission to store", skip(self, submission))]
    pub async fn append(
        &self,
        submission: Submission,
    ) -> Result<(), StoreError> {
        // held across read *and* write; dropping it between the two would
        // reintroduce the lost-update race
        let _guard = self.write_lock.lock().await;

        let mut submissions = self.read_or_empty().await;
        submissions.push(submission);

        let json = serde_json::to_string_pretty(&submissions)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Current contents of the store; empty if the file is missing or does
    /// not parse. Takes the lock so a concurrent rewrite is never observed
    /// half-written.
    pub async fn load(&self) -> Vec<Submission> {
        let _guard = self.write_lock.lock().await;
        self.read_or_empty().await
    }

    async fn read_or_empty(&self) -> Vec<Submission> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!(
                        error.message = %e,
                        path = %self.path.display(),
                        "could not read submissions file; treating as empty"
                    );
                }
                return Vec::new();
            }
        };

        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::warn!(
                error.message = %e,
                path = %self.path.display(),
                "submissions file did not parse; treating as empty"
            );
            Vec::new()
        })
    }
}
