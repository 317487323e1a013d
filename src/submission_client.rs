use std::fmt::Debug;

use reqwest::Client;
use reqwest::StatusCode;

use crate::domain::validate;
use crate::domain::FormFields;
use crate::domain::ValidationErrors;
use crate::routes::error_chain_fmt;

/// Client side of the contact form: checks field values locally, and only
/// then POSTs the submission to the server.
///
/// The inner `reqwest::Client` keeps a connection pool, so one
/// `SubmissionClient` should be reused across submissions rather than
/// rebuilt per call.
pub struct SubmissionClient {
    http_client: Client,
    base_url: String,
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    /// Local validation failed; no request was issued. `Display` yields the
    /// joined per-field messages, ready for the form's warning region.
    #[error("{0}")]
    Invalid(ValidationErrors),
    #[error("server rejected the submission: HTTP {0}")]
    Rejected(StatusCode),
    #[error("could not reach the submission endpoint")]
    Network(#[from] reqwest::Error),
}

impl Debug for SubmitError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)?;
        Ok(())
    }
}

impl SubmissionClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    /// Validate and submit one form's worth of field values.
    ///
    /// Validation failures come back as `SubmitError::Invalid` without any
    /// network traffic. Otherwise the submission is POSTed JSON-encoded to
    /// `{base_url}/submit-form`; a 2xx response yields the server's
    /// confirmation body. There is no retry.
    pub async fn submit(
        &self,
        fields: FormFields,
    ) -> Result<String, SubmitError> {
        let submission = validate(fields).map_err(SubmitError::Invalid)?;

        let resp = self
            .http_client
            .post(format!("{}/submit-form", self.base_url))
            .json(&submission)
            .send()
            .await?;

        match resp.status().is_success() {
            true => Ok(resp.text().await?),
            false => Err(SubmitError::Rejected(resp.status())),
        }
    }
}
