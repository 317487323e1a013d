use std::fmt::Debug;

use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web::ResponseError;

use super::error_chain_fmt;
use crate::domain::Submission;
use crate::storage::StoreError;
use crate::storage::SubmissionStore;

#[derive(thiserror::Error)]
pub enum SubmitFormError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Debug for SubmitFormError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)?;
        Ok(())
    }
}

impl ResponseError for SubmitFormError {
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        // the caller gets the fixed message; the cause chain goes to the logs
        HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR).body("Error saving data")
    }
}

/// `POST /submit-form`
///
/// The body is a JSON `Submission`. Extraction enforces the shape only
/// (missing or mistyped fields are rejected with 400 before the handler
/// runs); field contents are not inspected again server-side, which is what
/// this store has always accepted.
///
/// # Request example
///
/// ```sh
///     curl --data '{"name":"John","email":"john@foo.com","subject":"Hi","message":"..."}' \
///         -H 'Content-Type: application/json' http://127.0.0.1:3000/submit-form
/// ```
#[tracing::instrument(
    name = "Saving contact-form submission",
    skip(payload, store),
    fields(
        submission_email = %payload.email,
        submission_name = %payload.name,
    )
)]
pub async fn submit_form(
    payload: web::Json<Submission>,
    // inherited via App.app_data
    store: web::Data<SubmissionStore>,
) -> Result<HttpResponse, SubmitFormError> {
    store.append(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().body("Data saved successfully"))
}
