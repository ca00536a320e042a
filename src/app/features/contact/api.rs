use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::format;
use crate::app::{
    domain::Submission,
    error::AppError,
    mail::EmailMessage,
    AppState,
};

/// Contact request body from the JSON API. All fields optional here; the
/// submission validation decides what is actually required.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /api/contact — Validate an inquiry and email it to the foundation.
///
/// Server-side validation is authoritative; it never trusts whatever checks
/// the submitting form ran.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(|_| AppError::MalformedRequest)?;

    let submission =
        Submission::from_parts(request.name, request.email, request.phone, request.message)?;

    deliver(&state, &submission).await?;

    Ok(Json(json!({ "message": "Email sent successfully" })))
}

/// Render and send one inquiry email. Shared by the JSON API and the HTML
/// form flow. Delivery failure is terminal; the caller must resubmit.
pub(crate) async fn deliver(state: &AppState, submission: &Submission) -> Result<(), AppError> {
    let timestamp = format::ist_now().map_err(AppError::Format)?;
    let channels = submission.channels();
    let (text, html) =
        format::render_bodies(submission, &timestamp, &channels).map_err(AppError::Format)?;

    let message = EmailMessage::new(
        state.config.mail_to.clone(),
        format::subject(submission),
        text,
        state.config.mail_from.clone(),
    )
    .with_html(html);

    state.mail.send(&message).await.map_err(AppError::Mail)
}
