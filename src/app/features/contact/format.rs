use askama::Template;
use time::macros::{format_description, offset};
use time::OffsetDateTime;

use crate::app::domain::{Channel, ChannelKind, Submission};
use crate::app::APP_NAME;

/// Errors from rendering the inquiry email bodies.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error(transparent)]
    Template(#[from] askama::Error),
    #[error(transparent)]
    Timestamp(#[from] time::error::Format),
}

/// HTML body of the inquiry email. Askama escapes all interpolated user text.
#[derive(Template)]
#[template(path = "email/contact_inquiry.html")]
struct InquiryEmailTemplate<'a> {
    app_name: &'static str,
    name: &'a str,
    message: &'a str,
    timestamp: &'a str,
    channels: &'a [Channel],
}

/// Subject line for an inquiry email.
pub fn subject(submission: &Submission) -> String {
    format!(
        "\u{1f31f} New Inquiry regarding {} - {}",
        submission.message, APP_NAME
    )
}

/// Current time in India, formatted for the inquiry email:
/// `8 August 2026 at 02:30 pm`.
pub fn ist_now() -> Result<String, FormatError> {
    format_timestamp(OffsetDateTime::now_utc())
}

fn format_timestamp(at: OffsetDateTime) -> Result<String, FormatError> {
    let ist = at.to_offset(offset!(+5:30));
    let formatted = ist.format(&format_description!(
        "[day padding:none] [month repr:long] [year] at [hour repr:12]:[minute] [period case:lower]"
    ))?;
    Ok(formatted)
}

/// Render the plain-text and HTML bodies for one inquiry.
///
/// Pure function of its inputs; the handler supplies the timestamp and the
/// submission's channel list.
pub fn render_bodies(
    submission: &Submission,
    timestamp: &str,
    channels: &[Channel],
) -> Result<(String, String), FormatError> {
    let contact_info = channels
        .iter()
        .map(|c| format!("{}: {}", c.label, c.value))
        .collect::<Vec<_>>()
        .join("\n        ");

    let text = format!(
        "=== NEW CONTACT FORM SUBMISSION ===\n\
         \n\
         \u{1f4c5} Received: {timestamp}\n\
         \u{1f464} Name: {name}\n\
         \n\
         \u{1f4de} Contact Information:\n\
         \x20       {contact_info}\n\
         \n\
         \u{1f4ac} Message:\n\
         {message}\n\
         \n\
         ---\n\
         This inquiry was submitted through the {app_name} contact form.\n\
         Please respond promptly.\n",
        timestamp = timestamp,
        name = submission.name,
        contact_info = contact_info,
        message = submission.message,
        app_name = APP_NAME,
    );

    let html = InquiryEmailTemplate {
        app_name: APP_NAME,
        name: &submission.name,
        message: &submission.message,
        timestamp,
        channels,
    }
    .render()?;

    Ok((text, html))
}
