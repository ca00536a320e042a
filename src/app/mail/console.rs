use async_trait::async_trait;

use super::{EmailError, EmailMessage, EmailSender};

/// Console email sender for local development.
/// Logs email details to the terminal using tracing::info!.
#[derive(Debug)]
pub struct ConsoleMailer;

#[async_trait]
impl EmailSender for ConsoleMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        tracing::info!(
            to = %message.to,
            from = %message.from,
            subject = %message.subject,
            body = %message.text,
            has_html = message.html.is_some(),
            "Email sent (console)"
        );
        Ok(())
    }
}
