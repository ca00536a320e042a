use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, Message, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, Tokio1Executor,
};

use super::{EmailError, EmailMessage, EmailSender};

/// SMTP email sender for production use.
#[derive(Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Create a new SMTP mailer.
    ///
    /// # Arguments
    /// * `host` - SMTP server hostname
    /// * `port` - SMTP server port (typically 587 for STARTTLS, 465 for TLS)
    /// * `user` - SMTP username (optional for some servers)
    /// * `pass` - SMTP password (optional for some servers)
    pub fn new(
        host: String,
        port: u16,
        user: Option<String>,
        pass: Option<String>,
    ) -> Result<Self, EmailError> {
        let mut transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&host)
            .port(port);

        // Add authentication if provided
        if let (Some(user), Some(pass)) = (user, pass) {
            let creds = Credentials::new(user, pass);
            transport = transport.credentials(creds);
        }

        let transport = transport.build();

        Ok(Self { transport })
    }
}

#[async_trait]
impl EmailSender for SmtpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let from: Mailbox = message.from.parse()
            .map_err(|e| EmailError::Config(format!("Invalid from address '{}': {}", message.from, e)))?;

        let to: Mailbox = message.to.parse()
            .map_err(|e| EmailError::Config(format!("Invalid to address '{}': {}", message.to, e)))?;

        let builder = Message::builder()
            .from(from)
            .to(to)
            .subject(&message.subject);

        let email = match &message.html {
            Some(html) => builder
                .multipart(MultiPart::alternative_plain_html(
                    message.text.clone(),
                    html.clone(),
                ))
                .map_err(|e| EmailError::Send(format!("Failed to build email message: {}", e)))?,
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(message.text.clone())
                .map_err(|e| EmailError::Send(format!("Failed to build email message: {}", e)))?,
        };

        lettre::AsyncTransport::send(&self.transport, email).await
            .map(|_| ())
            .map_err(|e| EmailError::Smtp(format!("SMTP send failed: {}", e)))?;

        Ok(())
    }
}
