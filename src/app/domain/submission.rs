use super::validation_helpers::{is_email_shape, is_phone_shape};

/// A validated contact-form inquiry. Once constructed, the name and message
/// are non-empty and at least one contact channel is present and well-formed.
///
/// Purely transient: built from one request, rendered into an email, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
}

/// Why a candidate submission was rejected. The display strings are the
/// exact messages returned to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Name and message are required")]
    MissingRequired,
    #[error("Please provide either an email address or phone number")]
    NoContactChannel,
    #[error("Please provide a valid email address")]
    InvalidEmail,
    #[error("Please provide a valid phone number")]
    InvalidPhone,
}

/// A contact method attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub label: &'static str,
    pub value: String,
    pub kind: ChannelKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Email,
    Phone,
}

impl Submission {
    /// Validate raw request fields into a Submission.
    ///
    /// Checks run in a fixed order and the first failure wins: required
    /// fields, then channel presence, then email shape, then phone shape.
    /// A present email is always validated; a valid phone does not excuse a
    /// malformed email.
    pub fn from_parts(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        message: Option<String>,
    ) -> Result<Self, SubmissionError> {
        let name = name.unwrap_or_default();
        let message = message.unwrap_or_default();

        if name.is_empty() || message.is_empty() {
            return Err(SubmissionError::MissingRequired);
        }

        let has_email = email.as_deref().is_some_and(|e| !e.trim().is_empty());
        let has_phone = phone.as_deref().is_some_and(|p| !p.trim().is_empty());

        if !has_email && !has_phone {
            return Err(SubmissionError::NoContactChannel);
        }

        if has_email {
            let e = email.as_deref().unwrap_or_default();
            if !is_email_shape(e) {
                return Err(SubmissionError::InvalidEmail);
            }
        }

        if has_phone {
            let p = phone.as_deref().unwrap_or_default();
            if !is_phone_shape(p) {
                return Err(SubmissionError::InvalidPhone);
            }
        }

        Ok(Self {
            name,
            email,
            phone,
            message,
        })
    }

    /// Whether a non-blank email was provided.
    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.trim().is_empty())
    }

    /// Whether a non-blank phone number was provided.
    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|p| !p.trim().is_empty())
    }

    /// The contact channels present on this submission, email before phone.
    pub fn channels(&self) -> Vec<Channel> {
        let mut channels = Vec::with_capacity(2);
        if self.has_email() {
            channels.push(Channel {
                label: "Email",
                value: self.email.clone().unwrap_or_default(),
                kind: ChannelKind::Email,
            });
        }
        if self.has_phone() {
            channels.push(Channel {
                label: "Phone",
                value: self.phone.clone().unwrap_or_default(),
                kind: ChannelKind::Phone,
            });
        }
        channels
    }
}
