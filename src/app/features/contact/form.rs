use crate::app::domain::validation_helpers::{is_email_shape, is_phone_shape};

/// Inline message for a name shorter than 2 characters.
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";

/// Inline message for a message shorter than 10 characters.
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters.";

/// Inline message for the cross-field contact-channel rule. Always rendered
/// on the email field so it has a fixed place to appear.
pub const CONTACT_REQUIRED: &str =
    "Please provide either a valid email address or phone number (at least one is required)";

/// Per-field error messages for the contact form. Empty means the candidate
/// fields are acceptable to submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    // Accessors for templates: empty string when there is no error.
    pub fn name_msg(&self) -> &str {
        self.name.unwrap_or_default()
    }

    pub fn email_msg(&self) -> &str {
        self.email.unwrap_or_default()
    }

    pub fn message_msg(&self) -> &str {
        self.message.unwrap_or_default()
    }
}

/// Field-level validation of candidate form input. Pure: no I/O, no state,
/// same input always yields the same errors.
///
/// The cross-field rule collapses three failures into one message anchored on
/// the email field: no channel given, a non-blank email of the wrong shape,
/// or a non-blank phone of the wrong shape.
pub fn check(name: &str, email: &str, phone: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if name.chars().count() < 2 {
        errors.name = Some(NAME_TOO_SHORT);
    }

    if message.chars().count() < 10 {
        errors.message = Some(MESSAGE_TOO_SHORT);
    }

    let has_email = !email.trim().is_empty();
    let has_phone = !phone.trim().is_empty();

    let channel_ok = (has_email || has_phone)
        && (!has_email || is_email_shape(email))
        && (!has_phone || is_phone_shape(phone));

    if !channel_ok {
        errors.email = Some(CONTACT_REQUIRED);
    }

    errors
}
