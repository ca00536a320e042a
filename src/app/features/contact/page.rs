use askama::Template;
use axum::{extract::State, routing::get, Form, Router};
use serde::Deserialize;
use validator::Validate;

use super::{api, form, form::FieldErrors};
use crate::app::{domain::Submission, AppState, APP_NAME};

/// Banner shown when delivery fails.
const SEND_FAILED: &str = "Failed to send message. Please try again later.";

/// Contact form data from HTTP request.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 5000))]
    pub message: String,
}

/// Contact page template.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub app_name: &'static str,
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub error: String,
    pub success: bool,
}

impl ContactTemplate {
    fn blank() -> Self {
        Self {
            app_name: APP_NAME,
            form: ContactForm::default(),
            errors: FieldErrors::default(),
            error: String::new(),
            success: false,
        }
    }
}

/// GET /contact — Show the contact page.
pub async fn show() -> ContactTemplate {
    ContactTemplate::blank()
}

/// POST /contact — Process the contact form.
///
/// Field-level validation renders inline messages; once it passes, the same
/// submission pipeline as the JSON API runs. On success the form is cleared
/// and a confirmation banner shown.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> ContactTemplate {
    // Validate form structure
    if form.validate().is_err() {
        return ContactTemplate {
            error: "Invalid form data".to_string(),
            form,
            ..ContactTemplate::blank()
        };
    }

    // Field-level validation with inline messages
    let errors = form::check(&form.name, &form.email, &form.phone, &form.message);
    if !errors.is_empty() {
        return ContactTemplate {
            form,
            errors,
            ..ContactTemplate::blank()
        };
    }

    // Authoritative validation into the domain type
    let submission = match Submission::from_parts(
        Some(form.name.clone()),
        Some(form.email.clone()),
        Some(form.phone.clone()),
        Some(form.message.clone()),
    ) {
        Ok(submission) => submission,
        Err(err) => {
            return ContactTemplate {
                error: err.to_string(),
                form,
                ..ContactTemplate::blank()
            };
        }
    };

    match api::deliver(&state, &submission).await {
        Ok(()) => ContactTemplate {
            success: true,
            ..ContactTemplate::blank()
        },
        Err(err) => {
            tracing::error!(error = ?err, "contact form delivery failed");
            ContactTemplate {
                error: SEND_FAILED.to_string(),
                form,
                ..ContactTemplate::blank()
            }
        }
    }
}

/// Routes for the contact page.
pub fn routes() -> Router<AppState> {
    Router::new().route("/contact", get(show).post(submit))
}
