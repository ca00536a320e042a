#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use adiyogi_site::app::config::Config;
use adiyogi_site::app::mail::{EmailError, EmailMessage, EmailSender};
use adiyogi_site::app::AppState;
use adiyogi_site::create_router;

/// Mailer that records every message instead of sending it. Set `fail` to
/// exercise the delivery-failure path.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<EmailMessage>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        if self.fail {
            return Err(EmailError::Send("recording mailer set to fail".to_string()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

pub fn test_router() -> axum::Router {
    test_router_with(Arc::new(RecordingMailer::default()))
}

pub fn test_router_with(mailer: Arc<RecordingMailer>) -> axum::Router {
    let state = AppState {
        mail: mailer,
        config: Config::for_tests(),
    };
    create_router(state)
}

pub fn contact_json(name: &str, email: Option<&str>, phone: Option<&str>, message: &str) -> String {
    let mut body = serde_json::json!({
        "name": name,
        "message": message,
    });
    if let Some(email) = email {
        body["email"] = serde_json::json!(email);
    }
    if let Some(phone) = phone {
        body["phone"] = serde_json::json!(phone);
    }
    body.to_string()
}

pub fn contact_form_body(name: &str, email: &str, phone: &str, message: &str) -> String {
    format!(
        "name={}&phone={}&email={}&message={}",
        urlencoding::encode(name),
        urlencoding::encode(phone),
        urlencoding::encode(email),
        urlencoding::encode(message)
    )
}
