use std::sync::Arc;

use axum::Router;

/// Human-readable application name, used in templates and outgoing email.
/// Change this constant to rename the site across all pages.
pub const APP_NAME: &str = "Adiyogi Foundation";

/// Shared state available to all handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    pub mail: Arc<dyn mail::EmailSender>,
    pub config: config::Config,
}

/// App routes (contact form and API). Merged with site routes in lib.rs.
pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new().merge(features::contact::routes())
}

pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod mail;
