pub mod api;
pub mod form;
pub mod format;
pub mod page;

use axum::{routing::post, Router};

use crate::app::AppState;

/// Contact routes: the page with its form flow, and the JSON API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/contact", post(api::submit))
        .merge(page::routes())
}
