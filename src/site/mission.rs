use askama::Template;
use axum::{routing::get, Router};

use crate::app::{AppState, APP_NAME};

/// The mission page template.
#[derive(Template)]
#[template(path = "site/mission.html")]
pub struct MissionTemplate {
    pub app_name: &'static str,
}

/// GET /mission
pub async fn show() -> MissionTemplate {
    MissionTemplate {
        app_name: APP_NAME,
    }
}

/// Routes for the mission page.
pub fn routes() -> Router<AppState> {
    Router::new().route("/mission", get(show))
}
