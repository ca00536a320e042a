use adiyogi_site::app;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (silently ignore if missing)
    dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug,tower_http=debug", env!("CARGO_PKG_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config from environment
    let config = app::config::Config::from_env()
        .expect("Failed to load config (check SMTP_* and MAIL_* env vars)");

    // Build the mail adapter from config
    let mail = app::mail::from_config(&config)
        .unwrap_or_else(|e| {
            tracing::error!("Failed to initialize mail adapter: {}", e);
            std::process::exit(1);
        });

    // Build the application state
    let state = app::AppState { mail, config };
    let router = adiyogi_site::create_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Failed to bind to port 3000");

    tracing::info!("Listening on http://localhost:3000");

    axum::serve(listener, router).await.unwrap();
}
