mod genai;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // The whole workflow depends on the image capability, so misconfiguration
    // is fatal at startup rather than a 502 on the first upload.
    let config = genai::GenAiConfig::from_env().expect("generative image API not configured");
    let client = genai::GeminiClient::new(config).expect("HTTP client build failed");
    tracing::info!(model = client.model(), "generative image client initialized");

    let state = state::AppState::new(Arc::new(client));

    // Spawn background session expiry task.
    let _expiry = services::session::spawn_expiry_task(state.clone());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "restyle listening");
    axum::serve(listener, app).await.expect("server failed");
}
