mod backend;
mod config;
mod routes;
mod services;
mod state;
mod stats;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    // The statistics key is the only fatal setting.
    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration error; exiting");
            std::process::exit(1);
        }
    };
    let port = config.port;

    let players = match stats::ApiSportsClient::new(config.stats) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "stats client init failed; exiting");
            std::process::exit(1);
        }
    };

    let (backend_mode, tops) = backend::connect(&config.local_store_path);
    let state = state::AppState::new(Arc::new(players), backend_mode, tops);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, backend = ?backend_mode, "ballondor proxy listening");
    axum::serve(listener, app).await.expect("server failed");
}
