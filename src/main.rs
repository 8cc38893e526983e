use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use hf_image_generator::{api, config, inference};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration; no token means nothing else can run
    config::Config::dotenv_load();
    let config = match config::Config::new() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    config.log_summary();

    let client = match inference::InferenceClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to build inference client: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(api::AppState {
        client,
        default_prompt: config.default_prompt.clone(),
    });
    let app = api::router(state);

    let ip: std::net::IpAddr = config.api_host.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", config.api_host);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let socket_address = SocketAddr::new(ip, config.api_port);
    tracing::info!("listening on {}", socket_address);
    if let Err(e) = axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}
