mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "webidelivery exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::leptos_app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "webidelivery listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
