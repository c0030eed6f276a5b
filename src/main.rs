use axum::{extract::Request, ServiceExt};
use holocron::server::{config::Config, error::Error, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("holocron=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;
    let app = router::app(AppState::from(db.clone()));

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;

    tracing::info!("Starting server on {}", config.socket_addr());

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;

    tracing::info!("Server stopped");

    Ok(())
}
