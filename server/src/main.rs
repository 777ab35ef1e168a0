use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use todo_server::{store, AppState, Config, ConfigError, StoreError};

#[derive(Debug, Error)]
enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to open todo store: {0}")]
    Store(#[from] StoreError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_tracing();

    let config = Config::from_env()?;
    let store = store::open(config.store, &config.database_url).await?;
    info!(backend = %config.store, "todo store ready");

    let app = todo_server::app(AppState::new(store), config.allowed_origin.clone());
    let listener = TcpListener::bind(config.addr()).await?;
    info!("listening on {}", listener.local_addr()?);
    todo_server::run(listener, app).await?;
    Ok(())
}
