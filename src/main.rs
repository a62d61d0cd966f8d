use coopboard::{catalog, config, routes, state};
use tokio::net::TcpListener;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("server i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env()?;
    let state = state::AppState::new(catalog::Catalog::demo());
    let app = routes::app(state, &config.static_dir);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "coopboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
