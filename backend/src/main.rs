use expense_intake::config::Config;
use expense_intake::{create_router, initialize_backend, logging};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init_tracing(config.log_format);

    let app_state = initialize_backend();
    let app = create_router(app_state, &config);

    info!("Starting server on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
