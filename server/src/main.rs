use clap::Parser;
use tokio::net::TcpListener;
use todo_server::config::Config;
use todo_server::{telemetry, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::parse();
    telemetry::init(&config.log_filter)?;

    let store = config.open_store().await?;
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, data_file = ?config.data_file, "listening");
    todo_server::run(listener, AppState::new(store)).await?;
    Ok(())
}
