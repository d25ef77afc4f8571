mod config;
mod github;
mod logging;
mod server;

use crate::logging::init_tracing;
use crate::server::run_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let listen_addr =
        std::env::var("PUBLISH_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8788".to_string());
    tracing::info!(%listen_addr, "Publish service boot");

    run_server(&listen_addr).await?;
    Ok(())
}
