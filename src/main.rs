use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use car_catalog::config::DEFAULT_ADDR;
use car_catalog::{query, CarsEndpoint, ServerConfig};

/// Serve the car catalog filter endpoint.
#[derive(Debug, Parser)]
#[command(name = "car-catalog", version, about)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = DEFAULT_ADDR)]
    addr: SocketAddr,

    /// JSON array of cars to serve instead of the built-in inventory.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        ServerConfig {
            addr: cli.addr,
            catalog_path: cli.catalog,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "car_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = ServerConfig::from(Cli::parse());
    let catalog = config.load_catalog()?;
    tracing::info!(cars = catalog.len(), "catalog loaded");

    let endpoint = Arc::new(CarsEndpoint::new(catalog));
    query::serve(endpoint, &config.addr.to_string()).await?;
    Ok(())
}
