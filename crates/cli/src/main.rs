use clap::Parser;
use doh_gateway_application::use_cases::ResolveQueryUseCase;
use doh_gateway_domain::config::{CliOverrides, Config};
use doh_gateway_infrastructure::{DohClient, GatewayHandler, InMemoryZoneStore};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "doh-gateway")]
#[command(version = "0.1.0")]
#[command(about = "DNS gateway that answers wire queries via a JSON DoH resolver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// UDP listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream DoH resolve URL
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        resolve_url: cli.upstream.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = Config::load(cli.config.as_deref(), overrides)?;
    config.validate()?;

    bootstrap::init_logging(&config);

    info!("Starting DoH Gateway v{}", env!("CARGO_PKG_VERSION"));

    let zone = Arc::new(InMemoryZoneStore::from_config(&config.zone)?);
    let upstream = Arc::new(DohClient::new(config.upstream.resolve_url.clone()));
    let use_case = Arc::new(ResolveQueryUseCase::new(zone, upstream));
    let handler = Arc::new(GatewayHandler::new(use_case));

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    info!(addr = %addr, upstream = %config.upstream.resolve_url, "Gateway ready");

    server::run_udp_server(&addr, handler).await?;

    Ok(())
}
