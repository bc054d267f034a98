//! Performance relay server

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Args;
use snippy_relay::http::serve;
use snippy_relay::{GroqProvider, PerformanceRelay, RelayConfig};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address (defaults to SNIPPY_BIND, then 127.0.0.1:3000)
    #[arg(long)]
    pub bind: Option<String>,
}

pub fn execute(args: ServeArgs) -> CommandResult {
    let mut config = RelayConfig::from_env();
    if let Some(bind) = args.bind {
        config = config.with_bind(bind);
    }

    let addr: SocketAddr = config
        .bind
        .parse()
        .map_err(|e| format!("invalid bind address {:?}: {}", config.bind, e))?;
    let provider = GroqProvider::from_config(&config)?;
    let relay = PerformanceRelay::new(Arc::new(provider));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(addr, relay))?;
    Ok(())
}
