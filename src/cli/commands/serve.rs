//! `serve` command: run the authenticated movies endpoint.

use anyhow::{anyhow, Result};
use clap::Args;

use crate::adapters::http::{AppState, MoviesHttpServer};
use crate::domain::models::Config;
use crate::services::AccessGate;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,
}

pub async fn execute(args: ServeArgs, mut config: Config) -> Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let movies = super::build_movie_service(&config)?;
    let gate = AccessGate::from_config(&config.auth);
    tracing::info!(
        films_url = %config.catalog.films_url,
        auth_header = gate.header(),
        cache_ttl_secs = config.cache.ttl_secs,
        "starting movies service"
    );

    let server = MoviesHttpServer::new(AppState::new(movies, gate), config.server);
    server
        .serve_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            tracing::info!("shutdown signal received");
        })
        .await
        .map_err(|e| anyhow!("Movies HTTP server failed: {e}"))
}
