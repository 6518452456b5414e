use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod application;
mod args;

use application::http::server::http_server;
use args::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());

    init_tracing(&args);

    let (state, postgres) = http_server::state(args.clone()).await?;
    let router = http_server::router(state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port)
        .parse()
        .context("invalid listen address")?;

    tracing::info!("listening on http://{}", addr);

    let handle = axum_server::Handle::new();
    let shutdown_handle = handle.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown signal received");
            shutdown_handle.graceful_shutdown(Some(Duration::from_secs(10)));
        }
    });

    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await?;

    postgres.close().await?;

    Ok(())
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if args.server.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
