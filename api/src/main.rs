use std::{net::SocketAddr, sync::Arc};

use axum_server::Handle;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::application::http::server::http_server::{router, serve, shutdown_on_ctrl_c, state};
use crate::args::{Args, LogArgs};

mod application;
mod args;

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    let registry = tracing_subscriber::registry().with(filter);
    if log.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let (app_state, postgres) = state(args.clone()).await?;
    let app = router(app_state)?;

    let addr = SocketAddr::new(args.server.host.parse()?, args.server.port);
    info!("Dishguard API listening on {}", addr);

    let handle = Handle::new();
    shutdown_on_ctrl_c(handle.clone());
    serve(app, addr, handle).await?;

    postgres.close().await?;
    info!("database connection closed");
    Ok(())
}
