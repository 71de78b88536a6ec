use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::http::server::http_server::{router, state};
use crate::args::{Args, LogArgs};

mod application;
mod args;

fn init_logger(log: &LogArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    let registry = tracing_subscriber::registry().with(filter);
    if log.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    info!("Listening on {}", addr);

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
