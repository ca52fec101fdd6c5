use std::sync::Arc;

use apikit::api::TracingLog;
use apikit::config::Config;
use apikit::server::{listener, routes};

static LOG: TracingLog = TracingLog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.logging.max_level())
        .init();

    let service = Arc::new(routes::build(&LOG)?);
    for (path, description) in service.state().routes().iter() {
        tracing::info!(path, description, "route registered");
    }

    tokio::select! {
        res = listener::run(&cfg, service) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
