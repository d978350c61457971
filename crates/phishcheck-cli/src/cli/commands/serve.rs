//! `phishcheck serve` – run the web front end until Ctrl-C.

use anyhow::{Context, Result};
use phishcheck_core::config::PhishConfig;
use phishcheck_core::service::PhishChecker;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::cli::server;

pub async fn run_serve(cfg: &PhishConfig) -> Result<()> {
    let addr = cfg.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "phishcheck listening");
    println!("Running on http://{local}");

    let checker = Arc::new(PhishChecker::new(cfg.history_capacity));
    tokio::select! {
        _ = server::serve(listener, checker) => {}
        res = tokio::signal::ctrl_c() => {
            res.context("wait for Ctrl-C")?;
            tracing::info!("shutting down");
        }
    }
    Ok(())
}
