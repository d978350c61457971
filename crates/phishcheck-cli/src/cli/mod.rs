//! CLI for the phishcheck URL scorer.

mod commands;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use phishcheck_core::config;

use commands::{run_check, run_rules, run_serve};

/// Top-level CLI for phishcheck.
#[derive(Debug, Parser)]
#[command(name = "phishcheck")]
#[command(about = "phishcheck: heuristic phishing-risk scoring for URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve the web front end (form page and /history JSON).
    Serve {
        /// Address to bind (overrides PHISH_HOST and the config file).
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides PHISH_PORT and the config file).
        #[arg(long)]
        port: Option<u16>,
    },

    /// Score a single URL and print the verdict.
    Check {
        /// URL to check; a missing scheme defaults to http://.
        url: String,
        /// Print the verdict as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the heuristic rules with their weights.
    Rules,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Serve { host, port } => {
                let mut cfg = config::load_or_init()?;
                cfg.apply_env_overrides()?;
                if let Some(host) = host {
                    cfg.host = host;
                }
                if let Some(port) = port {
                    cfg.port = port;
                }
                tracing::debug!("loaded config: {:?}", cfg);
                run_serve(&cfg).await?;
            }
            CliCommand::Check { url, json } => run_check(&url, json)?,
            CliCommand::Rules => run_rules(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
