//! CLI for vlink.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use vlink_core::config;

use commands::{run_config, run_detect, run_get, run_relay, GetOptions, RelayOverrides};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "vlink")]
#[command(about = "vlink: paste a YouTube, Facebook or Twitter/X URL, get a direct download link", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/vlink/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a video URL to direct download link(s).
    Get {
        /// Video URL (YouTube, Facebook, Twitter/X).
        url: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
        /// Call this resolution endpoint instead of the configured one.
        #[arg(long, value_name = "URL", conflicts_with = "via_relay")]
        endpoint: Option<String>,
        /// Go through the relay (configured relay_url, or the local relay address).
        #[arg(long)]
        via_relay: bool,
    },

    /// Detect the platform of a URL without calling the API.
    Detect {
        /// Video URL.
        url: String,
    },

    /// Run the CORS relay in front of the resolution API.
    Relay {
        /// Listen address (default from config, 127.0.0.1:3000).
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
        /// Path to serve (default from config, /proxy).
        #[arg(long)]
        path: Option<String>,
        /// Upstream resolution API (default: configured api_endpoint).
        #[arg(long, value_name = "URL")]
        upstream: Option<String>,
    },

    /// Show the config file location and the effective endpoint.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                url,
                json,
                endpoint,
                via_relay,
            } => {
                let opts = GetOptions {
                    json,
                    endpoint,
                    via_relay,
                };
                run_get(&cfg, &url, &opts).await
            }
            CliCommand::Detect { url } => Ok(run_detect(&url)),
            CliCommand::Relay {
                bind,
                path,
                upstream,
            } => {
                let overrides = RelayOverrides {
                    bind,
                    path,
                    upstream,
                };
                run_relay(&cfg, overrides).await?;
                Ok(ExitCode::SUCCESS)
            }
            CliCommand::Config => {
                run_config(&cfg, cli.config.as_deref())?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[cfg(test)]
mod tests;
