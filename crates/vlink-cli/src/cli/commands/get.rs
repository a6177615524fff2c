//! `vlink get <url>`: validate, detect platform, resolve, print download links.

use anyhow::{Context, Result};
use std::process::ExitCode;
use vlink_core::config::VlinkConfig;
use vlink_core::pipeline::{Session, Submission, SubmitError};
use vlink_core::resolution::{ClientConfig, ResolutionClient, ResolveError, TRANSPORT_REMEDIES};

#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    pub json: bool,
    pub endpoint: Option<String>,
    pub via_relay: bool,
}

/// Picks the endpoint for this run: `--endpoint`, then `--via-relay`, then config.
pub(crate) fn client_config(cfg: &VlinkConfig, opts: &GetOptions) -> ClientConfig {
    let mut client = cfg.client_config();
    if let Some(endpoint) = &opts.endpoint {
        client.endpoint = endpoint.clone();
    } else if opts.via_relay {
        client.endpoint = match cfg.relay_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => {
                let relay = cfg.relay_config();
                format!("http://{}{}", relay.bind, relay.path)
            }
        };
    }
    client
}

fn print_submission(sub: &Submission) {
    let id = sub
        .video_id
        .as_deref()
        .map(|id| format!(", id {}", id))
        .unwrap_or_default();
    if let Some(notice) = sub.notice {
        println!("⚠️  Download available ({}{}): {} (status \"{}\")", sub.platform, id, notice, sub.status);
        return;
    }
    println!("✅ Video ready ({}{}):", sub.platform, id);
    if sub.options.len() > 1 {
        println!("Multiple media files available:");
    }
    for opt in &sub.options {
        println!("  🎬 {} [{}]", opt.label, opt.sub_label);
        match &opt.target_url {
            Some(url) => println!("     {}", url),
            None => println!("     (link unavailable)"),
        }
    }
}

/// Lines written to stderr for a failed submit.
fn failure_lines(err: &SubmitError) -> Vec<String> {
    match err {
        SubmitError::Resolve(ResolveError::Transport { endpoint, .. }) => {
            let mut lines = vec![
                format!(
                    "❌ Failed to process video: Network/CORS error when calling {}. Please try again.",
                    endpoint
                ),
                "To fix this, either:".to_string(),
            ];
            lines.extend(TRANSPORT_REMEDIES.iter().map(|r| format!("  • {}", r)));
            lines
        }
        SubmitError::Resolve(e) => {
            let message = e.to_string();
            vec![format!(
                "❌ Failed to process video: {}. Please try again.",
                message.trim_end_matches('.')
            )]
        }
        other => vec![format!("❌ {}", other)],
    }
}

pub async fn run_get(cfg: &VlinkConfig, url: &str, opts: &GetOptions) -> Result<ExitCode> {
    let client = ResolutionClient::new(client_config(cfg, opts));
    tracing::info!("get url={} endpoint={}", url, client.endpoint());

    let outcome = tokio::task::spawn_blocking({
        let url = url.to_string();
        move || Session::new(client).submit(&url)
    })
    .await
    .context("resolve task join")?;

    match outcome {
        Ok(sub) => {
            if opts.json {
                println!("{}", serde_json::to_string_pretty(&sub)?);
            } else {
                print_submission(&sub);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            for line in failure_lines(&err) {
                eprintln!("{}", line);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
