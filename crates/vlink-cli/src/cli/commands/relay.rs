//! `vlink relay`: run the CORS relay in the foreground.

use anyhow::Result;
use vlink_core::config::VlinkConfig;
use vlink_core::relay::{self, RelayConfig};

#[derive(Debug, Clone, Default)]
pub struct RelayOverrides {
    pub bind: Option<String>,
    pub path: Option<String>,
    pub upstream: Option<String>,
}

pub(crate) fn relay_config(cfg: &VlinkConfig, overrides: RelayOverrides) -> RelayConfig {
    let mut relay = cfg.relay_config();
    if let Some(bind) = overrides.bind {
        relay.bind = bind;
    }
    if let Some(path) = overrides.path {
        relay.path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
    }
    if let Some(upstream) = overrides.upstream {
        relay.upstream = upstream;
    }
    relay
}

pub async fn run_relay(cfg: &VlinkConfig, overrides: RelayOverrides) -> Result<()> {
    let relay_cfg = relay_config(cfg, overrides);
    println!(
        "Relay listening on http://{}{} (forwarding to {})",
        relay_cfg.bind, relay_cfg.path, relay_cfg.upstream
    );
    println!("For development only. Do not expose to untrusted traffic.");
    relay::serve(relay_cfg).await
}
