//! `vlink config`: where the config lives and which endpoint is in effect.

use anyhow::Result;
use std::path::Path;
use vlink_core::config::{self, VlinkConfig};

pub fn run_config(cfg: &VlinkConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("config:   {}", path.display());
    println!("endpoint: {}", cfg.endpoint());
    if cfg.endpoint() != cfg.api_endpoint {
        println!("          (via relay; upstream {})", cfg.api_endpoint);
    }
    match cfg.client_config().timeout {
        Some(t) => println!("timeout:  {}s", t.as_secs()),
        None => println!("timeout:  none"),
    }
    Ok(())
}
