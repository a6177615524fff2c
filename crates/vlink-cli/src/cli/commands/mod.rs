//! CLI command handlers, one per file.

mod config;
mod detect;
mod get;
mod relay;

pub use config::run_config;
pub use detect::run_detect;
pub use get::{run_get, GetOptions};
pub use relay::{run_relay, RelayOverrides};
