pub mod config;
pub mod logging;

pub mod pipeline;
pub mod platform;
pub mod present;
pub mod relay;
pub mod resolution;
pub mod validate;
