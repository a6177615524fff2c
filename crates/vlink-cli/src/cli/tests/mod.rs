//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_get() {
    match parse(&["vlink", "get", "https://youtu.be/KiPCIoqWAOI"]) {
        CliCommand::Get {
            url,
            json,
            endpoint,
            via_relay,
        } => {
            assert_eq!(url, "https://youtu.be/KiPCIoqWAOI");
            assert!(!json);
            assert!(endpoint.is_none());
            assert!(!via_relay);
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_flags() {
    match parse(&[
        "vlink",
        "get",
        "https://x.com/u/status/1",
        "--json",
        "--endpoint",
        "http://localhost:3000/proxy",
    ]) {
        CliCommand::Get { json, endpoint, .. } => {
            assert!(json);
            assert_eq!(endpoint.as_deref(), Some("http://localhost:3000/proxy"));
        }
        _ => panic!("expected Get with flags"),
    }
}

#[test]
fn cli_endpoint_conflicts_with_via_relay() {
    assert!(Cli::try_parse_from([
        "vlink",
        "get",
        "https://x.com/u/status/1",
        "--via-relay",
        "--endpoint",
        "http://a.example/",
    ])
    .is_err());
}

#[test]
fn cli_parse_detect() {
    match parse(&["vlink", "detect", "https://fb.watch/abc"]) {
        CliCommand::Detect { url } => assert_eq!(url, "https://fb.watch/abc"),
        _ => panic!("expected Detect"),
    }
}

#[test]
fn cli_parse_relay() {
    match parse(&["vlink", "relay", "--bind", "0.0.0.0:3000"]) {
        CliCommand::Relay {
            bind,
            path,
            upstream,
        } => {
            assert_eq!(bind.as_deref(), Some("0.0.0.0:3000"));
            assert!(path.is_none());
            assert!(upstream.is_none());
        }
        _ => panic!("expected Relay"),
    }
}

#[test]
fn cli_parse_config_with_global_path() {
    let cli = Cli::try_parse_from(["vlink", "config", "--config", "/tmp/vlink.toml"]).unwrap();
    assert!(matches!(cli.command, CliCommand::Config));
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/vlink.toml"))
    );
}

#[test]
fn cli_get_requires_url() {
    assert!(Cli::try_parse_from(["vlink", "get"]).is_err());
}
