//! `vlink detect <url>`: validation and platform detection only.

use std::process::ExitCode;
use vlink_core::pipeline::SubmitError;
use vlink_core::platform;
use vlink_core::validate;

pub fn run_detect(url: &str) -> ExitCode {
    let url = match validate::check_input(url) {
        Ok(u) => u,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };
    let platform = platform::classify(&url);
    if !platform.is_recognized() {
        eprintln!("❌ {}", SubmitError::PlatformUnrecognized);
        return ExitCode::FAILURE;
    }
    println!("platform: {}", platform);
    match platform::extract_id(platform, &url) {
        Some(id) => println!("id:       {}", id),
        None => println!("id:       -"),
    }
    ExitCode::SUCCESS
}
