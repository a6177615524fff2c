//! Input validation: reject empty or malformed input before classification.

use thiserror::Error;

/// Why user input was rejected before any platform detection ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a video URL")]
    Missing,
    #[error("Please enter a valid URL")]
    Malformed,
}

/// True iff `s` parses as an absolute URL with a scheme and a host.
pub fn is_valid_url(s: &str) -> bool {
    match url::Url::parse(s) {
        Ok(u) => u.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Trims `raw` and returns it if it is a usable URL.
pub fn check_input(raw: &str) -> Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing);
    }
    if !is_valid_url(trimmed) {
        return Err(InputError::Malformed);
    }
    Ok(trimmed.to_string())
}
