//! Turns a resolution response into a flat list of download options.
//!
//! Pure data transform: no I/O, no logging, same output for the same input.

use serde::Serialize;

use crate::platform::PlatformId;
use crate::resolution::ResolutionResponse;
use crate::validate::is_valid_url;

/// Notice shown for responses whose `status` tag is not recognized.
pub const UNKNOWN_FORMAT_NOTICE: &str = "response format not recognized";

/// One downloadable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadOption {
    pub label: String,
    /// Informational secondary text ("Click to download", media type).
    pub sub_label: String,
    /// Direct download URL; `None` if the API sent something that is not an absolute URL.
    pub target_url: Option<String>,
}

impl DownloadOption {
    fn new(label: String, sub_label: String, target: &str) -> Self {
        Self {
            label,
            sub_label,
            target_url: is_valid_url(target).then(|| target.to_string()),
        }
    }
}

/// Maps `response` to download options for display.
///
/// `redirect`/`stream` yield one option labeled after the platform; `picker`
/// yields one per item in response order. `error` and unknown tags yield none:
/// the caller reports those separately.
pub fn present(response: &ResolutionResponse, platform: PlatformId) -> Vec<DownloadOption> {
    match response {
        ResolutionResponse::Redirect { url } | ResolutionResponse::Stream { url } => {
            vec![DownloadOption::new(
                format!("{} Video", platform.display_name()),
                "Click to download".to_string(),
                url,
            )]
        }
        ResolutionResponse::Picker { items } => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                DownloadOption::new(
                    format!("Media {}", i + 1),
                    item.media_type
                        .as_deref()
                        .filter(|t| !t.is_empty())
                        .unwrap_or("Video")
                        .to_string(),
                    &item.url,
                )
            })
            .collect(),
        ResolutionResponse::Error { .. } | ResolutionResponse::Unknown { .. } => Vec::new(),
    }
}

/// Fallback notice for responses that carry no options but are not failures.
pub fn notice(response: &ResolutionResponse) -> Option<&'static str> {
    match response {
        ResolutionResponse::Unknown { .. } => Some(UNKNOWN_FORMAT_NOTICE),
        _ => None,
    }
}
