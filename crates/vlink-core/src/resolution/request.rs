//! Request body sent to the resolution endpoint.

use serde::Serialize;

use crate::config::RequestDefaults;

/// JSON body of a resolution call. Only `url` varies between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionRequest {
    pub url: String,
    pub v_codec: String,
    pub v_quality: String,
    pub a_format: String,
    pub filename_pattern: String,
    pub is_audio_only: bool,
}

impl ResolutionRequest {
    pub fn new(url: &str, defaults: &RequestDefaults) -> Self {
        Self {
            url: url.to_string(),
            v_codec: defaults.v_codec.clone(),
            v_quality: defaults.v_quality.clone(),
            a_format: defaults.a_format.clone(),
            filename_pattern: defaults.filename_pattern.clone(),
            is_audio_only: defaults.is_audio_only,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
