//! URL classification: which supported platform a video URL belongs to.
//!
//! Detection is a pure lookup against the pattern table in [`patterns`]. The
//! platform is recomputed from the URL on every call and never cached.

mod patterns;

use serde::Serialize;
use std::fmt;

/// Supported video platform, or `Unrecognized` when no pattern set matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    Youtube,
    Facebook,
    Twitter,
    Unrecognized,
}

impl PlatformId {
    /// Lowercase tag, e.g. `"youtube"`.
    pub fn as_str(self) -> &'static str {
        match self {
            PlatformId::Youtube => "youtube",
            PlatformId::Facebook => "facebook",
            PlatformId::Twitter => "twitter",
            PlatformId::Unrecognized => "unrecognized",
        }
    }

    /// Capitalized name used in download labels, e.g. `"Youtube"`.
    pub fn display_name(self) -> &'static str {
        match self {
            PlatformId::Youtube => "Youtube",
            PlatformId::Facebook => "Facebook",
            PlatformId::Twitter => "Twitter",
            PlatformId::Unrecognized => "Unrecognized",
        }
    }

    pub fn is_recognized(self) -> bool {
        self != PlatformId::Unrecognized
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detects the platform of `url`.
///
/// Platforms are tried in declaration order (youtube, facebook, twitter); the
/// first one with any matching pattern wins. A URL that would match more than
/// one platform therefore resolves to the earlier-declared one.
pub fn classify(url: &str) -> PlatformId {
    patterns::PLATFORM_PATTERNS
        .iter()
        .find(|(_, set)| set.iter().any(|re| re.is_match(url)))
        .map(|(platform, _)| *platform)
        .unwrap_or(PlatformId::Unrecognized)
}

/// Extracts the platform-specific identifier (e.g. YouTube video id) from `url`.
///
/// Applies `platform`'s patterns in order and returns the first capture.
/// Returns `None` when nothing matches, including for `Unrecognized`.
pub fn extract_id(platform: PlatformId, url: &str) -> Option<String> {
    patterns::patterns_for(platform)
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
