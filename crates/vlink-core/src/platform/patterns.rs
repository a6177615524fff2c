//! Declarative URL pattern table, one ordered pattern set per platform.

use regex::Regex;
use std::sync::LazyLock;

use super::PlatformId;

/// Raw pattern sources in platform declaration order.
///
/// Each pattern tolerates an optional scheme and an optional `www.` prefix and
/// has exactly one capture group: the platform-specific identifier.
const PATTERN_SOURCES: &[(PlatformId, &[&str])] = &[
    (
        PlatformId::Youtube,
        &[
            r"(?:https?://)?(?:www\.)?youtube\.com/watch\?v=([a-zA-Z0-9_-]+)",
            r"(?:https?://)?(?:www\.)?youtu\.be/([a-zA-Z0-9_-]+)",
            r"(?:https?://)?(?:www\.)?youtube\.com/embed/([a-zA-Z0-9_-]+)",
            r"(?:https?://)?(?:www\.)?youtube\.com/shorts/([a-zA-Z0-9_-]+)",
        ],
    ),
    (
        PlatformId::Facebook,
        &[
            r"(?:https?://)?(?:www\.)?facebook\.com/.*/videos/([0-9]+)",
            r"(?:https?://)?(?:www\.)?facebook\.com/watch/?\?v=([0-9]+)",
            r"(?:https?://)?(?:www\.)?fb\.watch/([a-zA-Z0-9_-]+)",
        ],
    ),
    (
        PlatformId::Twitter,
        &[
            r"(?:https?://)?(?:www\.)?twitter\.com/[A-Za-z0-9_]+/status/([0-9]+)",
            r"(?:https?://)?(?:www\.)?x\.com/[A-Za-z0-9_]+/status/([0-9]+)",
        ],
    ),
];

/// Compiled pattern table. Order is significant: earlier platforms win ties.
pub(crate) static PLATFORM_PATTERNS: LazyLock<Vec<(PlatformId, Vec<Regex>)>> =
    LazyLock::new(|| {
        PATTERN_SOURCES
            .iter()
            .map(|(platform, sources)| {
                let compiled = sources
                    .iter()
                    .map(|src| Regex::new(src).expect("static platform pattern must compile"))
                    .collect();
                (*platform, compiled)
            })
            .collect()
    });

/// Returns the ordered pattern set owned by `platform` (empty for `Unrecognized`).
pub(crate) fn patterns_for(platform: PlatformId) -> &'static [Regex] {
    PLATFORM_PATTERNS
        .iter()
        .find(|(p, _)| *p == platform)
        .map(|(_, set)| set.as_slice())
        .unwrap_or(&[])
}
