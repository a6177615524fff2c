//! Submit flow: validate → classify → resolve → present.
//!
//! Every failure is returned as a [`SubmitError`] whose `Display` is the
//! user-facing message; the session stays usable after any error. At most one
//! resolution is in flight per session: a second submit while one is pending
//! is rejected, not queued.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

use crate::platform::{self, PlatformId};
use crate::present::{self, DownloadOption};
use crate::resolution::{ResolutionResponse, Resolve, ResolveError};
use crate::validate::{self, InputError};

/// Message used when the API reports an error without any text.
const API_ERROR_FALLBACK: &str = "Unable to process this video. Please try another URL.";

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Empty or malformed input; never reaches the resolver.
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("URL not recognized. Please enter a valid YouTube, Facebook, or Twitter video URL.")]
    PlatformUnrecognized,
    /// Transport, HTTP status or protocol failure from the resolution call.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// `status: "error"` in an otherwise well-formed response.
    #[error("Error: {message}")]
    ApiReported { message: String },
    #[error("a request is already in progress")]
    Busy,
}

/// Successful outcome of one submit.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub source_url: String,
    pub platform: PlatformId,
    /// Platform-specific id (e.g. YouTube video id), if extractable.
    pub video_id: Option<String>,
    /// Wire `status` tag of the response.
    pub status: String,
    pub options: Vec<DownloadOption>,
    /// Set when the response format was not recognized.
    pub notice: Option<&'static str>,
    #[serde(skip)]
    pub response: ResolutionResponse,
}

/// Releases the in-flight flag on drop, on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One user session: a resolver plus the single-in-flight gate.
pub struct Session<R> {
    resolver: R,
    in_flight: AtomicBool,
}

impl<R: Resolve> Session<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            in_flight: AtomicBool::new(false),
        }
    }

    #[cfg(test)]
    fn resolver(&self) -> &R {
        &self.resolver
    }

    #[cfg(test)]
    fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Runs the whole pipeline for raw user input.
    ///
    /// Invalid or unrecognized input never reaches the resolver.
    pub fn submit(&self, raw_input: &str) -> Result<Submission, SubmitError> {
        let url = validate::check_input(raw_input)?;

        let platform = platform::classify(&url);
        if !platform.is_recognized() {
            tracing::info!(url = %url, "platform not recognized");
            return Err(SubmitError::PlatformUnrecognized);
        }
        let video_id = platform::extract_id(platform, &url);
        tracing::debug!(url = %url, %platform, ?video_id, "classified");

        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or_else(|| {
            tracing::debug!("submit rejected: resolution already in flight");
            SubmitError::Busy
        })?;

        let response = self.resolver.resolve(&url).inspect_err(|e| {
            tracing::warn!(error = ?e, endpoint = self.resolver.endpoint(), "resolution failed");
        })?;

        if let ResolutionResponse::Error { text } = &response {
            let message = if text.trim().is_empty() {
                API_ERROR_FALLBACK.to_string()
            } else {
                text.clone()
            };
            return Err(SubmitError::ApiReported { message });
        }

        let options = present::present(&response, platform);
        let notice = present::notice(&response);
        if let Some(n) = notice {
            tracing::warn!(status = response.status(), "{}", n);
        }

        Ok(Submission {
            source_url: url,
            platform,
            video_id,
            status: response.status().to_string(),
            options,
            notice,
            response,
        })
    }
}
