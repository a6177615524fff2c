//! Blocking JSON POST over libcurl, shared by the client and the relay.
//!
//! A returned `Err` always means no HTTP status line was received; any status
//! (including 3xx/4xx/5xx) comes back as `Ok(HttpReply)`. Redirects are not
//! followed.

use std::time::Duration;

/// Timeouts applied to one POST.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub connect: Duration,
    /// Total transfer limit; `None` leaves libcurl's default (no limit).
    pub total: Option<Duration>,
}

/// Raw HTTP reply: status, content type and body, unparsed.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u32,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// POSTs `body` to `endpoint` with JSON `Accept` and `Content-Type` headers.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn post_json(endpoint: &str, body: &[u8], timeouts: Timeouts) -> Result<HttpReply, curl::Error> {
    let mut response_body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(endpoint)?;
    easy.post(true)?;
    easy.post_fields_copy(body)?;
    // A 3xx is reported as-is; following it would re-send the call as a body-less GET.
    easy.follow_location(false)?;
    easy.connect_timeout(timeouts.connect)?;
    if let Some(total) = timeouts.total {
        easy.timeout(total)?;
    }

    let mut list = curl::easy::List::new();
    list.append("Accept: application/json")?;
    list.append("Content-Type: application/json")?;
    // Suppress libcurl's "Expect: 100-continue" so the body goes out in one request.
    list.append("Expect:")?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            response_body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    let content_type = easy
        .content_type()?
        .map(|s| s.to_string());

    Ok(HttpReply {
        status,
        content_type,
        body: response_body,
    })
}

/// Best-effort UTF-8 preview of a body for log lines.
pub(crate) fn body_preview(body: &[u8]) -> String {
    const MAX: usize = 512;
    let slice = &body[..body.len().min(MAX)];
    let text = String::from_utf8_lossy(slice);
    if body.len() > MAX {
        format!("{}... ({} bytes)", text, body.len())
    } else {
        text.into_owned()
    }
}
