//! Decoding of resolution endpoint responses.
//!
//! The body is read in two steps: the `status` tag first, then the fields that
//! tag requires. Unknown tags decode to [`ResolutionResponse::Unknown`] instead
//! of failing.

use serde::{Deserialize, Serialize};

use super::error::ResolveError;

/// One entry of a picker response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerItem {
    pub url: String,
    /// Media kind reported by the API ("video", "photo", ...), if any.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

/// Resolution result, one variant per `status` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResponse {
    Redirect { url: String },
    Stream { url: String },
    Picker { items: Vec<PickerItem> },
    /// API-level failure; `text` is empty when the API sent no message.
    Error { text: String },
    /// Any other tag. Rendered with a fallback notice.
    Unknown { status: String },
}

#[derive(Deserialize)]
struct Envelope {
    status: String,
}

#[derive(Deserialize)]
struct UrlBody {
    url: String,
}

#[derive(Deserialize)]
struct PickerBody {
    picker: Vec<PickerItem>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    text: Option<String>,
}

fn protocol(detail: impl Into<String>) -> ResolveError {
    ResolveError::Protocol {
        detail: detail.into(),
    }
}

impl ResolutionResponse {
    /// Decodes a response body. Fails with `Protocol` when the body is not a
    /// JSON object with a string `status`, or a known tag lacks its fields.
    pub fn from_json(body: &[u8]) -> Result<Self, ResolveError> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| protocol(format!("body is not JSON ({})", e)))?;
        if !value.is_object() {
            return Err(protocol("body is not a JSON object"));
        }
        let envelope: Envelope = serde_json::from_value(value.clone())
            .map_err(|_| protocol("missing string field `status`"))?;

        match envelope.status.as_str() {
            "redirect" | "stream" => {
                let body: UrlBody = serde_json::from_value(value)
                    .map_err(|_| protocol(format!("`{}` response without `url`", envelope.status)))?;
                if envelope.status == "redirect" {
                    Ok(Self::Redirect { url: body.url })
                } else {
                    Ok(Self::Stream { url: body.url })
                }
            }
            "picker" => {
                let body: PickerBody = serde_json::from_value(value)
                    .map_err(|e| protocol(format!("malformed `picker` list ({})", e)))?;
                Ok(Self::Picker { items: body.picker })
            }
            "error" => {
                let body: ErrorBody = serde_json::from_value(value)
                    .map_err(|_| protocol("`error` response with non-string `text`"))?;
                Ok(Self::Error {
                    text: body.text.unwrap_or_default(),
                })
            }
            _ => Ok(Self::Unknown {
                status: envelope.status,
            }),
        }
    }

    /// Wire tag of this response.
    pub fn status(&self) -> &str {
        match self {
            Self::Redirect { .. } => "redirect",
            Self::Stream { .. } => "stream",
            Self::Picker { .. } => "picker",
            Self::Error { .. } => "error",
            Self::Unknown { status } => status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: &str) -> Result<ResolutionResponse, ResolveError> {
        ResolutionResponse::from_json(s.as_bytes())
    }

    #[test]
    fn redirect_and_stream() {
        assert_eq!(
            decode(r#"{"status":"redirect","url":"https://cdn.example/video.mp4"}"#).unwrap(),
            ResolutionResponse::Redirect {
                url: "https://cdn.example/video.mp4".to_string()
            }
        );
        assert_eq!(
            decode(r#"{"status":"stream","url":"https://cdn.example/s"}"#).unwrap(),
            ResolutionResponse::Stream {
                url: "https://cdn.example/s".to_string()
            }
        );
    }

    #[test]
    fn picker_keeps_order_and_optional_type() {
        let r = decode(r#"{"status":"picker","picker":[{"url":"a"},{"url":"b","type":"image"}]}"#)
            .unwrap();
        match r {
            ResolutionResponse::Picker { items } => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].url, "a");
                assert_eq!(items[0].media_type, None);
                assert_eq!(items[1].url, "b");
                assert_eq!(items[1].media_type.as_deref(), Some("image"));
            }
            other => panic!("expected picker, got {:?}", other),
        }
    }

    #[test]
    fn error_with_and_without_text() {
        assert_eq!(
            decode(r#"{"status":"error","text":"unsupported"}"#).unwrap(),
            ResolutionResponse::Error {
                text: "unsupported".to_string()
            }
        );
        assert_eq!(
            decode(r#"{"status":"error"}"#).unwrap(),
            ResolutionResponse::Error { text: String::new() }
        );
    }

    #[test]
    fn unknown_tag_is_not_an_error() {
        let r = decode(r#"{"status":"rate-limit","url":"ignored"}"#).unwrap();
        assert_eq!(
            r,
            ResolutionResponse::Unknown {
                status: "rate-limit".to_string()
            }
        );
        assert_eq!(r.status(), "rate-limit");
    }

    #[test]
    fn protocol_errors() {
        for body in [
            "<html>bad gateway</html>",
            "",
            "[1,2,3]",
            r#"{"url":"https://cdn.example/x"}"#,
            r#"{"status":42}"#,
            r#"{"status":"redirect"}"#,
            r#"{"status":"picker","picker":"nope"}"#,
            r#"{"status":"picker","picker":[{"type":"video"}]}"#,
        ] {
            match decode(body) {
                Err(ResolveError::Protocol { .. }) => {}
                other => panic!("body {:?}: expected Protocol, got {:?}", body, other),
            }
        }
    }
}
