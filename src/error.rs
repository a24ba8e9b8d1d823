//! Error types for the Postmark API client.
//!
//! Every operation in this crate returns [`Result`]. The [`Error`] enum
//! distinguishes local failures (payload encoding, request construction),
//! transport failures, and the two remote failure shapes Postmark produces:
//! the structured `{"ErrorCode", "Message"}` envelope and everything else.

use serde::Deserialize;
use thiserror::Error;

/// A specialized `Result` type for Postmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Longest body excerpt carried by [`Error::UnexpectedResponse`].
const MAX_BODY_EXCERPT: usize = 512;

/// The main error type for all Postmark API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The request payload could not be serialized to JSON. The call never
    /// reached the network.
    #[error("payload encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request URL could not be parsed. The call never reached the
    /// network.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid input provided by the caller, such as a token that cannot be
    /// carried in a header or a template alias containing CR/LF characters.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Network failure, timeout, or cancellation while the request was in
    /// flight. The underlying cause is preserved in the source chain.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Structured error reported by Postmark.
    ///
    /// The display form is the remote message verbatim; callers branch on
    /// `error_code` for programmatic handling
    /// (see <https://postmarkapp.com/developer/api/overview#error-codes>).
    #[error("{message}")]
    Api {
        /// Postmark error code from the response envelope.
        error_code: i64,
        /// Human-readable message from the response envelope.
        message: String,
    },

    /// Non-success response whose body did not parse as the structured
    /// error envelope. Carries the status and a bounded body excerpt.
    #[error("request failed with status {status}: {body}")]
    UnexpectedResponse {
        /// HTTP status code of the response.
        status: u16,
        /// Body excerpt, truncated to a fixed bound.
        body: String,
    },

    /// Success status, but the body did not match the expected shape.
    #[error("response decoding failed: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Postmark's error envelope. Missing fields decode to their zero values,
/// matching the reference decoder; a non-object body fails to decode.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ErrorEnvelope {
    error_code: i64,
    message: String,
}

impl Error {
    /// Classify a non-success response.
    ///
    /// A body that parses as the envelope yields [`Error::Api`] regardless
    /// of its embedded code (the status code is authoritative); anything
    /// else yields [`Error::UnexpectedResponse`].
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => Error::Api {
                error_code: envelope.error_code,
                message: envelope.message,
            },
            Err(_) => Error::UnexpectedResponse {
                status,
                body: excerpt(body),
            },
        }
    }

    /// Returns `true` for failures reported by the remote service with a
    /// 4xx status.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::UnexpectedResponse { status, .. } => (400..500).contains(status),
            Error::Api { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` for failures reported by the remote service with a
    /// 5xx status.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::UnexpectedResponse { status, .. } if *status >= 500)
    }

    /// Returns `true` if the request failed in transit (network error,
    /// timeout, or cancellation).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX_BODY_EXCERPT {
        return text.into_owned();
    }
    let mut end = MAX_BODY_EXCERPT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_from_envelope() {
        let err = Error::from_response(422, br#"{"ErrorCode":406,"Message":"bad"}"#);
        match err {
            Error::Api {
                error_code,
                message,
            } => {
                assert_eq!(error_code, 406);
                assert_eq!(message, "bad");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn structured_error_message_is_verbatim() {
        let err = Error::from_response(
            422,
            br#"{"ErrorCode":1226,"Message":"The message stream for the provided 'ID' was not found."}"#,
        );
        assert_eq!(
            err.to_string(),
            "The message stream for the provided 'ID' was not found."
        );
    }

    #[test]
    fn zero_code_envelope_is_still_structured() {
        // The status code is authoritative, not the body's code field.
        let err = Error::from_response(400, br#"{"ErrorCode":0,"Message":""}"#);
        assert!(matches!(err, Error::Api { error_code: 0, .. }));
    }

    #[test]
    fn empty_object_decodes_as_envelope() {
        let err = Error::from_response(400, b"{}");
        assert!(matches!(err, Error::Api { error_code: 0, .. }));
    }

    #[test]
    fn raw_failure_keeps_status_and_body() {
        let err = Error::from_response(500, b"not json");
        match &err {
            Error::UnexpectedResponse { status, body } => {
                assert_eq!(*status, 500);
                assert_eq!(body, "not json");
            }
            other => panic!("expected UnexpectedResponse, got {other:?}"),
        }
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("not json"));
    }

    #[test]
    fn raw_failure_array_body() {
        // A JSON array is valid JSON but not the envelope shape.
        let err = Error::from_response(502, b"[1,2]");
        assert!(matches!(err, Error::UnexpectedResponse { status: 502, .. }));
    }

    #[test]
    fn raw_failure_body_is_bounded() {
        let big = vec![b'x'; 10 * 1024];
        let err = Error::from_response(500, &big);
        match err {
            Error::UnexpectedResponse { body, .. } => {
                assert_eq!(body.len(), MAX_BODY_EXCERPT + 3);
                assert!(body.ends_with("..."));
            }
            other => panic!("expected UnexpectedResponse, got {other:?}"),
        }
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        // The bound lands mid-char for three-byte chars; the cut must back
        // up to a boundary instead of panicking.
        let body = "€".repeat(MAX_BODY_EXCERPT);
        let err = Error::from_response(500, body.as_bytes());
        match err {
            Error::UnexpectedResponse { body, .. } => assert!(body.ends_with("...")),
            other => panic!("expected UnexpectedResponse, got {other:?}"),
        }
    }

    #[test]
    fn error_predicates() {
        assert!(Error::from_response(404, b"gone").is_client_error());
        assert!(Error::from_response(503, b"down").is_server_error());
        assert!(!Error::from_response(503, b"down").is_client_error());
        assert!(Error::Api {
            error_code: 406,
            message: "inactive".into()
        }
        .is_client_error());
    }
}
