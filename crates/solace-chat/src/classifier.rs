//! Failure classification.
//!
//! Every failure of a submission cycle becomes fixed, user-facing text
//! that is appended to the conversation as an assistant turn. Nothing
//! here has side effects and nothing is retried.

use std::fmt;

/// Text used when a session token has not been issued yet.
pub const SESSION_NOT_READY_TEXT: &str =
    "Chat session isn't ready yet. Please wait a moment or refresh the page.";
/// Text used when the gateway could not be reached.
pub const NETWORK_ERROR_TEXT: &str =
    "Oops! Could not connect to the server. Please check your connection and try again.";
/// Text used when a success response carries no `answer` field.
pub const MISSING_ANSWER_TEXT: &str = "Received an invalid response from the server.";
/// Text used when the `answer` field is empty or null.
pub const EMPTY_ANSWER_TEXT: &str =
    "Received an empty response. Please try again or rephrase your question.";

/// Broad failure family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before any network activity.
    Validation,
    /// The request never completed.
    Transport,
    /// The backend answered with a failure status.
    Server,
    /// The response did not match the expected contract.
    Protocol,
}

/// How a success response broke the `{ answer }` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolViolation {
    MissingAnswer,
    EmptyAnswer,
}

/// Why a submission cycle did not produce an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCause {
    SessionNotReady,
    /// Transport failure; the detail is for logs only.
    Network(String),
    Server {
        status: u16,
        status_text: String,
        message: Option<String>,
    },
    Protocol(ProtocolViolation),
}

impl ErrorCause {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCause::SessionNotReady => ErrorKind::Validation,
            ErrorCause::Network(_) => ErrorKind::Transport,
            ErrorCause::Server { .. } => ErrorKind::Server,
            ErrorCause::Protocol(_) => ErrorKind::Protocol,
        }
    }

    /// Conversational text for this cause.
    pub fn user_message(&self) -> String {
        classify(self)
    }
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCause::SessionNotReady => write!(f, "session not ready"),
            ErrorCause::Network(detail) => write!(f, "network error: {detail}"),
            ErrorCause::Server {
                status, message, ..
            } => match message {
                Some(m) => write!(f, "server error {status}: {m}"),
                None => write!(f, "server error {status}"),
            },
            ErrorCause::Protocol(ProtocolViolation::MissingAnswer) => {
                write!(f, "response missing answer")
            }
            ErrorCause::Protocol(ProtocolViolation::EmptyAnswer) => {
                write!(f, "response answer empty")
            }
        }
    }
}

/// Map a failure cause to the text shown to the user.
pub fn classify(cause: &ErrorCause) -> String {
    match cause {
        ErrorCause::SessionNotReady => SESSION_NOT_READY_TEXT.to_string(),
        ErrorCause::Network(_) => NETWORK_ERROR_TEXT.to_string(),
        ErrorCause::Server {
            status,
            status_text,
            message,
        } => {
            let reason = message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .or_else(|| Some(status_text.as_str()).filter(|s| !s.is_empty()))
                .unwrap_or("Request failed");
            format!("Error: {reason} (Status: {status})")
        }
        ErrorCause::Protocol(ProtocolViolation::MissingAnswer) => MISSING_ANSWER_TEXT.to_string(),
        ErrorCause::Protocol(ProtocolViolation::EmptyAnswer) => EMPTY_ANSWER_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(status: u16, status_text: &str, message: Option<&str>) -> ErrorCause {
        ErrorCause::Server {
            status,
            status_text: status_text.into(),
            message: message.map(String::from),
        }
    }

    #[test]
    fn session_not_ready_text() {
        let text = classify(&ErrorCause::SessionNotReady);
        assert!(text.contains("session isn't ready yet"));
    }

    #[test]
    fn network_text_ignores_detail() {
        let a = classify(&ErrorCause::Network("connection refused".into()));
        let b = classify(&ErrorCause::Network("dns failure".into()));
        assert_eq!(a, b);
        assert!(a.contains("Could not connect to the server"));
    }

    #[test]
    fn server_error_prefers_server_message() {
        let text = classify(&server(500, "Internal Server Error", Some("backend down")));
        assert_eq!(text, "Error: backend down (Status: 500)");
    }

    #[test]
    fn server_error_falls_back_to_status_text() {
        let text = classify(&server(502, "Bad Gateway", None));
        assert_eq!(text, "Error: Bad Gateway (Status: 502)");
    }

    #[test]
    fn server_error_blank_message_uses_status_text() {
        let text = classify(&server(503, "Service Unavailable", Some("  ")));
        assert_eq!(text, "Error: Service Unavailable (Status: 503)");
    }

    #[test]
    fn server_error_without_any_reason() {
        let text = classify(&server(599, "", None));
        assert_eq!(text, "Error: Request failed (Status: 599)");
    }

    #[test]
    fn protocol_texts() {
        assert_eq!(
            classify(&ErrorCause::Protocol(ProtocolViolation::MissingAnswer)),
            MISSING_ANSWER_TEXT
        );
        let empty = classify(&ErrorCause::Protocol(ProtocolViolation::EmptyAnswer));
        assert!(empty.contains("empty response"));
        assert!(empty.contains("try again"));
    }

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(ErrorCause::SessionNotReady.kind(), ErrorKind::Validation);
        assert_eq!(ErrorCause::Network(String::new()).kind(), ErrorKind::Transport);
        assert_eq!(server(404, "Not Found", None).kind(), ErrorKind::Server);
        assert_eq!(
            ErrorCause::Protocol(ProtocolViolation::EmptyAnswer).kind(),
            ErrorKind::Protocol
        );
    }

    #[test]
    fn user_message_matches_classify() {
        let cause = server(500, "Internal Server Error", Some("boom"));
        assert_eq!(cause.user_message(), classify(&cause));
    }
}
