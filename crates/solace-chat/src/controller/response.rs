//! Interpretation of gateway responses.

use serde_json::Value;
use tracing::{debug, warn};

use crate::classifier::{ErrorCause, ProtocolViolation};
use crate::gateway::GatewayResponse;

/// Extract the answer from a response, or the cause of failure.
pub(super) fn interpret(response: &GatewayResponse) -> Result<String, ErrorCause> {
    if !response.is_success() {
        return Err(ErrorCause::Server {
            status: response.status,
            status_text: response.status_text.clone(),
            message: server_message(&response.body),
        });
    }

    let json: Value = match serde_json::from_str(&response.body) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "success response body is not JSON");
            return Err(ErrorCause::Protocol(ProtocolViolation::MissingAnswer));
        }
    };

    match json.get("answer") {
        None => {
            warn!(body = %json, "response missing 'answer'");
            Err(ErrorCause::Protocol(ProtocolViolation::MissingAnswer))
        }
        Some(Value::Null) => Err(ErrorCause::Protocol(ProtocolViolation::EmptyAnswer)),
        Some(Value::String(answer)) if answer.is_empty() => {
            Err(ErrorCause::Protocol(ProtocolViolation::EmptyAnswer))
        }
        Some(Value::String(answer)) => Ok(answer.clone()),
        Some(other) => {
            warn!(answer = %other, "response 'answer' is not a string");
            Err(ErrorCause::Protocol(ProtocolViolation::MissingAnswer))
        }
    }
}

/// The `error` string of a JSON failure body, if there is one.
fn server_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json
            .get("error")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(String::from),
        Err(_) => {
            debug!("could not parse error response body as JSON");
            None
        }
    }
}
