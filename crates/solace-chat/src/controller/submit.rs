//! The submission cycle: validate, commit, dispatch, settle.

use std::sync::atomic::Ordering;

use solace_common::new_correlation_id;
use tracing::{debug, info, warn};

use crate::classifier::{classify, ErrorCause};
use crate::gateway::ChatRequest;
use crate::lifecycle::{BlockReason, LifecycleEvent};

use super::response::interpret;
use super::types::{CycleGuard, IgnoreReason, SubmitOutcome};
use super::{lock, ChatController};

impl ChatController {
    /// Submit user text.
    ///
    /// Empty input, or any call while a previous cycle is still running,
    /// is a no-op. Otherwise exactly one assistant turn is appended before
    /// this returns, and the state is back to `Idle`.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        if self.shutdown.is_cancelled() {
            return SubmitOutcome::Ignored(IgnoreReason::TornDown);
        }

        let text = raw.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::EmptyInput);
        }

        if !self.try_begin() {
            debug!("submission ignored, request already in flight");
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        }
        let _guard = CycleGuard::new(self);

        let Some(token) = self.identity.token().cloned() else {
            warn!("session id not generated yet, cannot send message");
            self.advance(LifecycleEvent::Block(BlockReason::SessionNotReady));
            let cause = ErrorCause::SessionNotReady;
            lock(&self.history).append_assistant(classify(&cause));
            self.advance(LifecycleEvent::Settle);
            return SubmitOutcome::Failed(cause);
        };

        self.commit_user_turn(text);

        let request = ChatRequest {
            query: text.to_string(),
            session_id: token,
        };
        let request_id = new_correlation_id();
        info!(request = %request_id, session_id = %request.session_id, "sending query to gateway");
        self.advance(LifecycleEvent::Dispatched);

        let result = tokio::select! {
            _ = self.shutdown.cancelled() => None,
            result = self.gateway.send(&request) => Some(result),
        };

        // Never touch history once torn down, even if the response won the race.
        let result = match result {
            Some(result) if !self.shutdown.is_cancelled() => result,
            _ => {
                debug!(request = %request_id, "discarding response after teardown");
                self.advance(LifecycleEvent::Abandon);
                return SubmitOutcome::Discarded;
            }
        };
        self.advance(LifecycleEvent::Responded);

        let outcome = match result {
            Err(e) => {
                warn!(request = %request_id, error = %e, "gateway unreachable");
                Err(ErrorCause::Network(e.to_string()))
            }
            Ok(response) => interpret(&response),
        };

        let outcome = match outcome {
            Ok(answer) => {
                debug!(request = %request_id, chars = answer.len(), "received answer");
                lock(&self.history).append_assistant(answer.clone());
                SubmitOutcome::Answered(answer)
            }
            Err(cause) => {
                warn!(request = %request_id, cause = %cause, "submission failed");
                lock(&self.history).append_assistant(classify(&cause));
                if self.options.restore_input_on_error
                    && matches!(cause, ErrorCause::Network(_) | ErrorCause::Server { .. })
                {
                    self.set_input(&request.query);
                }
                SubmitOutcome::Failed(cause)
            }
        };

        self.advance(LifecycleEvent::Settle);
        outcome
    }

    /// Submit whatever is in the pending input buffer.
    pub async fn submit_pending(&self) -> SubmitOutcome {
        let text = self.input();
        self.submit(&text).await
    }

    /// Record the user turn, clear pending input, move to `Dispatching`.
    fn commit_user_turn(&self, text: &str) {
        lock(&self.history).append_user(text);
        lock(&self.input).clear();
        self.chat_started.store(true, Ordering::Release);
        self.advance(LifecycleEvent::Commit);
    }
}
