//! Controller options, outcomes and the cycle guard.

use solace_common::{DEFAULT_GREETING, DEFAULT_MAX_INPUT_CHARS};

use crate::classifier::ErrorCause;

use super::ChatController;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOptions {
    /// Assistant turn the history starts with.
    pub greeting: String,
    /// Pending input is clamped to this many characters.
    pub max_input_chars: usize,
    /// Put the query back into the input buffer after a network or server error.
    pub restore_input_on_error: bool,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.into(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            restore_input_on_error: true,
        }
    }
}

impl ChatOptions {
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }

    pub fn with_restore_input_on_error(mut self, restore: bool) -> Self {
        self.restore_input_on_error = restore;
        self
    }
}

/// Why a submission was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Input was empty after trimming.
    EmptyInput,
    /// Another submission is still in its cycle.
    Busy,
    /// The controller was torn down.
    TornDown,
}

/// Result of one `submit` call. Failures are already in the history as
/// assistant turns; this only reports what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The assistant answered; the answer was appended.
    Answered(String),
    /// The cycle failed; the classified text was appended.
    Failed(ErrorCause),
    /// Teardown happened while awaiting the response; it was dropped.
    Discarded,
}

impl SubmitOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, SubmitOutcome::Ignored(_))
    }
}

/// Returns the controller to `Idle` when a cycle ends by any path,
/// including the submit future being dropped mid-await.
pub(super) struct CycleGuard<'a> {
    controller: &'a ChatController,
}

impl<'a> CycleGuard<'a> {
    pub(super) fn new(controller: &'a ChatController) -> Self {
        Self { controller }
    }
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        self.controller.force_idle();
    }
}
