//! Conversation behaviour configuration.

use serde::{Deserialize, Serialize};
use solace_common::{DEFAULT_GREETING, DEFAULT_MAX_INPUT_CHARS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Assistant turn the history is seeded with.
    pub greeting: String,
    /// Pending input is clamped to this many characters.
    pub max_input_chars: u32,
    /// Put the query back into the input buffer after a network or server error.
    pub restore_input_on_error: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.into(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS as u32,
            restore_input_on_error: true,
        }
    }
}
