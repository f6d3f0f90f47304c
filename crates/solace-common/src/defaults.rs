//! Chat defaults shared by the config schema and the controller.

/// Assistant turn a fresh conversation starts with.
pub const DEFAULT_GREETING: &str = "Hi! How can I help you today?";

/// Pending input is clamped to this many characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 1024;
