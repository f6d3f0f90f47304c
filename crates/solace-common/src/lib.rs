pub mod defaults;
pub mod errors;
pub mod id;

pub use defaults::{DEFAULT_GREETING, DEFAULT_MAX_INPUT_CHARS};
pub use errors::{ConfigError, SolaceError};
pub use id::{new_correlation_id, new_id, SessionToken};

pub type Result<T> = std::result::Result<T, SolaceError>;
