//! Session identity issuance.
//!
//! A controller gets exactly one token for its whole lifetime. Until the
//! token is issued the session is not ready and nothing may reach the
//! gateway. Uniqueness across controllers rests on the randomness of the
//! source (UUID v4 by default); it is an assumption, not a guarantee.

use std::sync::OnceLock;

use solace_common::SessionToken;
use tracing::info;

/// Produces session tokens.
pub trait TokenSource: Send + Sync {
    fn generate(&self) -> SessionToken;
}

/// Random UUID v4 tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidTokenSource;

impl TokenSource for UuidTokenSource {
    fn generate(&self) -> SessionToken {
        SessionToken::generate()
    }
}

pub struct SessionIdentity {
    source: Box<dyn TokenSource>,
    token: OnceLock<SessionToken>,
}

impl SessionIdentity {
    pub fn new() -> Self {
        Self::with_source(UuidTokenSource)
    }

    pub fn with_source(source: impl TokenSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            token: OnceLock::new(),
        }
    }

    /// Issue the session token. The source is consulted at most once;
    /// repeated calls return the same token.
    pub fn issue(&self) -> &SessionToken {
        self.token.get_or_init(|| {
            let token = self.source.generate();
            info!(session_id = %token, "generated session id");
            token
        })
    }

    /// The issued token, or `None` while the session is not ready.
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.get()
    }

    pub fn is_ready(&self) -> bool {
        self.token.get().is_some()
    }
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIdentity")
            .field("token", &self.token.get())
            .finish()
    }
}
