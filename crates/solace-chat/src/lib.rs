//! Chat session controller for Solace.
//!
//! Owns one conversation with a remote assistant reached through a proxy
//! gateway:
//! - Session identity issued once per controller
//! - Append-only message history seeded with a greeting
//! - A request lifecycle state machine allowing one query in flight
//! - Classification of every failure into a readable assistant turn

pub mod classifier;
pub mod controller;
pub mod gateway;
pub mod history;
pub mod identity;
pub mod lifecycle;

pub use classifier::{classify, ErrorCause, ErrorKind, ProtocolViolation};
pub use controller::{ChatController, ChatOptions, IgnoreReason, SubmitOutcome};
pub use gateway::{
    ChatRequest, GatewayError, GatewayResponse, HttpGateway, HttpGatewayConfig, ProxyGateway,
};
pub use history::MessageHistory;
pub use identity::{SessionIdentity, TokenSource, UuidTokenSource};
pub use lifecycle::{BlockReason, LifecycleEvent, LifecycleState, TransitionError};
pub use solace_common::SessionToken;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
