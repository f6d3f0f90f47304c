//! Request lifecycle state machine.
//!
//! `Idle -> Validating -> Dispatching -> AwaitingResponse -> Completed -> Idle`,
//! with `Validating -> Blocked -> Idle` when the session is not ready and
//! `AwaitingResponse -> Idle` when a pending response is abandoned on
//! teardown. `next` is total: every (state, event) pair yields either the
//! next state or a `TransitionError`.

use std::fmt;

/// Why a submission was blocked before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    SessionNotReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Idle,
    Validating,
    Blocked(BlockReason),
    Dispatching,
    AwaitingResponse,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Non-empty input arrived.
    Submit,
    /// Validation found the session unusable.
    Block(BlockReason),
    /// The user turn was recorded.
    Commit,
    /// The request left for the gateway.
    Dispatched,
    /// A response or transport failure came back.
    Responded,
    /// The cycle ended; input may be accepted again.
    Settle,
    /// The pending response will never be applied.
    Abandon,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid lifecycle transition: {event:?} in state {from}")]
pub struct TransitionError {
    pub from: LifecycleState,
    pub event: LifecycleEvent,
}

impl LifecycleState {
    pub fn next(self, event: LifecycleEvent) -> Result<LifecycleState, TransitionError> {
        use LifecycleEvent as E;
        use LifecycleState as S;

        match (self, event) {
            (S::Idle, E::Submit) => Ok(S::Validating),
            (S::Validating, E::Block(reason)) => Ok(S::Blocked(reason)),
            (S::Validating, E::Commit) => Ok(S::Dispatching),
            (S::Dispatching, E::Dispatched) => Ok(S::AwaitingResponse),
            (S::AwaitingResponse, E::Responded) => Ok(S::Completed),
            (S::AwaitingResponse, E::Abandon) => Ok(S::Idle),
            (S::Blocked(_), E::Settle) | (S::Completed, E::Settle) => Ok(S::Idle),
            (from, event) => Err(TransitionError { from, event }),
        }
    }

    /// New submissions are accepted only when idle.
    pub fn accepts_input(self) -> bool {
        self == LifecycleState::Idle
    }

    /// A request is between commit and completion.
    pub fn is_in_flight(self) -> bool {
        matches!(
            self,
            LifecycleState::Dispatching | LifecycleState::AwaitingResponse
        )
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Idle => write!(f, "idle"),
            LifecycleState::Validating => write!(f, "validating"),
            LifecycleState::Blocked(BlockReason::SessionNotReady) => {
                write!(f, "blocked (session not ready)")
            }
            LifecycleState::Dispatching => write!(f, "dispatching"),
            LifecycleState::AwaitingResponse => write!(f, "awaiting response"),
            LifecycleState::Completed => write!(f, "completed"),
        }
    }
}
