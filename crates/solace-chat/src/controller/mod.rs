//! Request lifecycle controller.
//!
//! `ChatController` owns the session identity, the message history, the
//! pending input buffer and the lifecycle state. It accepts one submission
//! at a time and turns every outcome into exactly one assistant turn.

mod response;
mod submit;
mod types;


use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use solace_common::SessionToken;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::gateway::ProxyGateway;
use crate::history::MessageHistory;
use crate::identity::SessionIdentity;
use crate::lifecycle::{LifecycleEvent, LifecycleState};
use crate::Turn;

pub use types::{ChatOptions, IgnoreReason, SubmitOutcome};

pub struct ChatController {
    gateway: Arc<dyn ProxyGateway>,
    identity: SessionIdentity,
    history: Mutex<MessageHistory>,
    /// Text typed but not yet submitted.
    input: Mutex<String>,
    /// Current lifecycle state; receivers see every transition.
    state: watch::Sender<LifecycleState>,
    options: ChatOptions,
    shutdown: CancellationToken,
    chat_started: AtomicBool,
}

impl ChatController {
    /// Build a controller whose session is not ready yet. Call
    /// [`issue_session`](Self::issue_session) before submitting.
    pub fn new(gateway: Arc<dyn ProxyGateway>, options: ChatOptions) -> Self {
        Self::with_identity(gateway, options, SessionIdentity::new())
    }

    pub fn with_identity(
        gateway: Arc<dyn ProxyGateway>,
        options: ChatOptions,
        identity: SessionIdentity,
    ) -> Self {
        let (state, _) = watch::channel(LifecycleState::Idle);
        Self {
            gateway,
            identity,
            history: Mutex::new(MessageHistory::seeded(options.greeting.clone())),
            input: Mutex::new(String::new()),
            state,
            options,
            shutdown: CancellationToken::new(),
            chat_started: AtomicBool::new(false),
        }
    }

    /// Build a controller and issue its session token immediately.
    pub fn start(gateway: Arc<dyn ProxyGateway>, options: ChatOptions) -> Self {
        let controller = Self::new(gateway, options);
        controller.issue_session();
        controller
    }

    /// Issue the session token; later calls return the same token.
    pub fn issue_session(&self) -> &SessionToken {
        self.identity.issue()
    }

    pub fn session_token(&self) -> Option<&SessionToken> {
        self.identity.token()
    }

    pub fn is_session_ready(&self) -> bool {
        self.identity.is_ready()
    }

    /// Snapshot of the conversation for presentation.
    pub fn history(&self) -> Vec<Turn> {
        lock(&self.history).all().to_vec()
    }

    pub fn history_len(&self) -> usize {
        lock(&self.history).len()
    }

    pub fn state(&self) -> LifecycleState {
        *self.state.borrow()
    }

    /// Watch lifecycle transitions (e.g. to toggle an input surface).
    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Whether the input surface should accept text right now.
    pub fn input_enabled(&self) -> bool {
        !self.shutdown.is_cancelled() && self.state().accepts_input()
    }

    /// True once the first user turn has been recorded.
    pub fn is_chat_started(&self) -> bool {
        self.chat_started.load(Ordering::Acquire)
    }

    pub fn input(&self) -> String {
        lock(&self.input).clone()
    }

    /// Replace the pending input, clamped to `max_input_chars` characters.
    pub fn set_input(&self, text: &str) {
        let clamped: String = text.chars().take(self.options.max_input_chars).collect();
        *lock(&self.input) = clamped;
    }

    pub fn options(&self) -> &ChatOptions {
        &self.options
    }

    /// Stop accepting submissions and discard any response still in flight.
    pub fn teardown(&self) {
        if !self.shutdown.is_cancelled() {
            debug!("chat controller torn down");
            self.shutdown.cancel();
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Apply a lifecycle event. Events are only issued along valid paths,
    /// so a rejection is logged, the state left alone and nobody woken.
    fn advance(&self, event: LifecycleEvent) {
        self.state.send_if_modified(|state| match state.next(event) {
            Ok(next) => {
                *state = next;
                true
            }
            Err(e) => {
                warn!(error = %e, "rejected lifecycle transition");
                false
            }
        });
    }

    /// Atomically move `Idle -> Validating`. False if a cycle is running.
    fn try_begin(&self) -> bool {
        self.state
            .send_if_modified(|state| match state.next(LifecycleEvent::Submit) {
                Ok(next) => {
                    *state = next;
                    true
                }
                Err(_) => false,
            })
    }

    /// Unconditionally return to `Idle`.
    fn force_idle(&self) {
        self.state.send_if_modified(|state| {
            if *state == LifecycleState::Idle {
                false
            } else {
                debug!(from = %state, "forcing lifecycle back to idle");
                *state = LifecycleState::Idle;
                true
            }
        });
    }
}

impl std::fmt::Debug for ChatController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatController")
            .field("identity", &self.identity)
            .field("state", &self.state())
            .field("history_len", &self.history_len())
            .field("torn_down", &self.is_torn_down())
            .finish()
    }
}

/// Lock a mutex, recovering the data if a panicking holder poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
