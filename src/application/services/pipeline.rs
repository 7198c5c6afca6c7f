//! Load state for one fetch-and-transform pipeline.
//!
//! Every trigger takes a [`Ticket`] carrying a monotonically increasing
//! generation. Only the holder of the most recently issued ticket may move the
//! pipeline out of `Loading`; completions for older tickets are dropped, so a
//! slow response can never overwrite the result of a newer trigger.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Observable state of a pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<V> {
    Idle,
    Loading,
    Ready(V),
    Failed(String),
}

impl<V> ViewState<V> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&V> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Generation token for one fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Inner<V> {
    issued: u64,
    state: ViewState<V>,
}

/// State machine `Idle -> Loading -> {Ready, Failed}` guarded by generations.
///
/// The lock is held only for the state transition itself, never across a fetch.
#[derive(Debug)]
pub struct Pipeline<V> {
    name: &'static str,
    inner: Mutex<Inner<V>>,
}

impl<V> Pipeline<V> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Mutex::new(Inner {
                issued: 0,
                state: ViewState::Idle,
            }),
        }
    }

    /// Enters `Loading` and issues a ticket that supersedes all earlier ones.
    pub fn begin(&self) -> Ticket {
        let mut inner = self.lock();
        inner.issued += 1;
        inner.state = ViewState::Loading;
        tracing::debug!(pipeline = self.name, generation = inner.issued, "Cycle started");
        Ticket(inner.issued)
    }

    /// Applies the outcome of the cycle identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when a newer ticket has
    /// been issued since.
    pub fn complete<E: ToString>(&self, ticket: Ticket, outcome: Result<V, E>) -> bool {
        let mut inner = self.lock();
        if ticket.0 != inner.issued {
            tracing::warn!(
                pipeline = self.name,
                generation = ticket.0,
                latest = inner.issued,
                "Discarding stale result"
            );
            return false;
        }

        inner.state = match outcome {
            Ok(view) => ViewState::Ready(view),
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(pipeline = self.name, error = %message, "Cycle failed");
                ViewState::Failed(message)
            }
        };
        true
    }

    /// Generation of the most recently issued ticket; zero before the first trigger.
    pub fn latest_generation(&self) -> u64 {
        self.lock().issued
    }

    fn lock(&self) -> MutexGuard<'_, Inner<V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone> Pipeline<V> {
    /// Copy of the current state.
    pub fn snapshot(&self) -> ViewState<V> {
        self.lock().state.clone()
    }
}
