use crate::scores_client::LoadError;
use chrono::{DateTime, Utc};
use standings::{RankedList, Student};
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

/// Where the page stands with respect to the students list.
#[derive(Clone, Debug)]
pub enum LoadState {
    Loading,
    Ready {
        ranked: Arc<RankedList>,
        loaded_at: DateTime<Utc>,
    },
    Error(String),
}

/// Handed out when a load starts; only the latest ticket may complete it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(Uuid);

impl LoadTicket {
    pub fn load_id(&self) -> Uuid {
        self.0
    }
}

struct Inner {
    state: LoadState,
    current_load: Option<Uuid>,
}

/// The single source of truth shared by every request handler.
pub struct LeaderboardState {
    inner: RwLock<Inner>,
}

impl Default for LeaderboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaderboardState {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                state: LoadState::Loading,
                current_load: None,
            }),
        }
    }

    pub fn snapshot(&self) -> LoadState {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .state
            .clone()
    }

    /// Moves to `Loading` and supersedes any load still in flight.
    pub fn begin_load(&self) -> LoadTicket {
        let ticket = LoadTicket(Uuid::new_v4());
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.state = LoadState::Loading;
        inner.current_load = Some(ticket.0);
        ticket
    }

    /// Applies the outcome of a load. Returns `false` when the ticket was
    /// superseded and the outcome dropped.
    pub fn complete(&self, ticket: LoadTicket, outcome: Result<Vec<Student>, LoadError>) -> bool {
        let next = match outcome {
            Ok(students) => {
                let ranked = RankedList::new(students);
                tracing::info!(students = ranked.len(), "Leaderboard is ready");
                LoadState::Ready {
                    ranked: Arc::new(ranked),
                    loaded_at: Utc::now(),
                }
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to load the leaderboard"
                );
                LoadState::Error(e.to_string())
            }
        };

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.current_load != Some(ticket.0) {
            tracing::info!(load_id = %ticket.0, "Dropping the outcome of a superseded load");
            return false;
        }
        inner.state = next;
        inner.current_load = None;
        true
    }
}
