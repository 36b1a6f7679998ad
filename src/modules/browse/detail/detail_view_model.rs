use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::detail_state::{DetailState, DetailStatus};
use crate::modules::browse::{
    messages::{user_message, DETAIL_FETCH_FAILED, DETAIL_NOT_FOUND},
    FetchOutcome,
};
use crate::modules::catalog::MetadataClient;
use crate::shared::application::{Generation, StateHolder};
use crate::shared::errors::AppError;

/// State machine behind the per-movie page.
///
/// Keyed on the route's id parameter. A new id recreates the state at
/// Loading and fetches; the same id while Loading or Ready is a no-op.
pub struct DetailViewModel {
    client: Arc<dyn MetadataClient>,
    state: StateHolder<DetailState>,
}

/// TMDB movie ids are positive integers; anything else cannot resolve.
pub fn parse_movie_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

impl DetailViewModel {
    pub fn new(client: Arc<dyn MetadataClient>) -> Self {
        Self {
            client,
            state: StateHolder::new(DetailState::no_id()),
        }
    }

    pub fn state(&self) -> DetailState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    /// Route parameter changed (or was first seen).
    pub async fn load(&self, id: Option<&str>) -> FetchOutcome {
        let raw = match id.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw.to_string(),
            None => {
                debug!("detail route has no id");
                self.state.reset(DetailState::no_id());
                return FetchOutcome::Skipped;
            }
        };

        let generation = match self.state.try_begin(|state| {
            if state.settled_for(&raw) {
                return false;
            }
            *state = DetailState::loading(&raw);
            true
        }) {
            Some(generation) => generation,
            None => return FetchOutcome::Skipped,
        };

        self.fetch_and_commit(generation, raw).await
    }

    /// Fetch the current id again regardless of its status.
    pub async fn reload(&self) -> FetchOutcome {
        let current = self.state.inspect(|state| state.id.clone());
        match current {
            Some(raw) => {
                let generation = self.state.begin(|state| *state = DetailState::loading(&raw));
                self.fetch_and_commit(generation, raw).await
            }
            None => FetchOutcome::Skipped,
        }
    }

    async fn fetch_and_commit(&self, generation: Generation, raw: String) -> FetchOutcome {
        let Some(movie_id) = parse_movie_id(&raw) else {
            info!(id = %raw, "detail id is not a movie id");
            let committed = self
                .state
                .complete(generation, |state| *state = DetailState::not_found(&raw, DETAIL_NOT_FOUND));
            return FetchOutcome::from_commit(committed);
        };

        info!(movie_id, generation, "detail fetch issued");
        let result = self.client.fetch_detail(movie_id).await;

        let committed = match result {
            Ok(movie) => {
                let title = movie.title.clone();
                let committed = self.state.complete(generation, move |state| {
                    state.record = Some(movie);
                    state.status = DetailStatus::Ready;
                    state.error_message = None;
                    state.error_kind = None;
                });
                if committed {
                    info!(movie_id, title = %title, "detail fetch ready");
                }
                committed
            }
            Err(AppError::NotFound(reason)) => {
                let committed = self.state.complete(generation, |state| {
                    *state = DetailState::not_found(&raw, DETAIL_NOT_FOUND)
                });
                if committed {
                    info!(movie_id, reason = %reason, "detail not found");
                }
                committed
            }
            Err(err) => {
                let message = user_message(&err, DETAIL_FETCH_FAILED);
                let kind = err.kind();
                let committed = self.state.complete(generation, move |state| {
                    state.record = None;
                    state.status = DetailStatus::Error;
                    state.error_message = Some(message);
                    state.error_kind = Some(kind);
                });
                if committed {
                    warn!(movie_id, error = %err, "detail fetch failed");
                }
                committed
            }
        };

        if !committed {
            debug!(movie_id, generation, "stale detail response dropped");
        }
        FetchOutcome::from_commit(committed)
    }
}
