use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::search_state::{ListStatus, SearchState};
use crate::modules::browse::{
    messages::{user_message, LIST_FETCH_FAILED},
    FetchOutcome,
};
use crate::modules::catalog::{MetadataClient, MoviePage};
use crate::shared::application::{Generation, StateHolder, FIRST_PAGE};
use crate::shared::errors::AppResult;

/// State machine behind the search/browse screen.
///
/// Idle → Loading → (Ready | Error). Every action issues at most one fetch;
/// a response is committed only if no newer action was issued after it.
/// On failure the results are cleared, never kept from a previous page.
pub struct ListViewModel {
    client: Arc<dyn MetadataClient>,
    state: StateHolder<SearchState>,
}

impl ListViewModel {
    pub fn new(client: Arc<dyn MetadataClient>) -> Self {
        Self {
            client,
            state: StateHolder::new(SearchState::default()),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Startup load: popular movies, first page.
    pub async fn load_popular(&self) -> FetchOutcome {
        self.search("").await
    }

    /// New search. Resets to page 1; a blank term lists popular movies.
    pub async fn search(&self, term: &str) -> FetchOutcome {
        let term = term.to_string();
        let generation = self.state.begin(|state| {
            state.term = term.clone();
            state.page = FIRST_PAGE;
            state.status = ListStatus::Loading;
            state.error_message = None;
            state.error_kind = None;
        });

        info!(term = %term, generation, "list search issued");
        self.fetch_and_commit(generation, term, FIRST_PAGE, FIRST_PAGE)
            .await
    }

    pub async fn next_page(&self) -> FetchOutcome {
        self.step_page(1).await
    }

    pub async fn prev_page(&self) -> FetchOutcome {
        self.step_page(-1).await
    }

    /// Move one page forward or back with the current term. Only valid from
    /// Ready and inside [1, total_pages]; otherwise nothing changes.
    async fn step_page(&self, delta: i64) -> FetchOutcome {
        let mut target = None;
        let issued = self.state.try_begin(|state| {
            if state.status != ListStatus::Ready {
                return false;
            }
            let next = i64::from(state.page) + delta;
            if next < i64::from(FIRST_PAGE) || next > i64::from(state.total_pages) {
                return false;
            }
            let next = next as u32;
            target = Some((state.term.clone(), next, state.page));
            state.page = next;
            state.status = ListStatus::Loading;
            state.error_message = None;
            state.error_kind = None;
            true
        });

        match (issued, target) {
            (Some(generation), Some((term, page, settled_page))) => {
                debug!(term = %term, page, generation, "list page change issued");
                self.fetch_and_commit(generation, term, page, settled_page)
                    .await
            }
            _ => {
                debug!(delta, "page change ignored at bound or while not ready");
                FetchOutcome::Skipped
            }
        }
    }

    async fn fetch(&self, term: &str, page: u32) -> AppResult<MoviePage> {
        let query = term.trim();
        if query.is_empty() {
            self.client.fetch_popular(page).await
        } else {
            self.client.search(query, page).await
        }
    }

    async fn fetch_and_commit(
        &self,
        generation: Generation,
        term: String,
        page: u32,
        settled_page: u32,
    ) -> FetchOutcome {
        let result = self.fetch(&term, page).await;

        let committed = match result {
            Ok(movies) => {
                let count = movies.items.len();
                let committed = self.state.complete(generation, move |state| {
                    state.page = movies.page;
                    state.total_pages = movies.total_pages;
                    state.results = movies.items;
                    state.status = ListStatus::Ready;
                    state.error_message = None;
                    state.error_kind = None;
                });
                if committed {
                    info!(term = %term, page, results = count, "list fetch ready");
                }
                committed
            }
            Err(err) => {
                let message = user_message(&err, LIST_FETCH_FAILED);
                let kind = err.kind();
                // The failed page was never shown; fall back to the last one that was.
                let committed = self.state.complete(generation, move |state| {
                    state.page = settled_page;
                    state.results.clear();
                    state.status = ListStatus::Error;
                    state.error_message = Some(message);
                    state.error_kind = Some(kind);
                });
                if committed {
                    warn!(term = %term, page, error = %err, "list fetch failed");
                }
                committed
            }
        };

        if !committed {
            debug!(term = %term, page, generation, "stale list response dropped");
        }
        FetchOutcome::from_commit(committed)
    }
}
