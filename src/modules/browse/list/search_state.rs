use serde::Serialize;

use crate::modules::catalog::MovieSummary;
use crate::shared::application::FIRST_PAGE;
use crate::shared::errors::FetchErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

/// Everything the search/browse screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchState {
    /// Term as the user entered it. Blank means "popular movies".
    pub term: String,
    /// Page being fetched while Loading; otherwise the last page shown.
    pub page: u32,
    pub total_pages: u32,
    pub results: Vec<MovieSummary>,
    pub status: ListStatus,
    pub error_message: Option<String>,
    pub error_kind: Option<FetchErrorKind>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            term: String::new(),
            page: FIRST_PAGE,
            total_pages: FIRST_PAGE,
            results: Vec::new(),
            status: ListStatus::Idle,
            error_message: None,
            error_kind: None,
        }
    }
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.status == ListStatus::Ready
    }

    /// True when the term is blank and the list shows popular movies.
    pub fn is_popular(&self) -> bool {
        self.term.trim().is_empty()
    }

    pub fn has_pagination(&self) -> bool {
        self.total_pages > FIRST_PAGE
    }

    pub fn can_go_prev(&self) -> bool {
        self.is_ready() && self.page > FIRST_PAGE
    }

    pub fn can_go_next(&self) -> bool {
        self.is_ready() && self.page < self.total_pages
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    /// Shown instead of cards when a real search came back empty.
    pub fn empty_results_message(&self) -> Option<String> {
        if self.is_ready() && self.results.is_empty() && !self.is_popular() {
            Some(format!("No results found for \"{}\".", self.term))
        } else {
            None
        }
    }
}
