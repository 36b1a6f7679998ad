use serde::{Deserialize, Serialize};

use crate::shared::application::PaginatedResult;

/// Listing record rendered as a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    /// Resolved poster URL, or the list placeholder when TMDB has no poster.
    pub poster_url: String,
    /// `YYYY-MM-DD` as TMDB reports it; empty when unknown.
    pub release_date: String,
}

/// One page of movie summaries.
pub type MoviePage = PaginatedResult<MovieSummary>;
