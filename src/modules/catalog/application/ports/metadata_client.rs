use async_trait::async_trait;

use crate::modules::catalog::domain::{MovieDetail, MoviePage};
use crate::shared::errors::AppResult;

/// Read-only access to the movie metadata provider.
///
/// Implementations must fail with `AppError::ConfigError` before touching the
/// network when no API key is configured.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataClient: Send + Sync {
    /// Popular movies, one page.
    async fn fetch_popular(&self, page: u32) -> AppResult<MoviePage>;

    /// Title search. A blank term behaves exactly like `fetch_popular`.
    async fn search(&self, term: &str, page: u32) -> AppResult<MoviePage>;

    /// Full record including credits and videos. `AppError::NotFound` on 404.
    async fn fetch_detail(&self, id: u64) -> AppResult<MovieDetail>;
}
