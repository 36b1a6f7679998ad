use crate::{
    modules::catalog::{
        application::MetadataClient,
        domain::{MovieDetail, MoviePage},
        infrastructure::{adapters::tmdb::mapper::TmdbMapper, http_client::ApiClient},
    },
    shared::{
        application::FIRST_PAGE,
        config::{catalog_config::API_KEY_VAR, CatalogConfig},
        errors::{AppError, AppResult},
        utils::LogContext,
    },
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicBool, Ordering};

use super::models::*;

/// TMDB (The Movie Database) movie adapter over the v3 REST API
pub struct TmdbAdapter {
    http_client: ApiClient,
    config: CatalogConfig,
    mapper: TmdbMapper,
    missing_key_reported: AtomicBool,
}

impl TmdbAdapter {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_client(ApiClient::for_tmdb(), config)
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: ApiClient, config: CatalogConfig) -> Self {
        Self {
            http_client,
            config,
            mapper: TmdbMapper::new(),
            missing_key_reported: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The configured key, or a configuration error. Logged once per adapter.
    fn api_key(&self) -> AppResult<&str> {
        match self.config.api_key.as_deref() {
            Some(key) => Ok(key),
            None => {
                if !self.missing_key_reported.swap(true, Ordering::Relaxed) {
                    log::error!("TMDB: API key missing; set {} to enable fetching", API_KEY_VAR);
                }
                Err(AppError::ConfigError(format!(
                    "TMDB API key not found ({} is not set)",
                    API_KEY_VAR
                )))
            }
        }
    }

    /// Build URL with API key and additional query parameters
    fn build_url_with_params(&self, endpoint: &str, params: &[(&str, String)]) -> AppResult<String> {
        let api_key = self.api_key()?;
        let mut url = format!(
            "{}{}?api_key={}",
            self.config.api_base_url,
            endpoint,
            urlencoding::encode(api_key)
        );
        for (key, value) in params {
            if *key != "api_key" {
                url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
            }
        }
        Ok(url)
    }

    pub fn popular_url(&self, page: u32) -> AppResult<String> {
        self.build_url_with_params(
            "/movie/popular",
            &[
                ("language", self.config.language.clone()),
                ("page", page.max(FIRST_PAGE).to_string()),
            ],
        )
    }

    /// Search URL for a non-blank term. Blank terms should go to `popular_url`.
    pub fn search_url(&self, term: &str, page: u32) -> AppResult<String> {
        self.build_url_with_params(
            "/search/movie",
            &[
                ("language", self.config.language.clone()),
                ("query", term.to_string()),
                ("page", page.max(FIRST_PAGE).to_string()),
                ("include_adult", "false".to_string()),
            ],
        )
    }

    pub fn detail_url(&self, id: u64) -> AppResult<String> {
        self.build_url_with_params(
            &format!("/movie/{}", id),
            &[("append_to_response", "credits,videos".to_string())],
        )
    }

    /// List endpoints always exist, so a 404 here is an API failure rather
    /// than a missing record.
    async fn fetch_page(&self, url: &str) -> AppResult<MoviePage> {
        let response: TmdbPagedResponse<MovieResult> = match self.http_client.get(url).await {
            Ok(response) => response,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::ApiError(format!(
                    "{} API returned error: {}",
                    self.http_client.provider_name(),
                    StatusCode::NOT_FOUND
                )))
            }
            Err(e) => return Err(e),
        };
        Ok(self.mapper.map_page(response))
    }
}

#[async_trait]
impl MetadataClient for TmdbAdapter {
    async fn fetch_popular(&self, page: u32) -> AppResult<MoviePage> {
        let url = self.popular_url(page)?;

        log::info!("TMDB: Getting popular movies (page {})", page);

        let movies = self.fetch_page(&url).await?;

        log::info!(
            "TMDB: Popular page {}/{} returned {} movies",
            movies.page,
            movies.total_pages,
            movies.items.len()
        );
        Ok(movies)
    }

    async fn search(&self, term: &str, page: u32) -> AppResult<MoviePage> {
        let query = term.trim();
        if query.is_empty() {
            return self.fetch_popular(page).await;
        }

        let url = self.search_url(query, page)?;

        LogContext::search_operation(query, Some("TMDB"), None);

        let movies = self.fetch_page(&url).await?;

        LogContext::search_operation(query, Some("TMDB"), Some(movies.items.len()));
        Ok(movies)
    }

    async fn fetch_detail(&self, id: u64) -> AppResult<MovieDetail> {
        let url = self.detail_url(id)?;

        log::info!("TMDB: Getting movie details for ID '{}'", id);

        let details: MovieDetails = match self.http_client.get(&url).await {
            Ok(response) => response,
            Err(AppError::NotFound(_)) => {
                log::info!("TMDB: No movie found for ID '{}'", id);
                return Err(AppError::NotFound(format!("Movie {} not found", id)));
            }
            Err(e) => return Err(e),
        };

        let movie = self.mapper.map_details(details);

        log::info!("TMDB: Retrieved movie '{}' for ID '{}'", movie.title, id);
        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> TmdbAdapter {
        TmdbAdapter::new(CatalogConfig::new("KEY").with_base_url("https://api.example.test/3"))
    }

    #[test]
    fn test_popular_url() {
        assert_eq!(
            adapter().popular_url(3).unwrap(),
            "https://api.example.test/3/movie/popular?api_key=KEY&language=en-US&page=3"
        );
    }

    #[test]
    fn test_search_url_encodes_term_and_disables_adult() {
        assert_eq!(
            adapter().search_url("the matrix & co", 2).unwrap(),
            "https://api.example.test/3/search/movie?api_key=KEY&language=en-US\
             &query=the%20matrix%20%26%20co&page=2&include_adult=false"
        );
    }

    #[test]
    fn test_page_zero_is_treated_as_first_page() {
        assert!(adapter().popular_url(0).unwrap().ends_with("&page=1"));
    }

    #[test]
    fn test_detail_url_appends_credits_and_videos() {
        assert_eq!(
            adapter().detail_url(27205).unwrap(),
            "https://api.example.test/3/movie/27205?api_key=KEY\
             &append_to_response=credits%2Cvideos"
        );
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let adapter = TmdbAdapter::new(CatalogConfig::default());
        assert!(matches!(adapter.popular_url(1), Err(AppError::ConfigError(_))));
        assert!(matches!(adapter.detail_url(1), Err(AppError::ConfigError(_))));
    }
}
