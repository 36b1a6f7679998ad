pub mod modules;
pub mod shared;

pub use modules::browse::{
    CatalogApp, DetailState, DetailStatus, DetailViewModel, FetchOutcome, ListStatus,
    ListViewModel, Route, RouteState, SearchState,
};
pub use modules::catalog::{MetadataClient, MovieDetail, MoviePage, MovieSummary, TmdbAdapter};
pub use shared::{AppError, AppResult, CatalogConfig};

/// Build the catalog the way the presentation layer is expected to at startup:
/// logging first, then configuration from `.env` and the environment.
///
/// The initial popular-movies fetch is left to the caller (`CatalogApp::start`)
/// so it runs on the caller's runtime.
pub fn bootstrap() -> CatalogApp {
    shared::utils::init_logger();

    let config = CatalogConfig::from_env();
    if !config.has_api_key() {
        log::warn!("Catalog starting without an API key; every fetch will fail with a configuration error");
    }

    CatalogApp::from_config(config)
}
