use serde::Serialize;
use std::sync::Arc;

use super::{
    detail::{DetailState, DetailViewModel},
    list::{ListViewModel, SearchState},
    routes::Route,
    FetchOutcome,
};
use crate::modules::catalog::{MetadataClient, TmdbAdapter};
use crate::shared::config::CatalogConfig;

/// State the presentation layer renders for a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RouteState {
    Search(SearchState),
    Detail(DetailState),
}

/// Wires both view models to one metadata client and exposes them by route.
pub struct CatalogApp {
    list: ListViewModel,
    detail: DetailViewModel,
}

impl CatalogApp {
    pub fn new(client: Arc<dyn MetadataClient>) -> Self {
        Self {
            list: ListViewModel::new(client.clone()),
            detail: DetailViewModel::new(client),
        }
    }

    pub fn from_config(config: CatalogConfig) -> Self {
        Self::new(Arc::new(TmdbAdapter::new(config)))
    }

    /// Reads `.env` and the process environment for the API key.
    pub fn from_env() -> Self {
        Self::from_config(CatalogConfig::from_env())
    }

    pub fn list(&self) -> &ListViewModel {
        &self.list
    }

    pub fn detail(&self) -> &DetailViewModel {
        &self.detail
    }

    /// Initial load of the home screen: popular movies, page 1.
    pub async fn start(&self) -> FetchOutcome {
        log::info!("Catalog starting with popular movies");
        self.list.load_popular().await
    }

    /// Follow a location change. The home screen keeps its state; the movie
    /// route hands its id to the detail view model.
    pub async fn navigate(&self, path: &str) -> Option<Route> {
        let Some(route) = Route::parse(path) else {
            log::warn!("No route matches '{}'", path);
            return None;
        };

        if let Route::MovieDetail(id) = &route {
            self.detail.load(Some(id)).await;
        }
        Some(route)
    }

    pub fn view(&self, route: &Route) -> RouteState {
        match route {
            Route::Home => RouteState::Search(self.list.state()),
            Route::MovieDetail(_) => RouteState::Detail(self.detail.state()),
        }
    }
}
