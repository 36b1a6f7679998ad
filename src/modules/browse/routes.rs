use serde::Serialize;

const MOVIE_PREFIX: &str = "/movie/";

/// Screens the presentation layer can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Route {
    /// `/`: search and popular listing.
    Home,
    /// `/movie/:id`, carrying the raw path parameter.
    MovieDetail(String),
}

impl Route {
    /// Match a location path. Query strings, fragments and a trailing slash
    /// are ignored. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let path = path.strip_suffix('/').unwrap_or(path);

        if path.is_empty() {
            return Some(Route::Home);
        }

        let id = path.strip_prefix(MOVIE_PREFIX)?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Route::MovieDetail(id.to_string()))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::MovieDetail(id) => format!("{}{}", MOVIE_PREFIX, id),
        }
    }

    pub fn movie(id: u64) -> Route {
        Route::MovieDetail(id.to_string())
    }
}
