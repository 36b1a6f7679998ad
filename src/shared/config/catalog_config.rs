/// Default TMDB v3 REST endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
/// Default response language for list endpoints.
pub const DEFAULT_LANGUAGE: &str = "en-US";

pub const API_KEY_VAR: &str = "TMDB_API_KEY";
pub const API_BASE_URL_VAR: &str = "TMDB_API_BASE_URL";
pub const LANGUAGE_VAR: &str = "TMDB_LANGUAGE";

/// Configuration handed to the metadata client at construction.
///
/// A missing API key is representable on purpose: the client reports it as a
/// configuration error on every fetch instead of refusing to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub language: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Load configuration from the process environment, reading `.env` first.
    ///
    /// | Env Var              | Required | Default                        |
    /// |----------------------|----------|--------------------------------|
    /// | `TMDB_API_KEY`       | **yes**  | --                             |
    /// | `TMDB_API_BASE_URL`  | no       | `https://api.themoviedb.org/3` |
    /// | `TMDB_LANGUAGE`      | no       | `en-US`                        |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let config = Self {
            api_key: read(API_KEY_VAR),
            api_base_url: read(API_BASE_URL_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            language: read(LANGUAGE_VAR).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        };

        if config.api_key.is_none() {
            log::warn!("{} not found in environment", API_KEY_VAR);
        }

        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
