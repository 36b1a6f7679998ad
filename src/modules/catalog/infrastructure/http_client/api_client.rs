//! Thin JSON-over-HTTP client shared by the metadata adapters.
//!
//! One attempt per call: no retries and no rate limiting. Failures come back
//! classified so callers can tell transport, status, and body problems apart.

use crate::modules::catalog::infrastructure::adapters::tmdb::models::TmdbError;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use reqwest::{Client, Response, StatusCode};

const DEFAULT_USER_AGENT: &str = "cinescope/0.1";
const BODY_PREVIEW_LEN: usize = 200;

pub struct ApiClient {
    client: Client,
    user_agent: String,
    provider_name: String,
}

impl ApiClient {
    /// Create a new client for the TMDB API
    pub fn for_tmdb() -> Self {
        Self::new("TMDB", Client::new())
    }

    /// Create a custom client
    pub fn new(provider_name: &str, client: Client) -> Self {
        Self {
            client,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            provider_name: provider_name.to_string(),
        }
    }

    /// Get provider name
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// GET `url` and decode the JSON body.
    ///
    /// 404 maps to `NotFound`, any other non-2xx to `ApiError` carrying the
    /// status code, transport failures to `NetworkError`, and bodies that do
    /// not match `T` to `ParseError`.
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let endpoint = redact_api_key(url);
        LogContext::api_call(&self.provider_name, &endpoint, "started", None);
        let timer = TimedOperation::new(&format!("{} GET {}", self.provider_name, endpoint));

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                log::warn!("{} API request failed: {}", self.provider_name, e);
                AppError::from(e)
            })?;

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            &endpoint,
            status.as_str(),
            Some(timer.elapsed_ms()),
        );

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "{} resource not found: {}",
                self.provider_name, endpoint
            )));
        }

        if !status.is_success() {
            let detail = self.error_detail(response).await;
            return Err(AppError::ApiError(format!(
                "{} API returned error: {}{}",
                self.provider_name, status, detail
            )));
        }

        self.parse_response(response).await
    }

    /// Pull `status_message` out of a TMDB error body, if there is one.
    async fn error_detail(&self, response: Response) -> String {
        let body = response.text().await.unwrap_or_default();
        serde_json::from_str::<TmdbError>(&body)
            .map(|error| format!(" ({})", error.status_message))
            .unwrap_or_default()
    }

    /// Parse the response body as JSON
    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::NetworkError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::ParseError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                preview(&response_text)
            ))
        })
    }
}

fn preview(body: &str) -> String {
    if body.len() > BODY_PREVIEW_LEN {
        let cut = (0..=BODY_PREVIEW_LEN)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

/// Mask the `api_key` query value so URLs can be logged.
pub fn redact_api_key(url: &str) -> String {
    const MARKER: &str = "api_key=";
    match url.find(MARKER) {
        Some(start) => {
            let value_start = start + MARKER.len();
            let value_end = url[value_start..]
                .find('&')
                .map(|offset| value_start + offset)
                .unwrap_or(url.len());
            format!("{}***{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}
