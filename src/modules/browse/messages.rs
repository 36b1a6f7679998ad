use crate::shared::errors::AppError;

pub const CONFIG_MISSING: &str =
    "TMDb API Key not found. Please check your environment configuration.";
pub const LIST_FETCH_FAILED: &str = "Failed to fetch movies. Please try again.";
pub const DETAIL_FETCH_FAILED: &str = "Failed to fetch movie details. Please try again.";
pub const DETAIL_NOT_FOUND: &str = "Movie not found.";

/// Collapse a client failure into the single line shown to the user.
pub fn user_message(err: &AppError, fallback: &str) -> String {
    if err.is_config() {
        CONFIG_MISSING.to_string()
    } else {
        fallback.to_string()
    }
}
