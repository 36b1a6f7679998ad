pub mod api_client;

pub use api_client::{redact_api_key, ApiClient};
