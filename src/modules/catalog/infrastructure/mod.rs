// Clean architecture modules
pub mod adapters;
pub mod http_client;

// Re-export commonly used types
pub use adapters::TmdbAdapter;
pub use http_client::ApiClient;
