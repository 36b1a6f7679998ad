pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::MetadataClient;
pub use domain::{Genre, MovieDetail, MoviePage, MovieSummary};
pub use infrastructure::TmdbAdapter;
