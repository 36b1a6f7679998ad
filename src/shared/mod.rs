// Shared kernel used by every module

pub mod application; // Shared application layer patterns
pub mod config; // Runtime configuration
pub mod errors; // Shared error types
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use config::CatalogConfig;
pub use errors::{AppError, AppResult, FetchErrorKind};
