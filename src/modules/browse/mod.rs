//! View models for the two screens and the route table that selects them.

pub mod catalog_app;
pub mod detail;
pub mod fetch_outcome;
pub mod list;
pub mod messages;
pub mod routes;

pub use catalog_app::{CatalogApp, RouteState};
pub use detail::{DetailState, DetailStatus, DetailViewModel};
pub use fetch_outcome::FetchOutcome;
pub use list::{ListStatus, ListViewModel, SearchState};
pub use routes::Route;
