pub mod list_view_model;
pub mod search_state;

pub use list_view_model::ListViewModel;
pub use search_state::{ListStatus, SearchState};
