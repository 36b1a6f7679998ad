pub mod detail_state;
pub mod detail_view_model;

pub use detail_state::{DetailState, DetailStatus};
pub use detail_view_model::{parse_movie_id, DetailViewModel};
