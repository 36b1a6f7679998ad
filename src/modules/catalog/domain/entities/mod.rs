pub mod movie_detail;
pub mod movie_summary;

pub use movie_detail::{Genre, MovieDetail, NOT_AVAILABLE};
pub use movie_summary::{MoviePage, MovieSummary};
