pub mod entities;

pub use entities::{Genre, MovieDetail, MoviePage, MovieSummary};
