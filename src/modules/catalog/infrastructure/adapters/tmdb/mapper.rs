use super::models::{Credits, MovieDetails, MovieResult, TmdbPagedResponse, Videos};
use crate::modules::catalog::domain::{
    entities::NOT_AVAILABLE, Genre, MovieDetail, MoviePage, MovieSummary,
};

pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/w1280";
pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Shown on cards when TMDB has no poster.
pub const LIST_POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/200x300?text=No+Image";
/// Shown on the detail page when TMDB has no poster.
pub const DETAIL_POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/300x450?text=No+Poster";

pub const TOP_CAST_LIMIT: usize = 5;

/// TMDB (The Movie Database) specific mapper implementation
#[derive(Debug, Clone)]
pub struct TmdbMapper {
    poster_base_url: String,
    backdrop_base_url: String,
}

impl Default for TmdbMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TmdbMapper {
    pub fn new() -> Self {
        Self {
            poster_base_url: POSTER_BASE_URL.to_string(),
            backdrop_base_url: BACKDROP_BASE_URL.to_string(),
        }
    }

    /// Resolve an image path against a base, treating blank paths as absent.
    fn image_url(base: &str, path: Option<&str>) -> Option<String> {
        path.map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", base, p))
    }

    pub fn poster_url(&self, path: Option<&str>, placeholder: &str) -> String {
        Self::image_url(&self.poster_base_url, path).unwrap_or_else(|| placeholder.to_string())
    }

    pub fn backdrop_url(&self, path: Option<&str>) -> Option<String> {
        Self::image_url(&self.backdrop_base_url, path)
    }

    pub fn map_summary(&self, movie: MovieResult) -> MovieSummary {
        MovieSummary {
            id: movie.id,
            poster_url: self.poster_url(movie.poster_path.as_deref(), LIST_POSTER_PLACEHOLDER),
            title: movie.title.or(movie.original_title).unwrap_or_default(),
            release_date: movie.release_date.unwrap_or_default(),
        }
    }

    pub fn map_page(&self, response: TmdbPagedResponse<MovieResult>) -> MoviePage {
        let items = response
            .results
            .into_iter()
            .map(|movie| self.map_summary(movie))
            .collect();

        MoviePage::new(
            items,
            response.page,
            response.total_pages,
            response.total_results,
        )
    }

    pub fn map_details(&self, details: MovieDetails) -> MovieDetail {
        let credits = details.credits.unwrap_or_default();
        let videos = details.videos.unwrap_or_default();

        MovieDetail {
            id: details.id,
            title: details.title.unwrap_or_default(),
            tagline: details.tagline.filter(|t| !t.trim().is_empty()),
            overview: details.overview.unwrap_or_default(),
            release_date: details.release_date.filter(|d| !d.is_empty()),
            runtime_minutes: details.runtime,
            genres: details
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| Genre { name: g.name })
                .collect(),
            vote_average: details.vote_average.unwrap_or_default(),
            poster_url: self.poster_url(details.poster_path.as_deref(), DETAIL_POSTER_PLACEHOLDER),
            backdrop_url: self.backdrop_url(details.backdrop_path.as_deref()),
            director: Self::director(&credits),
            cast_names: Self::top_cast(&credits),
            trailer_url: Self::official_trailer_url(&videos),
        }
    }

    /// First crew entry whose job is exactly "Director".
    pub fn director(credits: &Credits) -> String {
        credits
            .crew
            .iter()
            .flatten()
            .find(|member| member.job.as_deref() == Some("Director"))
            .map(|member| member.name.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// First five cast names in API order. TMDB's array order is billing order.
    pub fn top_cast(credits: &Credits) -> Vec<String> {
        credits
            .cast
            .iter()
            .flatten()
            .take(TOP_CAST_LIMIT)
            .map(|member| member.name.clone())
            .collect()
    }

    /// First official YouTube trailer.
    pub fn official_trailer_url(videos: &Videos) -> Option<String> {
        videos
            .results
            .iter()
            .flatten()
            .find(|video| {
                video.site.as_deref() == Some("YouTube")
                    && video.r#type.as_deref() == Some("Trailer")
                    && video.official
            })
            .map(|video| format!("{}{}", YOUTUBE_WATCH_URL, video.key))
    }
}
