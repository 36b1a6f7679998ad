/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use cinescope_lib::modules::catalog::{Genre, MovieDetail, MoviePage, MovieSummary};

pub const PLACEHOLDER: &str = "https://via.placeholder.com/200x300?text=No+Image";

pub fn summary(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        poster_url: PLACEHOLDER.to_string(),
        release_date: "1999-03-31".to_string(),
    }
}

pub struct PageFactory {
    titles: Vec<String>,
    page: u32,
    total_pages: u32,
    first_id: u64,
}

impl Default for PageFactory {
    fn default() -> Self {
        Self {
            titles: vec!["The Matrix".to_string()],
            page: 1,
            total_pages: 1,
            first_id: 603,
        }
    }
}

impl PageFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(mut self, titles: &[&str]) -> Self {
        self.titles = titles.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn page(mut self, page: u32, total_pages: u32) -> Self {
        self.page = page;
        self.total_pages = total_pages;
        self
    }

    pub fn first_id(mut self, id: u64) -> Self {
        self.first_id = id;
        self
    }

    pub fn build(self) -> MoviePage {
        let items: Vec<MovieSummary> = self
            .titles
            .iter()
            .enumerate()
            .map(|(i, title)| summary(self.first_id + i as u64, title))
            .collect();
        let total_results = (self.total_pages as u64) * 20;
        MoviePage::new(items, self.page, self.total_pages, total_results)
    }
}

pub struct DetailFactory {
    id: u64,
    title: String,
    director: String,
    cast: Vec<String>,
    trailer_url: Option<String>,
}

impl Default for DetailFactory {
    fn default() -> Self {
        Self {
            id: 603,
            title: "The Matrix".to_string(),
            director: "Lana Wachowski".to_string(),
            cast: vec!["Keanu Reeves".to_string(), "Carrie-Anne Moss".to_string()],
            trailer_url: None,
        }
    }
}

impl DetailFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn build(self) -> MovieDetail {
        MovieDetail {
            id: self.id,
            title: self.title,
            tagline: Some("Welcome to the Real World.".to_string()),
            overview: "Set in the 22nd century...".to_string(),
            release_date: Some("1999-03-31".to_string()),
            runtime_minutes: Some(136),
            genres: vec![Genre {
                name: "Action".to_string(),
            }],
            vote_average: 8.2,
            poster_url: "https://image.tmdb.org/t/p/w500/matrix.jpg".to_string(),
            backdrop_url: None,
            director: self.director,
            cast_names: self.cast,
            trailer_url: self.trailer_url,
        }
    }
}
