use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_OVERVIEW: &str = "No overview available.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

/// Full record for one movie, with credits and videos already flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: String,
    pub release_date: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub genres: Vec<Genre>,
    pub vote_average: f32,
    pub poster_url: String,
    /// `None` means the presentation layer should skip the backdrop block.
    pub backdrop_url: Option<String>,
    /// First credited director, or "N/A".
    pub director: String,
    /// Top-billed cast in TMDB order, at most five.
    pub cast_names: Vec<String>,
    pub trailer_url: Option<String>,
}

impl MovieDetail {
    pub fn cast_display(&self) -> String {
        join_or_na(self.cast_names.iter().map(String::as_str))
    }

    pub fn genres_display(&self) -> String {
        join_or_na(self.genres.iter().map(|g| g.name.as_str()))
    }

    /// "July 16, 2010" style date, or "N/A" when missing or unparseable.
    pub fn formatted_release_date(&self) -> String {
        self.release_date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn runtime_display(&self) -> String {
        match self.runtime_minutes {
            Some(minutes) if minutes > 0 => format!("{} minutes", minutes),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn rating_display(&self) -> String {
        if self.vote_average > 0.0 {
            format!("{:.1} / 10", self.vote_average)
        } else {
            NOT_AVAILABLE.to_string()
        }
    }

    pub fn overview_display(&self) -> &str {
        if self.overview.trim().is_empty() {
            NO_OVERVIEW
        } else {
            &self.overview
        }
    }
}

fn join_or_na<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let joined = parts.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}
