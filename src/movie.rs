//! The movie record and its genre enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of genres a movie may carry.
///
/// Serialized exactly as written here, including the hyphen in `Sci-Fi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Crime,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    /// All genre values, in declaration order.
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Crime,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
    ];

    /// The canonical serialized name of this genre.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Crime => "Crime",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
        }
    }

    /// Case-insensitive match against the canonical name.
    ///
    /// Used by the `?genre=` query filter, where clients may send any casing.
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single movie record.
///
/// `id` is server-generated on creation and never changes; every other field
/// is constrained by the schema in [`crate::schema`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: u32,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

impl Movie {
    /// True if any of this movie's genres matches `name`, case-insensitively.
    pub fn has_genre(&self, name: &str) -> bool {
        self.genre.iter().any(|g| g.matches(name))
    }
}

/// A fully validated creation payload — every field except `id`.
///
/// Produced only by [`crate::schema::validate`]; the handler attaches a fresh
/// id to turn it into a [`Movie`].
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: u32,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

impl MovieDraft {
    /// Materialize the draft into a record with the given identifier.
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            rate: self.rate,
            poster: self.poster,
            genre: self.genre,
        }
    }
}

/// A validated partial-update payload — any subset of the draft fields.
///
/// Produced only by [`crate::schema::validate_partial`]. Absent fields leave
/// the existing record untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub rate: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    /// Overwrite the fields present in this patch, leaving the rest as-is.
    pub fn apply(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(director) = self.director {
            movie.director = director;
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(rate) = self.rate {
            movie.rate = rate;
        }
        if let Some(poster) = self.poster {
            movie.poster = poster;
        }
        if let Some(genre) = self.genre {
            movie.genre = genre;
        }
    }
}
