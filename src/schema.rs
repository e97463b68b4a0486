//! Schema validation for movie payloads.
//!
//! The movie schema is data: one static table of field specs, each carrying
//! the field name, its required-field message, an optional default, and a
//! constraint check. Full validation (creation) and partial validation
//! (update) walk the same table, so per-field error wording is identical in
//! both modes.
//!
//! Validation is pure — it reads a `serde_json::Value` and produces either a
//! typed payload or a list of [`FieldError`]s, touching nothing else.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::movie::{Genre, MovieDraft, MoviePatch};

/// One field that failed validation, with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A single entry in the movie schema table.
struct FieldSpec {
    name: &'static str,
    /// Message when the field is absent in full mode.
    required: &'static str,
    /// Value substituted when the field is absent in full mode.
    default: Option<fn() -> Value>,
    /// Constraint check for a present value. Err carries the message.
    check: fn(&Value) -> Result<(), String>,
}

/// The movie schema. Order matches the record's field order.
const MOVIE_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        required: "Movie title is required.",
        default: None,
        check: check_title,
    },
    FieldSpec {
        name: "year",
        required: "Movie year is required.",
        default: None,
        check: check_year,
    },
    FieldSpec {
        name: "director",
        required: "Movie director is required.",
        default: None,
        check: check_director,
    },
    FieldSpec {
        name: "duration",
        required: "Movie duration is required.",
        default: None,
        check: check_duration,
    },
    FieldSpec {
        name: "rate",
        required: "Movie rate is required.",
        default: Some(default_rate),
        check: check_rate,
    },
    FieldSpec {
        name: "poster",
        required: "Movie poster is required.",
        default: None,
        check: check_poster,
    },
    FieldSpec {
        name: "genre",
        required: "Movie genre is required.",
        default: None,
        check: check_genre,
    },
];

const YEAR_MIN: i64 = 1990;
const YEAR_MAX: i64 = 2024;

fn default_rate() -> Value {
    json!(5.0)
}

fn check_title(value: &Value) -> Result<(), String> {
    let Some(s) = value.as_str() else {
        return Err("Movie title must be a string".to_string());
    };
    if s.is_empty() {
        return Err("Movie title must not be empty".to_string());
    }
    Ok(())
}

fn check_year(value: &Value) -> Result<(), String> {
    match value.as_i64() {
        Some(y) if (YEAR_MIN..=YEAR_MAX).contains(&y) => Ok(()),
        _ => Err(format!(
            "Movie year must be an integer between {YEAR_MIN} and {YEAR_MAX}"
        )),
    }
}

fn check_director(value: &Value) -> Result<(), String> {
    if value.is_string() {
        Ok(())
    } else {
        Err("Movie director must be a string".to_string())
    }
}

fn check_duration(value: &Value) -> Result<(), String> {
    match value.as_u64() {
        Some(d) if d > 0 && d <= u32::MAX as u64 => Ok(()),
        _ => Err("Movie duration must be a positive integer".to_string()),
    }
}

fn check_rate(value: &Value) -> Result<(), String> {
    match value.as_f64() {
        Some(r) if (0.0..=10.0).contains(&r) => Ok(()),
        _ => Err("Movie rate must be a number between 0 and 10".to_string()),
    }
}

fn check_poster(value: &Value) -> Result<(), String> {
    let Some(s) = value.as_str() else {
        return Err("Poster must be a valid URL".to_string());
    };
    match url::Url::parse(s) {
        Ok(_) => Ok(()),
        Err(_) => Err("Poster must be a valid URL".to_string()),
    }
}

fn check_genre(value: &Value) -> Result<(), String> {
    const MESSAGE: &str = "Movie genre must be an array of enum Genre";
    let Some(items) = value.as_array() else {
        return Err(MESSAGE.to_string());
    };
    if items.is_empty() {
        return Err(MESSAGE.to_string());
    }
    for item in items {
        let is_genre = item
            .as_str()
            .is_some_and(|s| Genre::ALL.iter().any(|g| g.as_str() == s));
        if !is_genre {
            return Err(MESSAGE.to_string());
        }
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Every field must be present (or carry a default) and conform.
    Full,
    /// Only present fields are checked; absent fields pass trivially.
    Partial,
}

/// Walk the schema table over `payload`, collecting conforming fields and
/// every violation.
fn run(payload: &Value, mode: Mode) -> Result<Map<String, Value>, Vec<FieldError>> {
    let Some(object) = payload.as_object() else {
        return Err(vec![FieldError::new("body", "must be a JSON object")]);
    };

    let mut accepted = Map::new();
    let mut errors = Vec::new();

    for spec in MOVIE_SCHEMA {
        match object.get(spec.name) {
            Some(value) => match (spec.check)(value) {
                Ok(()) => {
                    accepted.insert(spec.name.to_string(), value.clone());
                }
                Err(message) => errors.push(FieldError::new(spec.name, message)),
            },
            None if mode == Mode::Partial => {}
            None => match spec.default {
                Some(default) => {
                    accepted.insert(spec.name.to_string(), default());
                }
                None => errors.push(FieldError::new(spec.name, spec.required)),
            },
        }
    }

    if errors.is_empty() {
        Ok(accepted)
    } else {
        Err(errors)
    }
}

/// Full validation for creation payloads.
///
/// Every schema field must be present and conforming, except `rate`, which
/// defaults to 5 when absent. Unknown fields are dropped.
pub fn validate(payload: &Value) -> Result<MovieDraft, Vec<FieldError>> {
    let accepted = run(payload, Mode::Full)?;
    serde_json::from_value(Value::Object(accepted))
        .map_err(|e| vec![FieldError::new("body", e.to_string())])
}

/// Partial validation for update payloads.
///
/// Present fields must conform; absent fields are left out of the patch.
/// Unknown fields are dropped.
pub fn validate_partial(payload: &Value) -> Result<MoviePatch, Vec<FieldError>> {
    let accepted = run(payload, Mode::Partial)?;
    serde_json::from_value(Value::Object(accepted))
        .map_err(|e| vec![FieldError::new("body", e.to_string())])
}
