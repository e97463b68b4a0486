mod config;
mod error;
mod http;
mod movie;
mod origin;
mod schema;
mod store;

pub use config::{Config, ConfigError, DEFAULT_ALLOWED_ORIGINS, DEFAULT_PORT};
pub use error::{ApiError, MOVIE_NOT_FOUND, THE_MOVIE_WAS_NOT_FOUND};
pub use http::{router, serve};
pub use movie::{Genre, Movie, MovieDraft, MoviePatch};
pub use origin::{cors_layer, OriginGate};
pub use schema::{validate, validate_partial, FieldError};
pub use store::{MovieStore, StoreError};
