//! HTTP surface — maps method + path to collection operations.
//!
//! Uses axum for routing. The pipeline per request is: origin gate →
//! route match → schema validation (when a body is present) → store
//! operation → JSON response.
//!
//! ## Routes
//!
//! - `GET /` — greeting.
//! - `GET /movies` — full collection, or filtered by the `genre` query param.
//! - `GET /movies/:id` — one record, 404 on a miss.
//! - `POST /movies` — full validation, fresh id, 201 with the created record.
//! - `PATCH /movies/:id` — partial validation first, then existence check.
//! - `DELETE /movies/:id` — 200 with a confirmation, 404 on a miss.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ApiError, MOVIE_NOT_FOUND, THE_MOVIE_WAS_NOT_FOUND};
use crate::movie::Movie;
use crate::origin::{self, OriginGate};
use crate::schema;
use crate::store::MovieStore;

/// Build the axum `Router` serving the movie collection.
///
/// The gate and the store are injected so tests can supply their own
/// allow-list and pre-populated collection.
pub fn router(store: MovieStore, gate: OriginGate) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/movies", get(list_handler).post(create_handler))
        .route(
            "/movies/:id",
            get(get_handler).patch(update_handler).delete(delete_handler),
        )
        .layer(origin::cors_layer(&gate))
        // Outermost layer, so disallowed origins never reach a handler.
        .layer(middleware::from_fn_with_state(gate, origin::enforce))
        .with_state(store)
}

/// Serve the collection over HTTP on the configured port.
pub async fn serve(config: Config) -> Result<(), std::io::Error> {
    let store = MovieStore::new();
    let gate = OriginGate::new(config.allowed_origins);
    let app = router(store, gate);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on http://localhost:{}", config.port);
    axum::serve(listener, app).await
}

/// `GET /` — greeting.
async fn root_handler() -> impl IntoResponse {
    Json(json!({ "message": "hola mundo" }))
}

#[derive(Deserialize)]
struct ListParams {
    genre: Option<String>,
}

/// `GET /movies[?genre=name]` — the collection, optionally filtered by genre
/// (case-insensitive).
async fn list_handler(
    State(store): State<MovieStore>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = match params.genre {
        Some(genre) => store.list_by_genre(&genre)?,
        None => store.list()?,
    };
    Ok(Json(movies))
}

/// `GET /movies/:id` — one record.
async fn get_handler(
    State(store): State<MovieStore>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let movie = store
        .find_by_id(&id)?
        .ok_or(ApiError::NotFound(MOVIE_NOT_FOUND))?;
    Ok(Json(movie))
}

/// `POST /movies` — validate, mint an id, append.
async fn create_handler(
    State(store): State<MovieStore>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = schema::validate(&payload).map_err(ApiError::Validation)?;
    let movie = draft.into_movie(Uuid::new_v4().to_string());
    store.append(movie.clone())?;
    tracing::info!(id = %movie.id, title = %movie.title, "movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// `PATCH /movies/:id` — merge the validated fields into the stored record.
///
/// Validation runs before the existence check, and an invalid body answers
/// with the not-found wording. Both behaviors are long-standing parts of the
/// API contract.
async fn update_handler(
    State(store): State<MovieStore>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Movie>, ApiError> {
    let patch = schema::validate_partial(&payload).map_err(|_| ApiError::InvalidPatch)?;

    let mut movie = store
        .find_by_id(&id)?
        .ok_or(ApiError::NotFound(THE_MOVIE_WAS_NOT_FOUND))?;
    patch.apply(&mut movie);
    store.replace(&id, movie.clone())?;
    Ok(Json(movie))
}

/// `DELETE /movies/:id` — remove the record.
async fn delete_handler(
    State(store): State<MovieStore>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if store.remove_by_id(&id)? {
        Ok(Json(json!({ "message": "Movie deleted" })))
    } else {
        Err(ApiError::NotFound(THE_MOVIE_WAS_NOT_FOUND))
    }
}
