//! CRUD flow tests: create, read, filter, update, delete.

use serde_json::{json, Value};

use crate::support::{create_movie, start_server, valid_movie};

#[tokio::test]
async fn root_greets() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(&base).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "hola mundo" }));
}

#[tokio::test]
async fn create_returns_201_with_a_fresh_unique_id() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let first = create_movie(&client, &base, &valid_movie()).await;
    let second = create_movie(&client, &base, &valid_movie()).await;

    let first_id = first["id"].as_str().unwrap();
    let second_id = second["id"].as_str().unwrap();
    assert!(!first_id.is_empty());
    assert!(!second_id.is_empty());
    assert_ne!(first_id, second_id);

    // Everything but the id comes straight from the payload.
    assert_eq!(first["title"], "Blade Runner");
    assert_eq!(first["genre"], json!(["Sci-Fi", "Thriller"]));
}

#[tokio::test]
async fn get_by_id_returns_the_exact_created_object() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let created = create_movie(&client, &base, &valid_movie()).await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .get(format!("{base}/movies/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/movies/does-not-exist"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Movie not found" }));
}

#[tokio::test]
async fn list_returns_the_collection_in_insertion_order() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let mut payload = valid_movie();
    payload["title"] = json!("First");
    create_movie(&client, &base, &payload).await;
    payload["title"] = json!("Second");
    create_movie(&client, &base, &payload).await;

    let resp = client.get(format!("{base}/movies")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let movies: Vec<Value> = resp.json().await.unwrap();
    let titles: Vec<&str> = movies.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn list_filters_by_genre_case_insensitively() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let mut drama = valid_movie();
    drama["title"] = json!("Heat");
    drama["genre"] = json!(["Drama", "Crime"]);
    create_movie(&client, &base, &drama).await;

    let mut comedy = valid_movie();
    comedy["title"] = json!("Airplane!");
    comedy["genre"] = json!(["Comedy"]);
    create_movie(&client, &base, &comedy).await;

    let resp = client
        .get(format!("{base}/movies?genre=drama"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let movies: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Heat");
}

#[tokio::test]
async fn patch_updates_only_the_present_fields() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let created = create_movie(&client, &base, &valid_movie()).await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .patch(format!("{base}/movies/{id}"))
        .json(&json!({ "rate": 9 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["rate"], json!(9.0));
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["title"], created["title"]);
    assert_eq!(updated["year"], created["year"]);
    assert_eq!(updated["director"], created["director"]);
    assert_eq!(updated["duration"], created["duration"]);
    assert_eq!(updated["poster"], created["poster"]);
    assert_eq!(updated["genre"], created["genre"]);

    // The merge persisted.
    let fetched: Value = client
        .get(format!("{base}/movies/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn patch_unknown_id_returns_404() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .patch(format!("{base}/movies/does-not-exist"))
        .json(&json!({ "rate": 9 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "The movie was not found." }));
}

#[tokio::test]
async fn patch_invalid_body_returns_400_before_the_existence_check() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    // The id does not exist, but validation runs first, so this is a 400.
    let resp = client
        .patch(format!("{base}/movies/does-not-exist"))
        .json(&json!({ "year": 1800 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Historical wording: the invalid-body message reuses the not-found text.
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "The movie was not found." }));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let created = create_movie(&client, &base, &valid_movie()).await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .delete(format!("{base}/movies/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Movie deleted" }));

    let resp = client
        .get(format!("{base}/movies/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_twice_returns_404_the_second_time() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let created = create_movie(&client, &base, &valid_movie()).await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .delete(format!("{base}/movies/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .delete(format!("{base}/movies/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "The movie was not found." }));
}
