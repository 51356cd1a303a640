use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use api::config::GraphqlConfig;
use api::gql::build_schema;
use api::AppState;
use async_trait::async_trait;
use infra::models::{DirectorRow, MovieRow};
use infra::repos::{DirectorData, MovieData};
use infra::store::{CatalogStore, MemoryStore, StoreError, StoreResult};
use serde_json::json;
use uuid::Uuid;

use crate::common::*;

/// Directors work; every movie operation fails as if the movies collection
/// were unreachable.
#[derive(Default)]
struct MoviesDown {
    inner: MemoryStore,
    batch_calls: AtomicUsize,
}

fn movies_down() -> StoreError {
    StoreError::Unavailable("movies collection unreachable".to_string())
}

#[async_trait]
impl CatalogStore for MoviesDown {
    async fn ping(&self) -> StoreResult<()> {
        self.inner.ping().await
    }

    async fn list_directors(&self) -> StoreResult<Vec<DirectorRow>> {
        self.inner.list_directors().await
    }

    async fn get_director(&self, id: Uuid) -> StoreResult<Option<DirectorRow>> {
        self.inner.get_director(id).await
    }

    async fn get_directors_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<DirectorRow>> {
        self.inner.get_directors_by_ids(ids).await
    }

    async fn create_director(&self, data: DirectorData) -> StoreResult<DirectorRow> {
        self.inner.create_director(data).await
    }

    async fn update_director(
        &self,
        id: Uuid,
        data: DirectorData,
    ) -> StoreResult<Option<DirectorRow>> {
        self.inner.update_director(id, data).await
    }

    async fn delete_director(&self, id: Uuid) -> StoreResult<Option<DirectorRow>> {
        self.inner.delete_director(id).await
    }

    async fn list_movies(&self) -> StoreResult<Vec<MovieRow>> {
        Err(movies_down())
    }

    async fn get_movie(&self, _id: Uuid) -> StoreResult<Option<MovieRow>> {
        Err(movies_down())
    }

    async fn list_movies_by_director_ids(
        &self,
        _director_ids: &[Uuid],
    ) -> StoreResult<Vec<MovieRow>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        Err(movies_down())
    }

    async fn create_movie(&self, _data: MovieData) -> StoreResult<MovieRow> {
        Err(movies_down())
    }

    async fn update_movie(&self, _id: Uuid, _data: MovieData) -> StoreResult<Option<MovieRow>> {
        Err(movies_down())
    }

    async fn delete_movie(&self, _id: Uuid) -> StoreResult<Option<MovieRow>> {
        Err(movies_down())
    }
}

fn schema_over(store: Arc<MoviesDown>) -> api::gql::CatalogSchema {
    build_schema(AppState::new(store, GraphqlConfig::default()))
}

fn movies_down_schema() -> api::gql::CatalogSchema {
    schema_over(Arc::new(MoviesDown::default()))
}

#[tokio::test]
async fn test_store_failure_only_nulls_the_failing_field() {
    let schema = movies_down_schema();
    create_test_director(&schema, "Nolan", 53).await;

    let response = execute_graphql(&schema, "query { directors { name } movies { id } }", None).await;

    assert_eq!(response.errors.len(), 1, "{:?}", response.errors);
    assert_eq!(response.errors[0].message, "Internal database error");
    let error = serde_json::to_value(&response.errors[0]).unwrap();
    assert_eq!(error["path"], json!(["movies"]));

    let data = response.data.into_json().unwrap();
    assert_eq!(data["directors"], json!([{ "name": "Nolan" }]));
    assert!(data.as_object().unwrap().contains_key("movies"));
    assert!(data["movies"].is_null());
}

#[tokio::test]
async fn test_nested_store_failure_keeps_parent_fields() {
    let store = Arc::new(MoviesDown::default());
    let schema = schema_over(store.clone());
    create_test_director(&schema, "Nolan", 53).await;
    create_test_director(&schema, "Varda", 90).await;

    let response = execute_graphql(&schema, "query { directors { name movies { id } } }", None).await;

    assert!(response
        .errors
        .iter()
        .all(|e| e.message == "Internal database error"));
    let paths: Vec<_> = response
        .errors
        .iter()
        .map(|e| serde_json::to_value(e).unwrap()["path"].clone())
        .collect();
    assert_eq!(
        paths,
        vec![json!(["directors", 0, "movies"]), json!(["directors", 1, "movies"])]
    );
    // Both directors share one failed batch, so the store is hit (and the
    // failure logged) once.
    assert_eq!(store.batch_calls.load(Ordering::SeqCst), 1);

    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["directors"],
        json!([
            { "name": "Nolan", "movies": null },
            { "name": "Varda", "movies": null },
        ])
    );
}

#[tokio::test]
async fn test_root_and_nested_failures_return_null_fields() {
    let schema = movies_down_schema();
    create_test_director(&schema, "Nolan", 53).await;

    let response = execute_graphql(
        &schema,
        "query { directors { name movies { id } } movies { id } }",
        None,
    )
    .await;

    assert_eq!(response.errors.len(), 2, "{:?}", response.errors);
    let paths: Vec<_> = response
        .errors
        .iter()
        .map(|e| serde_json::to_value(e).unwrap()["path"].clone())
        .collect();
    assert!(paths.contains(&json!(["movies"])));
    assert!(paths.contains(&json!(["directors", 0, "movies"])));

    let data = response.data.into_json().unwrap();
    assert_eq!(
        data,
        json!({
            "directors": [{ "name": "Nolan", "movies": null }],
            "movies": null,
        })
    );
}

#[tokio::test]
async fn test_failed_mutation_does_not_crash_and_reports_error() {
    let schema = movies_down_schema();

    let response = execute_graphql(
        &schema,
        r#"
        mutation {
            addMovie(name: "Tenet", genre: "Sci-Fi", watched: true) { id }
            addDirector(name: "Nolan", age: 53) { name }
        }
        "#,
        None,
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    let data = response.data.into_json().unwrap();
    assert!(data.as_object().unwrap().contains_key("addMovie"));
    assert!(data["addMovie"].is_null());
    assert_eq!(data["addDirector"]["name"], "Nolan");
}

#[tokio::test]
async fn test_malformed_id_is_a_field_error() {
    let schema = setup_test_schema();
    create_test_director(&schema, "Nolan", 53).await;

    let response = execute_graphql(
        &schema,
        r#"query { movie(id: "not-a-uuid") { id } directors { name } }"#,
        None,
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.starts_with("Invalid ID"));

    let data = response.data.into_json().unwrap();
    assert_eq!(data["movie"], json!(null));
    assert!(data.as_object().unwrap().contains_key("movie"));
    assert_eq!(data["directors"], json!([{ "name": "Nolan" }]));
}

#[tokio::test]
async fn test_malformed_director_id_on_add_movie_is_rejected() {
    let schema = setup_test_schema();

    let response = execute_graphql(
        &schema,
        r#"mutation { addMovie(name: "Tenet", genre: "Sci-Fi", directorId: "D1", watched: true) { id } }"#,
        None,
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.starts_with("Invalid ID"));

    let data = execute_ok(&schema, "query { movies { id } }", None).await;
    assert_eq!(data["movies"], json!([]));
}

#[tokio::test]
async fn test_missing_required_argument_fails_validation() {
    let schema = setup_test_schema();

    let response = execute_graphql(&schema, r#"mutation { addDirector(name: "Nolan") { id } }"#, None).await;

    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("age"));
    assert!(response.data.into_json().unwrap().is_null());

    let data = execute_ok(&schema, "query { directors { id } }", None).await;
    assert_eq!(data["directors"], json!([]));
}

#[tokio::test]
async fn test_wrong_argument_type_fails_validation() {
    let schema = setup_test_schema();

    let response = execute_graphql(
        &schema,
        r#"mutation { addDirector(name: "Nolan", age: "fifty") { id } }"#,
        None,
    )
    .await;

    assert!(!response.errors.is_empty());
    assert!(response.data.into_json().unwrap().is_null());
}
