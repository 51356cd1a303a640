use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_add_movie_then_lookup_returns_same_fields() {
    let schema = setup_test_schema();
    let director_id = create_test_director(&schema, "Nolan", 53).await;

    let data = execute_ok(
        &schema,
        r#"
        mutation AddMovie($directorId: ID) {
            addMovie(name: "Tenet", genre: "Sci-Fi", directorId: $directorId, watched: true, rate: 8) {
                id name genre watched rate directorId
            }
        }
        "#,
        Some(json!({ "directorId": director_id })),
    )
    .await;
    let created = data["addMovie"].clone();
    let movie_id = created["id"].as_str().unwrap().to_string();

    let data = execute_ok(
        &schema,
        "query Movie($id: ID!) { movie(id: $id) { id name genre watched rate directorId } }",
        Some(json!({ "id": movie_id })),
    )
    .await;

    assert_eq!(data["movie"], created);
    assert_eq!(data["movie"]["directorId"], director_id.as_str());
    assert_eq!(data["movie"]["rate"], 8);
}

#[tokio::test]
async fn test_add_movie_optional_fields_default_to_null() {
    let schema = setup_test_schema();

    let data = execute_ok(
        &schema,
        r#"
        mutation {
            addMovie(name: "Playtime", genre: "Comedy", watched: false) {
                rate directorId director { id }
            }
        }
        "#,
        None,
    )
    .await;

    assert!(data["addMovie"]["rate"].is_null());
    assert!(data["addMovie"]["directorId"].is_null());
    assert!(data["addMovie"]["director"].is_null());
}

#[tokio::test]
async fn test_update_movie_fully_replaces_fields() {
    let schema = setup_test_schema();
    let director_id = create_test_director(&schema, "Nolan", 53).await;
    let movie_id = create_test_movie(&schema, "Tenet", Some(&director_id)).await;

    // directorId and rate are omitted, so they are cleared
    let data = execute_ok(
        &schema,
        r#"
        mutation Update($id: ID!) {
            updateMovie(id: $id, name: "Memento", genre: "Thriller", watched: true) {
                id name genre watched rate directorId
            }
        }
        "#,
        Some(json!({ "id": movie_id })),
    )
    .await;

    assert_eq!(
        data["updateMovie"],
        json!({
            "id": movie_id,
            "name": "Memento",
            "genre": "Thriller",
            "watched": true,
            "rate": null,
            "directorId": null,
        })
    );
}

#[tokio::test]
async fn test_update_movie_missing_required_argument_is_rejected() {
    let schema = setup_test_schema();
    let movie_id = create_test_movie(&schema, "Tenet", None).await;

    let response = execute_graphql(
        &schema,
        r#"
        mutation Update($id: ID!) {
            updateMovie(id: $id, name: "Memento", watched: true) { id }
        }
        "#,
        Some(async_graphql::Variables::from_json(json!({ "id": movie_id }))),
    )
    .await;

    assert!(!response.errors.is_empty(), "missing genre must be rejected");
    assert!(response.errors[0].message.contains("genre"));

    let data = execute_ok(
        &schema,
        "query Movie($id: ID!) { movie(id: $id) { name genre } }",
        Some(json!({ "id": movie_id })),
    )
    .await;
    assert_eq!(data["movie"]["name"], "Tenet");
    assert_eq!(data["movie"]["genre"], "Drama");
}

#[tokio::test]
async fn test_unknown_movie_is_null() {
    let schema = setup_test_schema();
    create_test_movie(&schema, "Tenet", None).await;

    let data = execute_ok(
        &schema,
        r#"query { movie(id: "7f9c24e5-2b0f-4a43-9d4f-2a51f3a8c001") { id } }"#,
        None,
    )
    .await;

    assert!(data.as_object().unwrap().contains_key("movie"));
    assert!(data["movie"].is_null());
}

#[tokio::test]
async fn test_update_unknown_movie_is_null() {
    let schema = setup_test_schema();

    let data = execute_ok(
        &schema,
        r#"
        mutation {
            updateMovie(
                id: "7f9c24e5-2b0f-4a43-9d4f-2a51f3a8c001",
                name: "Ghost",
                genre: "Horror",
                watched: false
            ) { id }
        }
        "#,
        None,
    )
    .await;

    assert!(data["updateMovie"].is_null());
}

#[tokio::test]
async fn test_delete_movie() {
    let schema = setup_test_schema();
    let movie_id = create_test_movie(&schema, "Tenet", None).await;

    let data = execute_ok(
        &schema,
        "mutation Delete($id: ID!) { deleteMovie(id: $id) { id name } }",
        Some(json!({ "id": movie_id })),
    )
    .await;
    assert_eq!(data["deleteMovie"]["id"], movie_id.as_str());
    assert_eq!(data["deleteMovie"]["name"], "Tenet");

    let data = execute_ok(&schema, "query { movies { id } }", None).await;
    assert_eq!(data["movies"], json!([]));
}

#[tokio::test]
async fn test_delete_unknown_movie_is_null() {
    let schema = setup_test_schema();
    let movie_id = create_test_movie(&schema, "Tenet", None).await;

    let data = execute_ok(
        &schema,
        r#"mutation { deleteMovie(id: "7f9c24e5-2b0f-4a43-9d4f-2a51f3a8c001") { id } }"#,
        None,
    )
    .await;
    assert!(data.as_object().unwrap().contains_key("deleteMovie"));
    assert!(data["deleteMovie"].is_null());

    let data = execute_ok(&schema, "query { movies { id } }", None).await;
    assert_eq!(data["movies"], json!([{ "id": movie_id }]));
}
