use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::MovieRow;

/// Every mutable movie field. Updates replace all of them, so a `None` here
/// clears the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieData {
    pub name: String,
    pub genre: String,
    pub watched: bool,
    pub rate: Option<i32>,
    pub director_id: Option<Uuid>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<MovieRow>> {
    sqlx::query_as::<_, MovieRow>(
        r#"
        SELECT id, name, genre, watched, rate, director_id, created_at, updated_at
        FROM movies
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<MovieRow>> {
    sqlx::query_as::<_, MovieRow>(
        r#"
        SELECT id, name, genre, watched, rate, director_id, created_at, updated_at
        FROM movies
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// All movies whose `director_id` is one of `director_ids`.
pub async fn list_by_director_ids<'e>(
    executor: impl PgExecutor<'e>,
    director_ids: &[Uuid],
) -> SqlxResult<Vec<MovieRow>> {
    sqlx::query_as::<_, MovieRow>(
        r#"
        SELECT id, name, genre, watched, rate, director_id, created_at, updated_at
        FROM movies
        WHERE director_id = ANY($1::uuid[])
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(director_ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: MovieData) -> SqlxResult<MovieRow> {
    sqlx::query_as::<_, MovieRow>(
        r#"
        INSERT INTO movies (id, name, genre, watched, rate, director_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, genre, watched, rate, director_id, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&data.name)
    .bind(&data.genre)
    .bind(data.watched)
    .bind(data.rate)
    .bind(data.director_id)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: MovieData,
) -> SqlxResult<Option<MovieRow>> {
    sqlx::query_as::<_, MovieRow>(
        r#"
        UPDATE movies
        SET name = $2,
            genre = $3,
            watched = $4,
            rate = $5,
            director_id = $6,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, genre, watched, rate, director_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.genre)
    .bind(data.watched)
    .bind(data.rate)
    .bind(data.director_id)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<MovieRow>> {
    sqlx::query_as::<_, MovieRow>(
        r#"
        DELETE FROM movies
        WHERE id = $1
        RETURNING id, name, genre, watched, rate, director_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}
