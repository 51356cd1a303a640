use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::DirectorRow;

/// Every mutable director field. Updates replace all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorData {
    pub name: String,
    pub age: i32,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<DirectorRow>> {
    sqlx::query_as::<_, DirectorRow>(
        r#"
        SELECT id, name, age, created_at, updated_at
        FROM directors
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<DirectorRow>> {
    sqlx::query_as::<_, DirectorRow>(
        r#"
        SELECT id, name, age, created_at, updated_at
        FROM directors
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[Uuid],
) -> SqlxResult<Vec<DirectorRow>> {
    sqlx::query_as::<_, DirectorRow>(
        r#"
        SELECT id, name, age, created_at, updated_at
        FROM directors
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: DirectorData,
) -> SqlxResult<DirectorRow> {
    sqlx::query_as::<_, DirectorRow>(
        r#"
        INSERT INTO directors (id, name, age)
        VALUES ($1, $2, $3)
        RETURNING id, name, age, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&data.name)
    .bind(data.age)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: DirectorData,
) -> SqlxResult<Option<DirectorRow>> {
    sqlx::query_as::<_, DirectorRow>(
        r#"
        UPDATE directors
        SET name = $2,
            age = $3,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, age, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&data.name)
    .bind(data.age)
    .fetch_optional(executor)
    .await
}

/// Remove a director. Movies pointing at it are left as they are.
pub async fn delete<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<DirectorRow>> {
    sqlx::query_as::<_, DirectorRow>(
        r#"
        DELETE FROM directors
        WHERE id = $1
        RETURNING id, name, age, created_at, updated_at
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}
