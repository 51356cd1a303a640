use async_trait::async_trait;
use uuid::Uuid;

use super::{CatalogStore, StoreResult};
use crate::db::Db;
use crate::models::{DirectorRow, MovieRow};
use crate::repos::{directors, movies, DirectorData, MovieData};

/// Postgres-backed store; a thin delegation to `repos`.
#[derive(Clone)]
pub struct PgStore {
    db: Db,
}

impl PgStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.db).await?;
        Ok(())
    }

    async fn list_directors(&self) -> StoreResult<Vec<DirectorRow>> {
        Ok(directors::list(&self.db).await?)
    }

    async fn get_director(&self, id: Uuid) -> StoreResult<Option<DirectorRow>> {
        Ok(directors::get_by_id(&self.db, id).await?)
    }

    async fn get_directors_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<DirectorRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(directors::list_by_ids(&self.db, ids).await?)
    }

    async fn create_director(&self, data: DirectorData) -> StoreResult<DirectorRow> {
        Ok(directors::create(&self.db, data).await?)
    }

    async fn update_director(
        &self,
        id: Uuid,
        data: DirectorData,
    ) -> StoreResult<Option<DirectorRow>> {
        Ok(directors::update(&self.db, id, data).await?)
    }

    async fn delete_director(&self, id: Uuid) -> StoreResult<Option<DirectorRow>> {
        Ok(directors::delete(&self.db, id).await?)
    }

    async fn list_movies(&self) -> StoreResult<Vec<MovieRow>> {
        Ok(movies::list(&self.db).await?)
    }

    async fn get_movie(&self, id: Uuid) -> StoreResult<Option<MovieRow>> {
        Ok(movies::get_by_id(&self.db, id).await?)
    }

    async fn list_movies_by_director_ids(
        &self,
        director_ids: &[Uuid],
    ) -> StoreResult<Vec<MovieRow>> {
        if director_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(movies::list_by_director_ids(&self.db, director_ids).await?)
    }

    async fn create_movie(&self, data: MovieData) -> StoreResult<MovieRow> {
        Ok(movies::create(&self.db, data).await?)
    }

    async fn update_movie(&self, id: Uuid, data: MovieData) -> StoreResult<Option<MovieRow>> {
        Ok(movies::update(&self.db, id, data).await?)
    }

    async fn delete_movie(&self, id: Uuid) -> StoreResult<Option<MovieRow>> {
        Ok(movies::delete(&self.db, id).await?)
    }
}
