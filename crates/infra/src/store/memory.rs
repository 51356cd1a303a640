use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{CatalogStore, StoreResult};
use crate::models::{DirectorRow, MovieRow};
use crate::repos::{DirectorData, MovieData};

#[derive(Default)]
struct Collections {
    directors: Vec<DirectorRow>,
    movies: Vec<MovieRow>,
}

/// In-process store. Collections keep insertion order, which is also the
/// listing order.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_directors(&self) -> StoreResult<Vec<DirectorRow>> {
        Ok(self.inner.read().directors.clone())
    }

    async fn get_director(&self, id: Uuid) -> StoreResult<Option<DirectorRow>> {
        Ok(self
            .inner
            .read()
            .directors
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn get_directors_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<DirectorRow>> {
        Ok(self
            .inner
            .read()
            .directors
            .iter()
            .filter(|d| ids.contains(&d.id))
            .cloned()
            .collect())
    }

    async fn create_director(&self, data: DirectorData) -> StoreResult<DirectorRow> {
        let now = Utc::now();
        let row = DirectorRow {
            id: Uuid::new_v4(),
            name: data.name,
            age: data.age,
            created_at: now,
            updated_at: now,
        };
        self.inner.write().directors.push(row.clone());
        tracing::debug!(director_id = %row.id, "memory store: director inserted");
        Ok(row)
    }

    async fn update_director(
        &self,
        id: Uuid,
        data: DirectorData,
    ) -> StoreResult<Option<DirectorRow>> {
        let mut inner = self.inner.write();
        let Some(row) = inner.directors.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        row.name = data.name;
        row.age = data.age;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_director(&self, id: Uuid) -> StoreResult<Option<DirectorRow>> {
        let mut inner = self.inner.write();
        let Some(idx) = inner.directors.iter().position(|d| d.id == id) else {
            return Ok(None);
        };
        Ok(Some(inner.directors.remove(idx)))
    }

    async fn list_movies(&self) -> StoreResult<Vec<MovieRow>> {
        Ok(self.inner.read().movies.clone())
    }

    async fn get_movie(&self, id: Uuid) -> StoreResult<Option<MovieRow>> {
        Ok(self
            .inner
            .read()
            .movies
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn list_movies_by_director_ids(
        &self,
        director_ids: &[Uuid],
    ) -> StoreResult<Vec<MovieRow>> {
        Ok(self
            .inner
            .read()
            .movies
            .iter()
            .filter(|m| m.director_id.is_some_and(|id| director_ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn create_movie(&self, data: MovieData) -> StoreResult<MovieRow> {
        let now = Utc::now();
        let row = MovieRow {
            id: Uuid::new_v4(),
            name: data.name,
            genre: data.genre,
            watched: data.watched,
            rate: data.rate,
            director_id: data.director_id,
            created_at: now,
            updated_at: now,
        };
        self.inner.write().movies.push(row.clone());
        tracing::debug!(movie_id = %row.id, "memory store: movie inserted");
        Ok(row)
    }

    async fn update_movie(&self, id: Uuid, data: MovieData) -> StoreResult<Option<MovieRow>> {
        let mut inner = self.inner.write();
        let Some(row) = inner.movies.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        row.name = data.name;
        row.genre = data.genre;
        row.watched = data.watched;
        row.rate = data.rate;
        row.director_id = data.director_id;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_movie(&self, id: Uuid) -> StoreResult<Option<MovieRow>> {
        let mut inner = self.inner.write();
        let Some(idx) = inner.movies.iter().position(|m| m.id == id) else {
            return Ok(None);
        };
        Ok(Some(inner.movies.remove(idx)))
    }
}
