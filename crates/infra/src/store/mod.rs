//! The store seam the resolver layer talks to.
//!
//! Resolvers never reach for a pool directly: they receive a
//! `SharedStore` through the request context, so the backing store can be
//! Postgres in production and an in-process store in development and tests.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{DirectorRow, MovieRow};
use crate::repos::{DirectorData, MovieData};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub type SharedStore = Arc<dyn CatalogStore>;

/// Director and movie collections.
///
/// Every method is one independent round-trip. Lookups that miss return
/// `Ok(None)`; only genuine store failures are errors.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Cheap liveness probe.
    async fn ping(&self) -> StoreResult<()>;

    async fn list_directors(&self) -> StoreResult<Vec<DirectorRow>>;

    async fn get_director(&self, id: Uuid) -> StoreResult<Option<DirectorRow>>;

    /// Batch lookup. Unknown ids are simply absent from the result.
    async fn get_directors_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<DirectorRow>>;

    async fn create_director(&self, data: DirectorData) -> StoreResult<DirectorRow>;

    async fn update_director(
        &self,
        id: Uuid,
        data: DirectorData,
    ) -> StoreResult<Option<DirectorRow>>;

    async fn delete_director(&self, id: Uuid) -> StoreResult<Option<DirectorRow>>;

    async fn list_movies(&self) -> StoreResult<Vec<MovieRow>>;

    async fn get_movie(&self, id: Uuid) -> StoreResult<Option<MovieRow>>;

    /// Movies referencing any of `director_ids`, in creation order.
    async fn list_movies_by_director_ids(
        &self,
        director_ids: &[Uuid],
    ) -> StoreResult<Vec<MovieRow>>;

    async fn create_movie(&self, data: MovieData) -> StoreResult<MovieRow>;

    async fn update_movie(&self, id: Uuid, data: MovieData) -> StoreResult<Option<MovieRow>>;

    async fn delete_movie(&self, id: Uuid) -> StoreResult<Option<MovieRow>>;
}
