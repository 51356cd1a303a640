use async_graphql::dataloader::Loader;
use infra::{models::DirectorRow, models::MovieRow, store::SharedStore, store::StoreError};
use std::{collections::HashMap, future::Future, sync::Arc};
use uuid::Uuid;

/// A failed batch is shared by every key in it; log it here, once.
fn log_batch_failure(e: StoreError) -> Arc<StoreError> {
    tracing::error!("Store error in batch load: {e}");
    Arc::new(e)
}

// DirectorLoader - batch load directors by ID
#[derive(Clone)]
pub struct DirectorLoader {
    store: SharedStore,
}

impl DirectorLoader {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Loader<Uuid> for DirectorLoader {
    type Value = DirectorRow;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store
                .get_directors_by_ids(&ids)
                .await
                .map_err(log_batch_failure)?;

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// MoviesByDirectorLoader - batch load each director's movies by director ID.
// Every requested key gets an entry so a director without movies resolves to [].
#[derive(Clone)]
pub struct MoviesByDirectorLoader {
    store: SharedStore,
}

impl MoviesByDirectorLoader {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Loader<Uuid> for MoviesByDirectorLoader {
    type Value = Vec<MovieRow>;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            let mut grouped: HashMap<Uuid, Vec<MovieRow>> =
                ids.iter().map(|id| (*id, Vec::new())).collect();

            if ids.is_empty() {
                return Ok(grouped);
            }

            let rows = store
                .list_movies_by_director_ids(&ids)
                .await
                .map_err(log_batch_failure)?;

            for row in rows {
                if let Some(director_id) = row.director_id {
                    grouped.entry(director_id).or_default().push(row);
                }
            }

            Ok(grouped)
        }
    }
}
