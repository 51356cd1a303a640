use std::sync::Arc;

use infra::store::{MemoryStore, SharedStore};

use crate::config::GraphqlConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    graphql: GraphqlConfig,
}

impl AppState {
    pub fn new(store: SharedStore, graphql: GraphqlConfig) -> Self {
        Self { store, graphql }
    }

    /// State over a fresh, empty in-process store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), GraphqlConfig::default())
    }

    pub fn graphql(&self) -> &GraphqlConfig {
        &self.graphql
    }
}
