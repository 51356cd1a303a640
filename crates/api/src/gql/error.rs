use std::sync::Arc;

use infra::store::StoreError;

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
/// This enum gives us:
///   - `From<StoreError>` — logs the store detail, shows a sanitized message to clients
///   - `From<Arc<StoreError>>` — sanitized message only; loaders log once per batch
///   - `From<uuid::Error>` — shows "Invalid ID: …"
#[derive(Debug)]
pub enum GqlError {
    Store(Arc<StoreError>),
    Uuid(uuid::Error),
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Store(_) => write!(f, "Internal database error"),
            GqlError::Uuid(e) => write!(f, "Invalid ID: {e}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<StoreError> for GqlError {
    fn from(e: StoreError) -> Self {
        // Log the real error server-side; clients only see the generic message
        tracing::error!("Store error: {e}");
        GqlError::Store(Arc::new(e))
    }
}

impl From<Arc<StoreError>> for GqlError {
    fn from(e: Arc<StoreError>) -> Self {
        GqlError::Store(e)
    }
}

impl From<uuid::Error> for GqlError {
    fn from(e: uuid::Error) -> Self {
        GqlError::Uuid(e)
    }
}
