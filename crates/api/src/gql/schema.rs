use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::loaders::{DirectorLoader, MoviesByDirectorLoader};
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> CatalogSchema {
    let director_loader = DataLoader::new(DirectorLoader::new(state.store.clone()), tokio::spawn);
    let movies_loader = DataLoader::new(
        MoviesByDirectorLoader::new(state.store.clone()),
        tokio::spawn,
    );

    let introspection_enabled = state.graphql().introspection;

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state) // AppState is Clone; available in resolvers via ctx.data::<AppState>()
    .data(director_loader)
    .data(movies_loader)
    .limit_depth(15)
    .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
