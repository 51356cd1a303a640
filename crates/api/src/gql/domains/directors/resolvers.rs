use async_graphql::{Context, Object, Result, ID};

use crate::gql::common::helpers::{null_on_error, parse_id};
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::DirectorData;

use super::types::Director;

#[derive(Default)]
pub struct DirectorQuery;

#[Object]
impl DirectorQuery {
    /// Get a director by id. Null if no director has that id.
    async fn director(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Director>> {
        let state = ctx.data::<AppState>()?;

        let row = async {
            let director_id = parse_id(&id)?;
            Ok::<_, GqlError>(state.store.get_director(director_id).await?)
        }
        .await;

        Ok(null_on_error(ctx, row).map(Director::from))
    }

    async fn directors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Director>>> {
        let state = ctx.data::<AppState>()?;

        let rows = state
            .store
            .list_directors()
            .await
            .map(Some)
            .map_err(GqlError::from);

        Ok(null_on_error(ctx, rows)
            .map(|rows| rows.into_iter().map(Director::from).collect()))
    }
}

#[derive(Default)]
pub struct DirectorMutation;

#[Object]
impl DirectorMutation {
    async fn add_director(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
    ) -> Result<Option<Director>> {
        let state = ctx.data::<AppState>()?;

        let row = state
            .store
            .create_director(DirectorData { name, age })
            .await
            .map(Some)
            .map_err(GqlError::from);

        let row = null_on_error(ctx, row);
        if let Some(row) = &row {
            tracing::info!(director_id = %row.id, "director added");
        }

        Ok(row.map(Director::from))
    }

    /// Replace name and age of an existing director. Null if not found.
    async fn update_director(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        age: i32,
    ) -> Result<Option<Director>> {
        let state = ctx.data::<AppState>()?;

        let row = async {
            let director_id = parse_id(&id)?;
            Ok::<_, GqlError>(
                state
                    .store
                    .update_director(director_id, DirectorData { name, age })
                    .await?,
            )
        }
        .await;

        let row = null_on_error(ctx, row);
        if let Some(row) = &row {
            tracing::info!(director_id = %row.id, "director updated");
        }

        Ok(row.map(Director::from))
    }

    /// Delete a director and return it. Movies that reference it keep their
    /// `directorId`.
    async fn delete_director(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Director>> {
        let state = ctx.data::<AppState>()?;

        let row = async {
            let director_id = parse_id(&id)?;
            Ok::<_, GqlError>(state.store.delete_director(director_id).await?)
        }
        .await;

        let row = null_on_error(ctx, row);
        if let Some(row) = &row {
            tracing::info!(director_id = %row.id, "director deleted");
        }

        Ok(row.map(Director::from))
    }
}
