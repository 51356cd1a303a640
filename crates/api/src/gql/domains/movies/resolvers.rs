use async_graphql::{Context, Object, Result, ID};

use crate::gql::common::helpers::{null_on_error, parse_id, parse_optional_id};
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::MovieData;

use super::types::Movie;

#[derive(Default)]
pub struct MovieQuery;

#[Object]
impl MovieQuery {
    /// Get a movie by id. Null if no movie has that id.
    async fn movie(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Movie>> {
        let state = ctx.data::<AppState>()?;

        let row = async {
            let movie_id = parse_id(&id)?;
            Ok::<_, GqlError>(state.store.get_movie(movie_id).await?)
        }
        .await;

        Ok(null_on_error(ctx, row).map(Movie::from))
    }

    async fn movies(&self, ctx: &Context<'_>) -> Result<Option<Vec<Movie>>> {
        let state = ctx.data::<AppState>()?;

        let rows = state
            .store
            .list_movies()
            .await
            .map(Some)
            .map_err(GqlError::from);

        Ok(null_on_error(ctx, rows).map(|rows| rows.into_iter().map(Movie::from).collect()))
    }
}

#[derive(Default)]
pub struct MovieMutation;

#[Object]
impl MovieMutation {
    /// `directorId` is stored as given; it is not checked against existing directors.
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        director_id: Option<ID>,
        watched: bool,
        rate: Option<i32>,
    ) -> Result<Option<Movie>> {
        let state = ctx.data::<AppState>()?;

        let row = async {
            let data = MovieData {
                name,
                genre,
                watched,
                rate,
                director_id: parse_optional_id(director_id.as_ref())?,
            };
            Ok::<_, GqlError>(Some(state.store.create_movie(data).await?))
        }
        .await;

        let row = null_on_error(ctx, row);
        if let Some(row) = &row {
            tracing::info!(movie_id = %row.id, "movie added");
        }

        Ok(row.map(Movie::from))
    }

    /// Replace every field of an existing movie. Omitting `directorId` or
    /// `rate` clears them. Null if not found.
    #[allow(clippy::too_many_arguments)]
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        genre: String,
        director_id: Option<ID>,
        watched: bool,
        rate: Option<i32>,
    ) -> Result<Option<Movie>> {
        let state = ctx.data::<AppState>()?;

        let row = async {
            let movie_id = parse_id(&id)?;
            let data = MovieData {
                name,
                genre,
                watched,
                rate,
                director_id: parse_optional_id(director_id.as_ref())?,
            };
            Ok::<_, GqlError>(state.store.update_movie(movie_id, data).await?)
        }
        .await;

        let row = null_on_error(ctx, row);
        if let Some(row) = &row {
            tracing::info!(movie_id = %row.id, "movie updated");
        }

        Ok(row.map(Movie::from))
    }

    async fn delete_movie(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Movie>> {
        let state = ctx.data::<AppState>()?;

        let row = async {
            let movie_id = parse_id(&id)?;
            Ok::<_, GqlError>(state.store.delete_movie(movie_id).await?)
        }
        .await;

        let row = null_on_error(ctx, row);
        if let Some(row) = &row {
            tracing::info!(movie_id = %row.id, "movie deleted");
        }

        Ok(row.map(Movie::from))
    }
}
