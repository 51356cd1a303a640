use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use crate::gql::common::helpers::{null_on_error, parse_id};
use crate::gql::domains::movies::Movie;
use crate::gql::error::GqlError;
use crate::gql::loaders::MoviesByDirectorLoader;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Director {
    pub id: ID,
    pub name: String,
    pub age: i32,
}

impl From<infra::models::DirectorRow> for Director {
    fn from(row: infra::models::DirectorRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            age: row.age,
        }
    }
}

#[ComplexObject]
impl Director {
    /// Movies whose `directorId` points at this director. Looked up on demand,
    /// never stored on the director itself.
    async fn movies(&self, ctx: &Context<'_>) -> Result<Option<Vec<Movie>>> {
        let loader = ctx.data::<DataLoader<MoviesByDirectorLoader>>()?;

        let rows = async {
            let director_id = parse_id(&self.id)?;
            let rows = loader
                .load_one(director_id)
                .await
                .map_err(GqlError::from)?;
            Ok::<_, GqlError>(Some(rows.unwrap_or_default()))
        }
        .await;

        Ok(null_on_error(ctx, rows).map(|rows| rows.into_iter().map(Movie::from).collect()))
    }
}
