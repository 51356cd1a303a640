use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use crate::gql::common::helpers::{null_on_error, parse_id};
use crate::gql::domains::directors::Director;
use crate::gql::error::GqlError;
use crate::gql::loaders::DirectorLoader;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Movie {
    pub id: ID,
    pub name: String,
    pub genre: String,
    pub watched: bool,
    pub rate: Option<i32>,
    pub director_id: Option<ID>,
}

impl From<infra::models::MovieRow> for Movie {
    fn from(row: infra::models::MovieRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            genre: row.genre,
            watched: row.watched,
            rate: row.rate,
            director_id: row.director_id.map(Into::into),
        }
    }
}

#[ComplexObject]
impl Movie {
    /// Null when `directorId` is unset or the director no longer exists.
    async fn director(&self, ctx: &Context<'_>) -> Result<Option<Director>> {
        let Some(director_id) = &self.director_id else {
            return Ok(None);
        };
        let loader = ctx.data::<DataLoader<DirectorLoader>>()?;

        let row = async {
            let director_id = parse_id(director_id)?;
            loader
                .load_one(director_id)
                .await
                .map_err(GqlError::from)
        }
        .await;

        Ok(null_on_error(ctx, row).map(Director::from))
    }
}
