use async_graphql::MergedObject;

use crate::gql::domains::directors::DirectorMutation;
use crate::gql::domains::movies::MovieMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(DirectorMutation, MovieMutation);
