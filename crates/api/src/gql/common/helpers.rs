use async_graphql::{Context, ID};
use uuid::Uuid;

use crate::gql::error::GqlError;

/// Parse a client-supplied identifier. A malformed id is a field error,
/// never a "not found".
pub fn parse_id(id: &ID) -> Result<Uuid, GqlError> {
    Ok(Uuid::parse_str(id.as_str())?)
}

pub fn parse_optional_id(id: Option<&ID>) -> Result<Option<Uuid>, GqlError> {
    id.map(parse_id).transpose()
}

/// Resolve a nullable field. On failure the error is recorded against this
/// field's path and the field itself comes back as `null`, so sibling fields
/// and the parent object stay in the response.
pub fn null_on_error<T>(ctx: &Context<'_>, result: Result<Option<T>, GqlError>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(err) => {
            let err = async_graphql::Error::from(err).into_server_error(ctx.item.pos);
            ctx.add_error(ctx.set_error_path(err));
            None
        }
    }
}
