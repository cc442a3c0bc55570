//! GraphQL façade
//!
//! Thin resolvers over [`CatalogService`]; no entity rule lives here.
//! Queries are public. Mutations require an authenticated admin user,
//! decoded from the bearer token into the request context by the route
//! layer (anonymous when the header is missing or invalid).

pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{Context, EmptySubscription, Error, Result as GqlResult, Schema};

use crate::auth::CurrentUser;
use crate::catalog::CatalogService;
use crate::utils::error::AppResult;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The catalog schema type
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the shared service layer attached
pub fn build_schema(catalog: CatalogService) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .finish()
}

/// Fetch the service layer from the resolver context
pub(crate) fn service<'a>(ctx: &Context<'a>) -> GqlResult<&'a CatalogService> {
    ctx.data::<CatalogService>()
}

/// Mutation guard: an authenticated user with the admin role
pub(crate) fn require_admin<'a>(ctx: &Context<'a>) -> GqlResult<&'a CurrentUser> {
    let user = ctx
        .data_opt::<CurrentUser>()
        .ok_or_else(|| Error::new("Authentication required"))?;
    if !user.is_admin() {
        return Err(Error::new("Admin access required"));
    }
    Ok(user)
}

/// Maps service errors onto GraphQL errors with the client-safe message
pub(crate) trait GqlResultExt<T> {
    fn gql(self) -> GqlResult<T>;
}

impl<T> GqlResultExt<T> for AppResult<T> {
    fn gql(self) -> GqlResult<T> {
        self.map_err(|e| Error::new(e.user_message()))
    }
}
