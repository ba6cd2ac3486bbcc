use crate::{
    authorization,
    errors::{NotFound, QueryResultExt},
    viewer::Viewer,
};
use async_graphql::{Context, Object, Result, ID};
use database::{Db, User};
use tracing::instrument;

#[derive(Default)]
pub(crate) struct UserQuery;

#[Object]
impl UserQuery {
    /// Get a user by their ID
    #[instrument(name = "Query::user", skip(self, ctx))]
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        let db = ctx.data_unchecked::<Db>();
        let user = db
            .user(&id)
            .await
            .failed_to_query("user")?
            .ok_or(NotFound("user"))?;

        Ok(user)
    }

    /// The user making the request
    #[instrument(name = "Query::viewer", skip_all)]
    async fn viewer(&self, ctx: &Context<'_>) -> Result<Viewer> {
        let viewer = authorization::viewer(ctx).await.failed_to_query("viewer")?;
        Ok(viewer.into())
    }
}
