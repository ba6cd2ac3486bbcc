use async_graphql::Context;
use database::{Db, Listing, Store, User};
use tracing::{debug, instrument};

/// The session token presented with a request, if any
///
/// Blank tokens are treated as missing since logged out clients still send the header.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SessionToken(Option<String>);

impl SessionToken {
    pub fn new(token: Option<&str>) -> Self {
        let token = token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from);

        Self(token)
    }

    /// The raw token
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// What the viewer is allowed to see of a listing
///
/// Computed once per request and carried alongside the listing, it is never stored.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Access {
    /// Only the public details
    #[default]
    Public,
    /// The viewer hosts the listing and can see its bookings
    Owner,
}

impl Access {
    /// Determine the access a viewer has to a listing
    pub fn for_viewer(viewer: Option<&User>, listing: &Listing) -> Access {
        match viewer {
            Some(viewer) if viewer.id == listing.host => Access::Owner,
            _ => Access::Public,
        }
    }

    pub fn is_owner(self) -> bool {
        self == Access::Owner
    }
}

/// Find the user making the request
///
/// A missing or unknown token is not an error, there just is no viewer.
#[instrument(name = "authorize", skip_all)]
pub async fn authorize(db: &dyn Store, token: &SessionToken) -> database::Result<Option<User>> {
    let Some(token) = token.as_str() else {
        debug!("no session token provided");
        return Ok(None);
    };

    let viewer = db.user_by_token(token).await?;
    match &viewer {
        Some(viewer) => debug!(%viewer.id, "found viewer"),
        None => debug!("session token does not belong to any user"),
    }

    Ok(viewer)
}

/// Find the user making the current GraphQL request
pub(crate) async fn viewer(ctx: &Context<'_>) -> database::Result<Option<User>> {
    let db = ctx.data_unchecked::<Db>();
    match ctx.data_opt::<SessionToken>() {
        Some(token) => authorize(db.as_ref(), token).await,
        None => Ok(None),
    }
}
