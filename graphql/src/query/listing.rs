use crate::{
    authorization::{self, Access},
    errors::{NotFound, QueryResultExt},
    listing::{ListingNode, Listings},
};
use async_graphql::{Context, Object, Result, ID};
use database::{Db, ListingsFilter, Page};
use tracing::{debug, instrument};

#[derive(Default)]
pub(crate) struct ListingQuery;

#[Object]
impl ListingQuery {
    /// Get a listing by it's ID
    ///
    /// The listing's bookings are only visible when the viewer hosts it.
    #[instrument(name = "Query::listing", skip(self, ctx))]
    async fn listing(&self, ctx: &Context<'_>, id: ID) -> Result<ListingNode> {
        // anything that isn't a listing ID can't match a listing
        let Ok(id) = id.parse::<i32>() else {
            return Err(NotFound("listing").into());
        };

        let db = ctx.data_unchecked::<Db>();
        let listing = db
            .listing(id)
            .await
            .failed_to_query("listing")?
            .ok_or(NotFound("listing"))?;

        let viewer = authorization::viewer(ctx)
            .await
            .failed_to_query("listing")?;
        let access = Access::for_viewer(viewer.as_ref(), &listing);
        debug!(?access);

        Ok(ListingNode::new(listing, access))
    }

    /// Get a page of listings, optionally ordered by price
    #[instrument(name = "Query::listings", skip(self, ctx))]
    async fn listings(
        &self,
        ctx: &Context<'_>,
        filter: Option<ListingsFilter>,
        #[graphql(validator(minimum = 1))] limit: i32,
        page: i32,
    ) -> Result<Listings> {
        let db = ctx.data_unchecked::<Db>();
        let listings = db
            .listings(filter, Page::new(limit, page))
            .await
            .failed_to_query("listings")?;

        debug!(total = listings.total, count = listings.result.len());
        Ok(listings.into())
    }
}
