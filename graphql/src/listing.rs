use crate::{
    authorization::Access,
    errors::{HostNotFound, InvalidLimit, QueryResultExt},
};
use async_graphql::{Context, Object, Result, SimpleObject, ID};
use database::{loaders::UserLoader, Booking, Db, Listing, Page, Paginated, User};
use tracing::{debug, instrument};

/// A listing along with what the current viewer may see of it
pub(crate) struct ListingNode {
    listing: Listing,
    access: Access,
}

impl ListingNode {
    pub fn new(listing: Listing, access: Access) -> Self {
        Self { listing, access }
    }

    /// Expose a listing with only its public details
    pub fn public(listing: Listing) -> Self {
        Self::new(listing, Access::Public)
    }
}

#[Object(name = "Listing")]
impl ListingNode {
    /// A unique ID
    async fn id(&self) -> ID {
        ID::from(self.listing.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.listing.title
    }

    /// The URL of the cover image
    async fn image(&self) -> &str {
        &self.listing.image
    }

    async fn address(&self) -> &str {
        &self.listing.address
    }

    /// The price per night, in cents
    async fn price(&self) -> i32 {
        self.listing.price
    }

    async fn num_of_guests(&self) -> i32 {
        self.listing.num_of_guests
    }

    async fn num_of_beds(&self) -> i32 {
        self.listing.num_of_beds
    }

    async fn num_of_baths(&self) -> i32 {
        self.listing.num_of_baths
    }

    async fn rating(&self) -> f64 {
        self.listing.rating
    }

    /// The user hosting the listing
    #[instrument(name = "Listing::host", skip_all, fields(%self.listing.id))]
    async fn host(&self, ctx: &Context<'_>) -> Result<User> {
        let loader = ctx.data_unchecked::<UserLoader>();
        let host = loader
            .load_one(self.listing.host.clone())
            .await
            .failed_to_query("listing host")?
            .ok_or(HostNotFound)?;

        Ok(host)
    }

    /// The dates the listing is booked, as a JSON object keyed by year, month, then day
    async fn bookings_index(&self) -> Result<String> {
        let index = serde_json::to_string(&self.listing.bookings_index)?;
        Ok(index)
    }

    /// The bookings made against the listing, only visible to its host
    #[instrument(name = "Listing::bookings", skip(self, ctx), fields(%self.listing.id))]
    async fn bookings(
        &self,
        ctx: &Context<'_>,
        limit: i32,
        page: i32,
    ) -> Result<Option<Bookings>> {
        // non-hosts get null whatever the arguments are, so they're only checked afterwards
        if !self.access.is_owner() {
            debug!("viewer does not host the listing");
            return Ok(None);
        }

        if limit < 1 {
            return Err(InvalidLimit.into());
        }

        let db = ctx.data_unchecked::<Db>();
        let bookings = db
            .bookings(&self.listing.bookings, Page::new(limit, page))
            .await
            .failed_to_query("listing bookings")?;

        Ok(Some(bookings.into()))
    }
}

/// A page of listings
#[derive(SimpleObject)]
pub(crate) struct Listings {
    /// The number of listings across all pages
    total: i64,
    /// The listings in the page
    result: Vec<ListingNode>,
}

impl From<Paginated<Listing>> for Listings {
    fn from(page: Paginated<Listing>) -> Self {
        let page = page.map(ListingNode::public);
        Self {
            total: page.total,
            result: page.result,
        }
    }
}

/// A page of bookings
#[derive(SimpleObject)]
pub(crate) struct Bookings {
    /// The number of bookings across all pages
    total: i64,
    /// The bookings in the page
    result: Vec<Booking>,
}

impl From<Paginated<Booking>> for Bookings {
    fn from(Paginated { total, result }: Paginated<Booking>) -> Self {
        Self { total, result }
    }
}
