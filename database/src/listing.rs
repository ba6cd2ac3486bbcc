use crate::{Page, Result};
use sqlx::{query_as, query_scalar, types::Json, Executor, FromRow, Postgres, QueryBuilder};
use std::collections::BTreeMap;
use tracing::instrument;

/// Which days of a listing are booked, keyed by year, then month, then day
pub type BookingsIndex = BTreeMap<String, BTreeMap<String, BTreeMap<String, bool>>>;

/// A place that can be booked
#[derive(Clone, Debug, FromRow, PartialEq)]
pub struct Listing {
    /// A unique ID
    pub id: i32,
    pub title: String,
    /// The URL of the cover image
    pub image: String,
    pub address: String,
    /// The price per night, in cents
    pub price: i32,
    pub num_of_guests: i32,
    pub num_of_beds: i32,
    pub num_of_baths: i32,
    pub rating: f64,
    /// The ID of the user hosting the listing
    pub host: String,
    /// The IDs of the bookings made against the listing, in the order they were made
    pub bookings: Vec<i32>,
    /// The dates the listing is occupied
    pub bookings_index: Json<BookingsIndex>,
}

/// How to order listings
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "graphql", derive(async_graphql::Enum))]
pub enum ListingsFilter {
    /// Cheapest first
    PriceLowToHigh,
    /// Most expensive first
    PriceHighToLow,
}

impl ListingsFilter {
    /// The `ORDER BY` clause for the filter
    ///
    /// Ties are broken by ID so the two price orderings are exact reverses of each other.
    pub(crate) fn order_by(filter: Option<ListingsFilter>) -> &'static str {
        match filter {
            None => "id ASC",
            Some(ListingsFilter::PriceLowToHigh) => "price ASC, id ASC",
            Some(ListingsFilter::PriceHighToLow) => "price DESC, id DESC",
        }
    }
}

impl Listing {
    /// Get a listing by it's ID
    #[instrument(name = "Listing::find", skip(db))]
    pub async fn find<'c, 'e, E>(id: i32, db: E) -> Result<Option<Listing>>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = Postgres>,
    {
        let listing = query_as::<_, Listing>("SELECT * FROM listings WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?;

        Ok(listing)
    }

    /// Get a page of listings in the requested order
    #[instrument(name = "Listing::page", skip(db))]
    pub async fn page<'c, 'e, E>(
        filter: Option<ListingsFilter>,
        page: Page,
        db: E,
    ) -> Result<Vec<Listing>>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = Postgres>,
    {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM listings ORDER BY ");
        builder.push(ListingsFilter::order_by(filter));
        builder.push(" LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let listings = builder.build_query_as::<Listing>().fetch_all(db).await?;
        Ok(listings)
    }

    /// Count all the listings
    #[instrument(name = "Listing::count", skip_all)]
    pub async fn count<'c, 'e, E>(db: E) -> Result<i64>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = Postgres>,
    {
        let count = query_scalar::<_, i64>("SELECT count(*) FROM listings")
            .fetch_one(db)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::ListingsFilter;

    #[test]
    fn order_by_clauses() {
        assert_eq!(ListingsFilter::order_by(None), "id ASC");
        assert_eq!(
            ListingsFilter::order_by(Some(ListingsFilter::PriceLowToHigh)),
            "price ASC, id ASC"
        );
        assert_eq!(
            ListingsFilter::order_by(Some(ListingsFilter::PriceHighToLow)),
            "price DESC, id DESC"
        );
    }
}
