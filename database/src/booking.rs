use crate::{Page, Result};
#[cfg(feature = "graphql")]
use crate::{loaders::UserLoader, User};
#[cfg(feature = "graphql")]
use async_graphql::{ComplexObject, Context, ID};
use chrono::NaiveDate;
use sqlx::{query_as, query_scalar, Executor, FromRow, Postgres};
use tracing::instrument;

/// A reservation of a listing for a range of dates
#[derive(Clone, Debug, Eq, FromRow, PartialEq)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[cfg_attr(feature = "graphql", graphql(complex))]
pub struct Booking {
    /// A unique ID
    #[cfg_attr(feature = "graphql", graphql(skip))]
    pub id: i32,
    /// The listing that was booked
    #[cfg_attr(feature = "graphql", graphql(skip))]
    pub listing: i32,
    /// The ID of the user who made the booking
    #[cfg_attr(feature = "graphql", graphql(skip))]
    pub tenant: String,
    /// The first night of the stay
    pub check_in: NaiveDate,
    /// The day the guest leaves
    pub check_out: NaiveDate,
}

impl Booking {
    /// Get a page of the bookings with the given IDs, ordered by ID
    #[instrument(name = "Booking::page", skip(db))]
    pub async fn page<'c, 'e, E>(ids: &[i32], page: Page, db: E) -> Result<Vec<Booking>>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = Postgres>,
    {
        let bookings = query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE id = ANY($1) ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(ids)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(db)
        .await?;

        Ok(bookings)
    }

    /// Count the bookings that exist out of the given IDs
    #[instrument(name = "Booking::count", skip(db))]
    pub async fn count<'c, 'e, E>(ids: &[i32], db: E) -> Result<i64>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = Postgres>,
    {
        let count = query_scalar::<_, i64>("SELECT count(*) FROM bookings WHERE id = ANY($1)")
            .bind(ids)
            .fetch_one(db)
            .await?;

        Ok(count)
    }
}

#[cfg(feature = "graphql")]
#[ComplexObject]
impl Booking {
    /// A unique ID
    #[graphql(name = "id")]
    async fn graphql_id(&self) -> ID {
        ID::from(self.id.to_string())
    }

    /// The user who made the booking
    #[instrument(name = "Booking::tenant", skip_all, fields(%self.id))]
    async fn tenant(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let loader = ctx.data_unchecked::<UserLoader>();
        let tenant = loader.load_one(self.tenant.clone()).await?;

        Ok(tenant)
    }
}
