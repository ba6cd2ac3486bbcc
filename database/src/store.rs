use crate::{Booking, Listing, ListingsFilter, Page, Paginated, Result, User};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};

/// A shared handle to the store, created once at startup
pub type Db = Arc<dyn Store>;

/// Read access to the `listings`, `users`, and `bookings` collections
///
/// The collections are independent. Nothing guarantees that an ID referenced from one
/// collection exists in another.
#[async_trait]
pub trait Store: Send + Sync {
    /// Get a listing by it's ID
    async fn listing(&self, id: i32) -> Result<Option<Listing>>;

    /// Get a page of listings, optionally ordered by price
    ///
    /// Without a filter, listings are ordered by ID.
    async fn listings(
        &self,
        filter: Option<ListingsFilter>,
        page: Page,
    ) -> Result<Paginated<Listing>>;

    /// Get a user by it's ID
    async fn user(&self, id: &str) -> Result<Option<User>>;

    /// Get many users by their IDs. Unknown IDs are omitted from the result.
    async fn users(&self, ids: &[String]) -> Result<HashMap<String, User>>;

    /// Get the user holding a session token
    async fn user_by_token(&self, token: &str) -> Result<Option<User>>;

    /// Get a page of the bookings with the given IDs, ordered by ID
    async fn bookings(&self, ids: &[i32], page: Page) -> Result<Paginated<Booking>>;
}
