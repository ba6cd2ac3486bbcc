//! In-memory storage for tests and local development.

use crate::{
    Booking, Error, Listing, ListingsFilter, Page, Paginated, Result, Store, User,
};
use async_trait::async_trait;
use std::{cmp::Reverse, collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::instrument;

/// A store that keeps every collection in memory
///
/// Clones share the same collections. Data is lost when the last clone is dropped.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

#[derive(Default)]
struct Collections {
    listings: Vec<Listing>,
    users: Vec<User>,
    bookings: Vec<Booking>,
    closed: bool,
}

impl Collections {
    fn open(&self) -> Result<&Self> {
        if self.closed {
            Err(Error::Closed)
        } else {
            Ok(self)
        }
    }
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listing, replacing any existing listing with the same ID
    pub async fn insert_listing(&self, listing: Listing) {
        let mut inner = self.inner.write().await;
        inner.listings.retain(|l| l.id != listing.id);
        inner.listings.push(listing);
    }

    /// Add a user, replacing any existing user with the same ID
    pub async fn insert_user(&self, user: User) {
        let mut inner = self.inner.write().await;
        inner.users.retain(|u| u.id != user.id);
        inner.users.push(user);
    }

    /// Add a booking, replacing any existing booking with the same ID
    pub async fn insert_booking(&self, booking: Booking) {
        let mut inner = self.inner.write().await;
        inner.bookings.retain(|b| b.id != booking.id);
        inner.bookings.push(booking);
    }

    /// Stop serving queries, every subsequent read fails
    pub async fn close(&self) {
        self.inner.write().await.closed = true;
    }
}

#[async_trait]
impl Store for MemoryStore {
    #[instrument(name = "MemoryStore::listing", skip(self))]
    async fn listing(&self, id: i32) -> Result<Option<Listing>> {
        let inner = self.inner.read().await;
        let listing = inner.open()?.listings.iter().find(|l| l.id == id).cloned();

        Ok(listing)
    }

    #[instrument(name = "MemoryStore::listings", skip(self))]
    async fn listings(
        &self,
        filter: Option<ListingsFilter>,
        page: Page,
    ) -> Result<Paginated<Listing>> {
        let inner = self.inner.read().await;
        let mut listings = inner.open()?.listings.iter().collect::<Vec<_>>();

        match filter {
            None => listings.sort_by_key(|l| l.id),
            Some(ListingsFilter::PriceLowToHigh) => listings.sort_by_key(|l| (l.price, l.id)),
            Some(ListingsFilter::PriceHighToLow) => {
                listings.sort_by_key(|l| Reverse((l.price, l.id)))
            }
        }

        Ok(Paginated {
            total: listings.len() as i64,
            result: page.slice(listings.into_iter().cloned()),
        })
    }

    #[instrument(name = "MemoryStore::user", skip(self))]
    async fn user(&self, id: &str) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        let user = inner.open()?.users.iter().find(|u| u.id == id).cloned();

        Ok(user)
    }

    #[instrument(name = "MemoryStore::users", skip(self))]
    async fn users(&self, ids: &[String]) -> Result<HashMap<String, User>> {
        let inner = self.inner.read().await;
        let by_id = inner
            .open()?
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .map(|u| (u.id.clone(), u.clone()))
            .collect();

        Ok(by_id)
    }

    #[instrument(name = "MemoryStore::user_by_token", skip_all)]
    async fn user_by_token(&self, token: &str) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        let user = inner
            .open()?
            .users
            .iter()
            .find(|u| u.token == token)
            .cloned();

        Ok(user)
    }

    #[instrument(name = "MemoryStore::bookings", skip(self))]
    async fn bookings(&self, ids: &[i32], page: Page) -> Result<Paginated<Booking>> {
        let inner = self.inner.read().await;
        let mut bookings = inner
            .open()?
            .bookings
            .iter()
            .filter(|b| ids.contains(&b.id))
            .collect::<Vec<_>>();
        bookings.sort_by_key(|b| b.id);

        Ok(Paginated {
            total: bookings.len() as i64,
            result: page.slice(bookings.into_iter().cloned()),
        })
    }
}
