use crate::{Booking, Listing, ListingsFilter, Page, Paginated, Result, Store, User};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashMap;

/// Start a read-only transaction in which every statement sees the same snapshot, so a page
/// and its total agree even while other connections write
async fn snapshot(db: &PgPool) -> Result<Transaction<'static, Postgres>> {
    let mut tx = db.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;

    Ok(tx)
}

#[async_trait]
impl Store for PgPool {
    async fn listing(&self, id: i32) -> Result<Option<Listing>> {
        Listing::find(id, self).await
    }

    async fn listings(
        &self,
        filter: Option<ListingsFilter>,
        page: Page,
    ) -> Result<Paginated<Listing>> {
        let mut tx = snapshot(self).await?;
        let total = Listing::count(&mut *tx).await?;
        let result = Listing::page(filter, page, &mut *tx).await?;
        tx.commit().await?;

        Ok(Paginated { total, result })
    }

    async fn user(&self, id: &str) -> Result<Option<User>> {
        User::find(id, self).await
    }

    async fn users(&self, ids: &[String]) -> Result<HashMap<String, User>> {
        User::load(ids, self).await
    }

    async fn user_by_token(&self, token: &str) -> Result<Option<User>> {
        User::find_by_token(token, self).await
    }

    async fn bookings(&self, ids: &[i32], page: Page) -> Result<Paginated<Booking>> {
        let mut tx = snapshot(self).await?;
        let total = Booking::count(ids, &mut *tx).await?;
        let result = Booking::page(ids, page, &mut *tx).await?;
        tx.commit().await?;

        Ok(Paginated { total, result })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Page, Store};
    use sqlx::PgPool;

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let db = crate::connect(&url, 2).await.expect("failed to connect");
        crate::migrate(&db).await.expect("failed to migrate");
        db
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database in DATABASE_URL"]
    async fn listings_total_matches_page_snapshot() {
        let db = pool().await;

        let all = db.listings(None, Page::new(i32::MAX, 1)).await.unwrap();
        assert_eq!(all.total, all.result.len() as i64);

        let first = db.listings(None, Page::new(1, 1)).await.unwrap();
        assert_eq!(first.total, all.total);
        assert!(first.result.len() <= 1);
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database in DATABASE_URL"]
    async fn bookings_with_no_ids_are_empty() {
        let db = pool().await;

        let bookings = db.bookings(&[], Page::new(10, 1)).await.unwrap();
        assert_eq!(bookings.total, 0);
        assert!(bookings.result.is_empty());
    }
}
