use eyre::WrapErr;
use sqlx::{
    migrate::Migrator,
    postgres::{PgConnectOptions, PgPoolOptions},
    ConnectOptions,
};
use std::str::FromStr;
use tracing::{info, log::LevelFilter};

mod booking;
mod error;
mod listing;
#[cfg(feature = "graphql")]
pub mod loaders;
#[cfg(feature = "memory")]
mod memory;
mod page;
mod postgres;
mod store;
mod user;

pub use booking::Booking;
pub use error::Error;
pub use listing::{BookingsIndex, Listing, ListingsFilter};
#[cfg(feature = "memory")]
pub use memory::MemoryStore;
pub use page::{Page, Paginated};
pub use sqlx::PgPool;
pub use store::{Db, Store};
pub use sqlx::types::Json;
pub use user::User;

pub type Result<T, E = Error> = std::result::Result<T, E>;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connect to the database
pub async fn connect(url: &str, max_connections: u32) -> eyre::Result<PgPool> {
    let options = PgConnectOptions::from_str(url)
        .wrap_err("invalid database URL format")?
        .log_statements(LevelFilter::Debug);
    let db = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .wrap_err("failed to connect to the database")?;

    info!("connected to the database");

    Ok(db)
}

/// Apply any pending migrations
pub async fn migrate(db: &PgPool) -> eyre::Result<()> {
    MIGRATOR
        .run(db)
        .await
        .wrap_err("failed to apply migrations")?;

    info!("migrations applied");
    Ok(())
}

/// Revert every migration newer than the target version
pub async fn revert(db: &PgPool, target: i64) -> eyre::Result<()> {
    MIGRATOR
        .undo(db, target)
        .await
        .wrap_err("failed to revert migrations")?;

    info!(%target, "migrations reverted");
    Ok(())
}
