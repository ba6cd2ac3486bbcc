use crate::Result;
#[cfg(feature = "graphql")]
use async_graphql::{ComplexObject, ID};
use futures::stream::TryStreamExt;
use sqlx::{query_as, Executor, FromRow, Postgres};
use std::collections::HashMap;
use tracing::instrument;

/// A user of the service, either as a guest or a host
#[derive(Clone, Debug, Eq, FromRow, PartialEq)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[cfg_attr(feature = "graphql", graphql(complex))]
pub struct User {
    /// A unique ID, assigned by the identity provider
    #[cfg_attr(feature = "graphql", graphql(skip))]
    pub id: String,
    /// The token for the user's current session
    #[cfg_attr(feature = "graphql", graphql(skip))]
    pub token: String,
    /// The display name
    pub name: String,
    /// The URL of the user's avatar
    pub avatar: String,
    /// How to contact the user
    pub contact: String,
    /// The connected payment wallet, if any
    #[cfg_attr(feature = "graphql", graphql(skip))]
    pub wallet_id: Option<String>,
}

impl User {
    /// Whether the user has connected a payment wallet
    pub fn has_wallet(&self) -> bool {
        self.wallet_id.is_some()
    }

    /// Load all the users by their IDs, for use in dataloaders
    #[instrument(name = "User::load", skip(db))]
    pub(crate) async fn load<'c, 'e, E>(ids: &[String], db: E) -> Result<HashMap<String, User>>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = Postgres>,
    {
        let by_id = query_as::<_, User>("SELECT * FROM users WHERE id = ANY($1)")
            .bind(ids)
            .fetch(db)
            .map_ok(|user| (user.id.clone(), user))
            .try_collect()
            .await?;
        Ok(by_id)
    }

    /// Get a user by it's ID
    #[instrument(name = "User::find", skip(db))]
    pub async fn find<'c, 'e, E>(id: &str, db: E) -> Result<Option<User>>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = Postgres>,
    {
        let user = query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    /// Get the user a session token was issued to
    #[instrument(name = "User::find_by_token", skip_all)]
    pub async fn find_by_token<'c, 'e, E>(token: &str, db: E) -> Result<Option<User>>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = Postgres>,
    {
        let user = query_as::<_, User>("SELECT * FROM users WHERE token = $1")
            .bind(token)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }
}

#[cfg(feature = "graphql")]
#[ComplexObject]
impl User {
    /// A unique ID
    #[graphql(name = "id")]
    async fn graphql_id(&self) -> ID {
        ID::from(&self.id)
    }

    /// Whether the user has connected a payment wallet
    #[graphql(name = "hasWallet")]
    async fn graphql_has_wallet(&self) -> bool {
        self.has_wallet()
    }
}
