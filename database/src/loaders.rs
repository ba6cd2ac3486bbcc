use crate::{Db, Error, User};
use async_graphql::{
    dataloader::{DataLoader, Loader, NoCache},
    SchemaBuilder,
};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};

/// Efficiently load [`User`]s in GraphQL queries
pub type UserLoader = DataLoader<UserLoaderImpl, NoCache>;

/// The dataloader implementation for [`User`]s
pub struct UserLoaderImpl(Db);

impl UserLoaderImpl {
    /// Create a new dataloader for [`User`]s
    #[inline(always)]
    fn new(db: &Db) -> UserLoader {
        DataLoader::new(UserLoaderImpl(db.clone()), tokio::task::spawn)
    }
}

#[async_trait]
impl Loader<String> for UserLoaderImpl {
    type Value = User;
    type Error = Arc<Error>;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        self.0.users(keys).await.map_err(Arc::new)
    }
}

/// Registers the defined dataloaders
pub trait RegisterDataLoaders {
    fn register_dataloaders(self, db: &Db) -> Self;
}

impl<Q, M, S> RegisterDataLoaders for SchemaBuilder<Q, M, S> {
    fn register_dataloaders(self, db: &Db) -> Self {
        self.data(UserLoaderImpl::new(db))
    }
}
