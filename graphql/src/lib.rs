use async_graphql::{
    extensions::{Analyzer, Tracing},
    EmptyMutation, EmptySubscription, Schema as BaseSchema, SchemaBuilder,
};
use database::{loaders::RegisterDataLoaders, Db};

mod authorization;
mod errors;
mod listing;
mod query;
mod viewer;

pub use authorization::{authorize, Access, SessionToken};
use query::Query;

/// The graphql schema for the service
pub type Schema = BaseSchema<Query, EmptyMutation, EmptySubscription>;

/// Create a schema builder with the necessary extensions
fn builder() -> SchemaBuilder<Query, EmptyMutation, EmptySubscription> {
    Schema::build(Query::default(), EmptyMutation, EmptySubscription)
        .extension(Tracing)
        .extension(Analyzer)
}

/// Build the schema on top of the given store
pub fn schema(db: Db) -> Schema {
    builder().register_dataloaders(&db).data(db).finish()
}

/// Export the GraphQL schema
pub fn sdl() -> String {
    builder().finish().sdl()
}
