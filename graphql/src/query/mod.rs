use async_graphql::MergedObject;

mod listing;
mod user;

use listing::ListingQuery;
use user::UserQuery;

/// The various GraphQL queries
///
/// To improve readability, the query implementations are split into different files, but all
/// attached to this one struct.
#[derive(Default, MergedObject)]
pub struct Query(ListingQuery, UserQuery);
