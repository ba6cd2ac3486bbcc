use crate::session;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, http::HeaderMap, response::Html};
use axum_extra::extract::CookieJar;
use tracing::instrument;

/// Handle graphql requests
#[instrument(name = "graphql", skip_all)]
pub(crate) async fn graphql(
    State(schema): State<graphql::Schema>,
    headers: HeaderMap,
    cookies: CookieJar,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let token = session::token(&headers, &cookies);
    let req = req.into_inner().data(token);
    schema.execute(req).await.into()
}

/// Serve the GraphQL playground for development
#[instrument(name = "playground")]
pub(crate) async fn playground() -> Html<String> {
    let config = GraphQLPlaygroundConfig::new("/api").title("TinyHouse Playground");
    Html(playground_source(config))
}
