use axum::extract::FromRef;
use database::Db;

/// State passed to each request handler
#[derive(Clone)]
pub(crate) struct AppState {
    pub schema: graphql::Schema,
}

impl AppState {
    pub fn new(db: Db) -> AppState {
        AppState {
            schema: graphql::schema(db),
        }
    }
}

impl FromRef<AppState> for graphql::Schema {
    fn from_ref(state: &AppState) -> Self {
        state.schema.clone()
    }
}
