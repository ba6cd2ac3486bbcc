use axum::{routing::get, Router};
use database::Db;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

mod handlers;
mod session;
mod state;

pub(crate) use state::AppState;

/// Setup the routes
pub fn router(db: Db) -> Router {
    let state = AppState::new(db);

    Router::new()
        .route("/api", get(handlers::playground).post(handlers::graphql))
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, HttpBody},
        http::{Request, StatusCode},
        Router,
    };
    use database::{MemoryStore, User};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn router() -> Router {
        let store = MemoryStore::new();
        store
            .insert_user(User {
                id: String::from("host"),
                token: String::from("host-token"),
                name: String::from("Host"),
                avatar: String::from("https://example.com/host.png"),
                contact: String::from("host@example.com"),
                wallet_id: None,
            })
            .await;

        super::router(Arc::new(store))
    }

    async fn viewer(request: axum::http::request::Builder) -> (StatusCode, Value) {
        let body = json!({ "query": "{ viewer { id didRequest } }" }).to_string();
        let request = request
            .method("POST")
            .uri("/api")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = router().await.oneshot(request).await.unwrap();
        let status = response.status();
        assert!(response.headers().contains_key("x-request-id"));

        let mut body = response.into_body();
        let mut bytes = Vec::new();
        while let Some(chunk) = body.data().await {
            bytes.extend_from_slice(&chunk.unwrap());
        }

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn viewer_from_header() {
        let (status, body) = viewer(Request::builder().header("X-CSRF-TOKEN", "host-token")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"]["viewer"],
            json!({ "id": "host", "didRequest": true })
        );
    }

    #[tokio::test]
    async fn viewer_from_cookie() {
        let (_, body) = viewer(Request::builder().header("cookie", "session=host-token")).await;

        assert_eq!(body["data"]["viewer"]["id"], json!("host"));
    }

    #[tokio::test]
    async fn anonymous_viewer() {
        let (_, body) = viewer(Request::builder().header("X-CSRF-TOKEN", "")).await;

        assert_eq!(
            body["data"]["viewer"],
            json!({ "id": null, "didRequest": true })
        );
    }
}
