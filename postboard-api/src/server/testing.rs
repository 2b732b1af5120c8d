use crate::server::{ServerState, app};
use axum::{
    Router,
    body::{Body, Bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use postboard_db::client::DbClient;
use serde_json::Value;
use time::UtcOffset;
use tower::ServiceExt;

pub const SEED_POST: &str = "asc-a123-cxaz-123-acasdas";
pub const SEED_USER: &str = "ajn2-sa23m-cmkd2-csmc";
pub const SEED_EMAIL: &str = "suleyman@code.edu.az";

/// The full router over freshly seeded state.
#[derive(Clone)]
pub struct TestApp {
    pub state: ServerState,
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

impl TestApp {
    pub fn new() -> Self {
        let state = ServerState::new(DbClient::seeded(UtcOffset::UTC));
        let router = app(state.clone());

        Self { state, router }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse { status, body }
    }

    pub async fn log_in(&self) {
        let response = self
            .send(
                Method::POST,
                "/api/login",
                Some(serde_json::json!({ "email": SEED_EMAIL })),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
    }
}
