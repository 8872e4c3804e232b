#![allow(dead_code, reason = "not every test binary uses every helper")]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
};
use dunes_api_rest::RestServer;
use dunes_core_contact_contracts::ContactFeatureService;
use dunes_core_health_contracts::HealthFeatureService;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub async fn send(
    server: RestServer<impl HealthFeatureService, impl ContactFeatureService>,
    request: Request<Body>,
) -> (StatusCode, Response<Body>) {
    let response = server.router().oneshot(request).await.unwrap();
    (response.status(), response)
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}
