//! Tags every request and its response with a unique id.

use std::fmt;

use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::{IntoResponse, Response},
    Router,
};
use base64::{display::Base64Display, engine::general_purpose::URL_SAFE_NO_PAD};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::new();
    request.extensions_mut().insert(request_id);
    let response = next.run(request).await;
    ([(REQUEST_ID_HEADER, request_id.to_string())], response).into_response()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub Uuid);

impl RequestId {
    fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Base64Display::new(self.0.as_bytes(), &URL_SAFE_NO_PAD).fmt(f)
    }
}
