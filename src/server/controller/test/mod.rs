
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{
    data::{
        memory::{FailingSeriesStore, InMemorySeriesStore, PanickingSeriesStore},
        store::SeriesStore,
    },
    model::series::Series,
    router::app,
    state::AppState,
};

fn app_with(store: impl SeriesStore + 'static) -> Router {
    app(AppState::new(Arc::new(store)))
}

fn stored(id: i32, last_episode_watched: i32, total_episodes: i32, ranking: i32) -> Series {
    Series {
        id,
        title: format!("Series {}", id),
        status: "Watching".to_string(),
        last_episode_watched,
        total_episodes,
        ranking,
    }
}

/// Sends a request and returns the status with the raw response body.
async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, bytes.to_vec())
}

/// Sends a request with an optional JSON body and parses any JSON response.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<Value>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let (status, bytes) = send_raw(app, request).await;
    let body = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).unwrap())
    };

    (status, body)
}
