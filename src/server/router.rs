use std::{any::Any, time::Duration};

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, LINK},
        HeaderName, Method,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{health::health, series},
    error::InternalServerError,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Series Tracker API", description = "Track watched TV series"),
    tags((name = "series", description = "Series tracking endpoints"))
)]
pub struct ApiDoc;

/// Routes without state or middleware applied.
///
/// Series endpoints are collected into the OpenAPI document, which is served at
/// `/api-docs/openapi.json` alongside Swagger UI at `/swagger-ui`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(series::router())
        .split_for_parts();

    router
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

/// Builds the complete application with cross-origin, tracing and panic handling layers.
pub fn app(state: AppState) -> Router {
    router()
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            ACCEPT,
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .expose_headers([LINK])
        .max_age(Duration::from_secs(300))
}

/// Turns a panicking handler into a generic 500 response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    InternalServerError(format!("Request handler panicked: {}", detail)).into_response()
}
