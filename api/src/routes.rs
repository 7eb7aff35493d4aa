use axum::{extract::DefaultBodyLimit, middleware, routing::post, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{error, handlers, middleware::request_logger};

/// Largest accepted request body, in bytes
pub const BODY_LIMIT: usize = 100 * 1024;

pub fn submission_routes() -> Router {
    Router::new().route(
        "/submit",
        post(handlers::submit).layer(DefaultBodyLimit::max(BODY_LIMIT)),
    )
}

/// Full application router
pub fn app() -> Router {
    with_middleware(submission_routes())
}

/// Add the 404 fallback, panic recovery and request logging around `routes`
pub fn with_middleware(routes: Router) -> Router {
    routes
        .fallback(handlers::route_not_found)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(middleware::from_fn(request_logger))
}
