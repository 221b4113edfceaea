//! HTTP gateway exposing the adjutant mock endpoints.
//!
//! Every route returns a static or trivially-templated JSON payload; no
//! mail is sent, no calendar is touched, nothing is stored. The router is
//! exported so integration tests can drive it without a socket.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod services;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use state::AppState;

/// Builds the gateway router with tracing and CORS applied.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/v1/planner/week-plan", post(handlers::planner::week_plan))
        .route("/v1/gmail/summarize-inbox", post(handlers::gmail::summarize_inbox))
        .route("/v1/gmail/thread-list", post(handlers::gmail::thread_list))
        .route("/v1/gmail/compose-and-send", post(handlers::gmail::compose_and_send))
        .route("/v1/gmail/draft", post(handlers::gmail::draft))
        .route("/v1/calendar/block-time", post(handlers::calendar::block_time))
        .route("/v1/odoo/priority-items/search", post(handlers::odoo::priority_search))
        .route("/v1/odoo/debug", get(handlers::odoo::debug))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/v1/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(cors)
        .with_state(state)
}
