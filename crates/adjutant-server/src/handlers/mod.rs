//! HTTP route handlers for the adjutant gateway.

pub mod calendar;
pub mod gmail;
pub mod odoo;
pub mod planner;

use axum::{http::Uri, Json};

use crate::dto::HealthResponse;
use crate::error::AppError;

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Fallback for unmatched routes, so 404s carry the structured error body.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}
