//! HTTP API Layer
//!
//! This crate provides the REST API for the claims workflow using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for the workflow operations
//! - **Middleware**: Request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{delete, get, post},
    middleware as axum_middleware,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimsService;

use crate::handlers::{claims, health};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: ClaimsService,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - The claims workflow service, already wired to its
///   storage adapters
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(service: ClaimsService) -> Router {
    let state = AppState { service };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims workflow routes
    let claims_routes = Router::new()
        .route("/", post(claims::submit_claim))
        .route("/pending", get(claims::pending_claims))
        .route("/:id/approve", post(claims::approve_claim))
        .route("/:id/reject", post(claims::reject_claim))
        .route("/:id", delete(claims::delete_claim));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
