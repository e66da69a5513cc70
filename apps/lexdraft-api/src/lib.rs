//! LexDraft proxy API
//!
//! Authenticated pass-through between browser clients and the upstream
//! document backend. Document CRUD and export forward the caller's bearer
//! token upstream and normalize the response into the `ApiEnvelope` shape;
//! the template catalog is served locally from the embedded registry.

pub mod error;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the router with all routes and middleware
pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Template catalog (served locally)
        .route("/web/templates", get(handlers::list_templates))
        .route("/web/templates/:id", get(handlers::get_template))
        // Document CRUD (proxied upstream)
        .route(
            "/web/documents",
            get(handlers::list_documents).post(handlers::create_document),
        )
        .route("/web/documents/export", post(handlers::export_document))
        .route(
            "/web/documents/:id",
            get(handlers::get_document)
                .put(handlers::update_document)
                .delete(handlers::delete_document),
        )
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
