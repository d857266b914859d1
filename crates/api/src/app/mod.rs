//! HTTP API application wiring (Axum router + shared state).
//!
//! Layout:
//! - `state.rs`: the shared ledger handle injected into handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod state;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Each call owns a fresh, empty ledger; state lives for the life of the
/// returned router and is discarded with it.
pub fn build_app() -> Router {
    let ledger = state::shared_ledger();

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(ledger))
        .layer(ServiceBuilder::new())
}
