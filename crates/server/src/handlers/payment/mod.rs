/// Browser-facing outcome callbacks.
mod callback;

/// Transaction lookup route.
mod details;

/// Payment session creation route.
mod initiate;

/// Server-to-server payment notifications.
mod ipn;

/// Outcome processing shared between callbacks and notifications.
mod settlement;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use db::DatabaseConnection;

/// Create a router that provides an API server with payment routes.
pub(crate) fn routes() -> Router<Arc<DatabaseConnection>> {
    let gateway_routes = Router::new()
        .route("/success/:tranId", post(callback::success))
        .route("/fail/:tranId", post(callback::fail))
        .route("/cancel/:tranId", post(callback::cancel))
        .route("/ipn/:tranId", post(ipn::ipn))
        .route("/transactions/:tranId", get(details::details));

    Router::new()
        .route("/initiate-payment", post(initiate::initiate))
        .nest("/payment", gateway_routes)
}
