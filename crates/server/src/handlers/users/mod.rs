mod create;
mod delete;
mod list;
mod role;

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch},
    Router,
};
use db::DatabaseConnection;

pub(crate) fn routes() -> Router<Arc<DatabaseConnection>> {
    Router::new()
        .route("/", get(list::list).post(create::create))
        .route("/role", get(role::role))
        .route("/:id/role", patch(role::update))
        .route("/:id", delete(delete::delete))
}
