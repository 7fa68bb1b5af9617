mod create;
mod delete;
mod details;
mod list;
mod update;

use std::sync::Arc;

use axum::{routing::get, Router};
use db::{category, unix_timestamp, DatabaseConnection};
use serde::Serialize;

/// A single category data.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CategoryData {
    id: i64,
    name: String,
    status: String,
    image: Option<String>,
    created_at: i64,
}

impl From<category::Model> for CategoryData {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            status: model.status,
            image: model.image,
            created_at: unix_timestamp(model.created_at),
        }
    }
}

pub(crate) fn routes() -> Router<Arc<DatabaseConnection>> {
    Router::new()
        .route("/", get(list::list).post(create::create))
        .route(
            "/:id",
            get(details::details)
                .put(update::update)
                .delete(delete::delete),
        )
}
