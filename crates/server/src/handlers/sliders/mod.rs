mod create;
mod delete;
mod details;
mod list;
mod update;

use std::sync::Arc;

use axum::{routing::get, Router};
use db::{slider, unix_timestamp, DatabaseConnection};
use serde::Serialize;

/// A single slider data.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SliderData {
    id: i64,
    title: String,
    description: Option<String>,
    image: String,
    link: Option<String>,
    created_at: i64,
}

impl From<slider::Model> for SliderData {
    fn from(model: slider::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            image: model.image,
            link: model.link,
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
