mod create;
mod delete;
mod list;

use std::sync::Arc;

use axum::{
    routing::{self, get},
    Router,
};
use db::{review, unix_timestamp, DatabaseConnection};
use serde::Serialize;

/// A single course review.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ReviewData {
    id: i64,
    course_id: i64,
    name: String,
    photo: Option<String>,
    rating: i16,
    comment: String,
    created_at: i64,
}

impl From<review::Model> for ReviewData {
    fn from(model: review::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            name: model.name,
            photo: model.photo,
            rating: model.rating,
            comment: model.comment,
            created_at: unix_timestamp(model.created_at),
        }
    }
}

pub(crate) fn routes() -> Router<Arc<DatabaseConnection>> {
    Router::new()
        .route("/", get(list::list).post(create::create))
        .route("/:id", routing::delete(delete::delete))
}
