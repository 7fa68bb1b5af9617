mod create;
mod delete;
mod details;
mod list;
mod update;

use std::sync::Arc;

use axum::{routing::get, Router};
use db::{instructor, unix_timestamp, DatabaseConnection};
use serde::Serialize;

/// A single instructor profile.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct InstructorData {
    id: i64,
    name: String,
    bio: Option<String>,
    photo: Option<String>,
    expertise: Option<String>,
    created_at: i64,
}

impl From<instructor::Model> for InstructorData {
    fn from(model: instructor::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            bio: model.bio,
            photo: model.photo,
            expertise: model.expertise,
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
