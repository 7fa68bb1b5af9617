use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{course, DatabaseConnection, DbErr, EntityTrait};
use derive_more::{Display, Error, From};

use super::CourseData;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum CourseDetailsError {
    DatabaseError(DbErr),

    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "course not found")]
    CourseNotFound,
}

/// Course details handler.
pub(super) async fn details(
    Path(id): Path<i64>,
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<CourseData>, CourseDetailsError> {
    course::Entity::find_by_id(id)
        .one(&*db)
        .await?
        .map(|model| Json(model.into()))
        .ok_or(CourseDetailsError::CourseNotFound)
}
