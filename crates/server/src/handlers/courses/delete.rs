use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{course, DatabaseConnection, DbErr, EntityTrait};
use derive_more::{Display, Error, From};

use crate::handlers::DeleteResponse;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum CourseDeletionError {
    DatabaseError(DbErr),
}

/// Remove a course from the catalog.
///
/// Course reviews are removed with it. Stored payment transactions keep a copy
/// of the course title and are not affected.
pub(super) async fn delete(
    Path(id): Path<i64>,
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<DeleteResponse>, CourseDeletionError> {
    let result = course::Entity::delete_by_id(id).exec(&*db).await?;

    Ok(Json(DeleteResponse {
        deleted_count: result.rows_affected,
    }))
}
