use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{category, DatabaseConnection, DbErr, EntityTrait};
use derive_more::{Display, Error, From};

use crate::handlers::DeleteResponse;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum CategoryDeletionError {
    DatabaseError(DbErr),
}

/// Delete a category.
///
/// Courses of a deleted category are kept without a category.
pub(super) async fn delete(
    Path(id): Path<i64>,
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<DeleteResponse>, CategoryDeletionError> {
    let result = category::Entity::delete_by_id(id).exec(&*db).await?;

    Ok(Json(DeleteResponse {
        deleted_count: result.rows_affected,
    }))
}
