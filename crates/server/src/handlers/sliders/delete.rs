use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{slider, DatabaseConnection, DbErr, EntityTrait};
use derive_more::{Display, Error, From};

use crate::handlers::DeleteResponse;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum SliderDeletionError {
    DatabaseError(DbErr),
}

pub(super) async fn delete(
    Path(id): Path<i64>,
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<DeleteResponse>, SliderDeletionError> {
    let result = slider::Entity::delete_by_id(id).exec(&*db).await?;

    Ok(Json(DeleteResponse {
        deleted_count: result.rows_affected,
    }))
}
