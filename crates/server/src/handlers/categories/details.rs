use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{category, DatabaseConnection, DbErr, EntityTrait};
use derive_more::{Display, Error, From};

use super::CategoryData;

/// Errors that may occur during the category lookup.
#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum CategoryDetailsError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// Requested category was not found.
    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "category not found")]
    CategoryNotFound,
}

pub(super) async fn details(
    Path(id): Path<i64>,
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<CategoryData>, CategoryDetailsError> {
    category::Entity::find_by_id(id)
        .one(&*db)
        .await?
        .map(|model| Json(model.into()))
        .ok_or(CategoryDetailsError::CategoryNotFound)
}
