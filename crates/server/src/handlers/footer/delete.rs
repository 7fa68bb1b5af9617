use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{footer_page, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use derive_more::{Display, Error, From};

use crate::handlers::DeleteResponse;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum FooterPageDeletionError {
    DatabaseError(DbErr),
}

/// Remove a footer page.
pub(super) async fn delete(
    Path(slug): Path<String>,
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<DeleteResponse>, FooterPageDeletionError> {
    let result = footer_page::Entity::delete_many()
        .filter(footer_page::Column::Slug.eq(slug))
        .exec(&*db)
        .await?;

    Ok(Json(DeleteResponse {
        deleted_count: result.rows_affected,
    }))
}
