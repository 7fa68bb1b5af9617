use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{
    category, sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use validator::Validate;

use crate::{handlers::UpdateResponse, validation::ValidatedJson};

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum CategoryUpdateError {
    DatabaseError(DbErr),
}

/// JSON request body.
#[derive(Deserialize, Validate)]
pub(super) struct CategoryUpdateRequest {
    #[validate(length(min = 1))]
    name: String,

    #[validate(length(min = 1))]
    status: String,
}

/// Rename a category and change its publication status.
pub(super) async fn update(
    Path(id): Path<i64>,
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<CategoryUpdateRequest>,
) -> Result<Json<UpdateResponse>, CategoryUpdateError> {
    let result = category::Entity::update_many()
        .col_expr(category::Column::Name, Expr::value(request.name))
        .col_expr(category::Column::Status, Expr::value(request.status))
        .filter(category::Column::Id.eq(id))
        .exec(&*db)
        .await?;

    Ok(Json(UpdateResponse {
        modified_count: result.rows_affected,
    }))
}
