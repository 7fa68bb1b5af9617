use std::sync::Arc;

use axum::{extract::State, Json};
use axum_derive_error::ErrorResponse;
use db::{category, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use derive_more::{Display, Error, From};

use super::CategoryData;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum CategoryListError {
    DatabaseError(DbErr),
}

pub(super) async fn list(
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<CategoryData>>, CategoryListError> {
    let categories = category::Entity::find()
        .order_by_asc(category::Column::Id)
        .all(&*db)
        .await?;

    Ok(Json(categories.into_iter().map(CategoryData::from).collect()))
}
