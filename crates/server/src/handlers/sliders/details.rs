use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{slider, DatabaseConnection, DbErr, EntityTrait};
use derive_more::{Display, Error, From};

use super::SliderData;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum SliderDetailsError {
    DatabaseError(DbErr),

    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "slider not found")]
    SliderNotFound,
}

pub(super) async fn details(
    Path(id): Path<i64>,
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<SliderData>, SliderDetailsError> {
    slider::Entity::find_by_id(id)
        .one(&*db)
        .await?
        .map(|model| Json(model.into()))
        .ok_or(SliderDetailsError::SliderNotFound)
}
