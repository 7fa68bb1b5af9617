use std::sync::Arc;

use axum::{extract::State, Json};
use axum_derive_error::ErrorResponse;
use db::{slider, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use derive_more::{Display, Error, From};

use super::SliderData;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum SliderListError {
    DatabaseError(DbErr),
}

/// List all sliders in the order they were added.
pub(super) async fn list(
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<SliderData>>, SliderListError> {
    let sliders = slider::Entity::find()
        .order_by_asc(slider::Column::Id)
        .all(&*db)
        .await?;

    Ok(Json(sliders.into_iter().map(SliderData::from).collect()))
}
