use std::sync::Arc;

use axum::{extract::State, Json};
use axum_derive_error::ErrorResponse;
use db::{current_timestamp, slider, ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use validator::Validate;

use crate::{handlers::InsertResponse, validation::ValidatedJson};

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum SliderCreateError {
    DatabaseError(DbErr),
}

/// JSON request body.
#[derive(Deserialize, Validate)]
pub(super) struct SliderCreateRequest {
    #[validate(length(min = 1))]
    title: String,

    description: Option<String>,

    /// Background image URL.
    #[validate(url)]
    image: String,

    /// Call-to-action target URL.
    #[validate(url)]
    link: Option<String>,
}

/// Add a new home page slider.
pub(super) async fn create(
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<SliderCreateRequest>,
) -> Result<Json<InsertResponse>, SliderCreateError> {
    let result = slider::Entity::insert(slider::ActiveModel {
        title: ActiveValue::Set(request.title),
        description: ActiveValue::Set(request.description),
        image: ActiveValue::Set(request.image),
        link: ActiveValue::Set(request.link),
        created_at: ActiveValue::Set(current_timestamp()),
        ..Default::default()
    })
    .exec(&*db)
    .await?;

    Ok(Json(InsertResponse {
        inserted_id: Some(result.last_insert_id),
    }))
}
