use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{slider, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use validator::Validate;

use crate::{handlers::UpdateResponse, validation::ValidatedJson};

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum SliderUpdateError {
    DatabaseError(DbErr),
}

/// JSON request body.
///
/// Omitted fields are left untouched.
#[derive(Deserialize, Validate)]
pub(super) struct SliderUpdateRequest {
    #[validate(length(min = 1))]
    title: Option<String>,

    description: Option<String>,

    #[validate(url)]
    image: Option<String>,

    #[validate(url)]
    link: Option<String>,
}

impl SliderUpdateRequest {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.link.is_none()
    }
}

/// Update provided slider fields.
pub(super) async fn update(
    Path(id): Path<i64>,
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<SliderUpdateRequest>,
) -> Result<Json<UpdateResponse>, SliderUpdateError> {
    if request.is_empty() {
        return Ok(Json(UpdateResponse { modified_count: 0 }));
    }

    let mut model = slider::ActiveModel::default();

    if let Some(title) = request.title {
        model.title = ActiveValue::Set(title);
    }

    if let Some(description) = request.description {
        model.description = ActiveValue::Set(Some(description));
    }

    if let Some(image) = request.image {
        model.image = ActiveValue::Set(image);
    }

    if let Some(link) = request.link {
        model.link = ActiveValue::Set(Some(link));
    }

    let result = slider::Entity::update_many()
        .set(model)
        .filter(slider::Column::Id.eq(id))
        .exec(&*db)
        .await?;

    Ok(Json(UpdateResponse {
        modified_count: result.rows_affected,
    }))
}
