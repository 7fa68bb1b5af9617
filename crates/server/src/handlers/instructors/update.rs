use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{
    instructor, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use validator::Validate;

use crate::{handlers::UpdateResponse, validation::ValidatedJson};

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum InstructorUpdateError {
    DatabaseError(DbErr),
}

/// JSON request body.
///
/// Omitted fields are left untouched.
#[derive(Deserialize, Validate)]
pub(super) struct InstructorUpdateRequest {
    #[validate(length(min = 1))]
    name: Option<String>,

    bio: Option<String>,

    #[validate(url)]
    photo: Option<String>,

    #[validate(length(min = 1))]
    expertise: Option<String>,
}

impl InstructorUpdateRequest {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.bio.is_none()
            && self.photo.is_none()
            && self.expertise.is_none()
    }
}

/// Update provided instructor profile fields.
pub(super) async fn update(
    Path(id): Path<i64>,
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<InstructorUpdateRequest>,
) -> Result<Json<UpdateResponse>, InstructorUpdateError> {
    if request.is_empty() {
        return Ok(Json(UpdateResponse { modified_count: 0 }));
    }

    let mut model = instructor::ActiveModel::default();

    if let Some(name) = request.name {
        model.name = ActiveValue::Set(name);
    }

    if let Some(bio) = request.bio {
        model.bio = ActiveValue::Set(Some(bio));
    }

    if let Some(photo) = request.photo {
        model.photo = ActiveValue::Set(Some(photo));
    }

    if let Some(expertise) = request.expertise {
        model.expertise = ActiveValue::Set(Some(expertise));
    }

    let result = instructor::Entity::update_many()
        .set(model)
        .filter(instructor::Column::Id.eq(id))
        .exec(&*db)
        .await?;

    Ok(Json(UpdateResponse {
        modified_count: result.rows_affected,
    }))
}
