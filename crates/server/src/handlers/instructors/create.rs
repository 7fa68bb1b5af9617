use std::sync::Arc;

use axum::{extract::State, Json};
use axum_derive_error::ErrorResponse;
use db::{current_timestamp, instructor, ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use validator::Validate;

use crate::{handlers::InsertResponse, validation::ValidatedJson};

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum InstructorCreateError {
    DatabaseError(DbErr),
}

/// JSON request body.
#[derive(Deserialize, Validate)]
pub(super) struct InstructorCreateRequest {
    #[validate(length(min = 1))]
    name: String,

    bio: Option<String>,

    /// Profile photo URL.
    #[validate(url)]
    photo: Option<String>,

    /// Short area of expertise, e.g. "Web development".
    #[validate(length(min = 1))]
    expertise: Option<String>,
}

/// Add a new instructor profile.
pub(super) async fn create(
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<InstructorCreateRequest>,
) -> Result<Json<InsertResponse>, InstructorCreateError> {
    let result = instructor::Entity::insert(instructor::ActiveModel {
        name: ActiveValue::Set(request.name),
        bio: ActiveValue::Set(request.bio),
        photo: ActiveValue::Set(request.photo),
        expertise: ActiveValue::Set(request.expertise),
        created_at: ActiveValue::Set(current_timestamp()),
        ..Default::default()
    })
    .exec(&*db)
    .await?;

    Ok(Json(InsertResponse {
        inserted_id: Some(result.last_insert_id),
    }))
}
