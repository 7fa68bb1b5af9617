use std::sync::Arc;

use axum::{extract::State, Json};
use axum_derive_error::ErrorResponse;
use db::{category, current_timestamp, ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use validator::Validate;

use crate::{handlers::InsertResponse, validation::ValidatedJson};

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum CategoryCreateError {
    DatabaseError(DbErr),
}

/// JSON request body.
#[derive(Deserialize, Validate)]
pub(super) struct CategoryCreateRequest {
    #[validate(length(min = 1))]
    name: String,

    /// Publication status, `active` when omitted.
    #[validate(length(min = 1))]
    status: Option<String>,

    #[validate(url)]
    image: Option<String>,
}

pub(super) async fn create(
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<CategoryCreateRequest>,
) -> Result<Json<InsertResponse>, CategoryCreateError> {
    let result = category::Entity::insert(category::ActiveModel {
        name: ActiveValue::Set(request.name),
        status: request.status.map_or(ActiveValue::NotSet, ActiveValue::Set),
        image: ActiveValue::Set(request.image),
        created_at: ActiveValue::Set(current_timestamp()),
        ..Default::default()
    })
    .exec(&*db)
    .await?;

    Ok(Json(InsertResponse {
        inserted_id: Some(result.last_insert_id),
    }))
}
