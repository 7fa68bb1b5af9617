use std::sync::Arc;

use axum::{extract::State, Json};
use axum_derive_error::ErrorResponse;
use db::{
    current_timestamp, user, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect, SelectExt, TransactionErrorExt, TransactionTrait,
};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::ValidatedJson;

/// Errors that may occur during the user creation process.
#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum UserCreateError {
    /// Database-related error.
    DatabaseError(DbErr),
}

/// JSON request body.
#[derive(Deserialize, Validate)]
pub(super) struct UserCreateRequest {
    /// Email address, unique across all users.
    #[validate(email)]
    email: String,

    /// Display name.
    #[validate(length(min = 1))]
    name: Option<String>,

    /// Profile photo URL.
    #[validate(url)]
    photo: Option<String>,
}

/// JSON response body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserCreateResponse {
    /// Explanation for the skipped insertion.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,

    /// Created user identifier.
    inserted_id: Option<i64>,
}

/// User creation handler.
///
/// The web app calls this route after every sign-in, so an already
/// registered email address is not treated as an error.
pub(super) async fn create(
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<UserCreateRequest>,
) -> Result<Json<UserCreateResponse>, UserCreateError> {
    db.transaction(|txn| {
        Box::pin(async move {
            let user_exists = user::Entity::find()
                .select_only()
                .filter(user::Column::Email.eq(&request.email))
                .exists(txn)
                .await?;

            if user_exists {
                return Ok(Json(UserCreateResponse {
                    message: Some("User already exists"),
                    inserted_id: None,
                }));
            }

            let result = user::Entity::insert(user::ActiveModel {
                email: ActiveValue::Set(request.email),
                name: ActiveValue::Set(request.name),
                photo: ActiveValue::Set(request.photo),
                role: ActiveValue::Set(String::from(user::DEFAULT_ROLE)),
                created_at: ActiveValue::Set(current_timestamp()),
                ..Default::default()
            })
            .exec(txn)
            .await?;

            Ok(Json(UserCreateResponse {
                message: None,
                inserted_id: Some(result.last_insert_id),
            }))
        })
    })
    .await
    .into_raw_result()
}
