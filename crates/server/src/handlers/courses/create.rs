use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use axum_derive_error::ErrorResponse;
use db::{
    category, course, current_timestamp, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
    QuerySelect, SelectExt, TransactionErrorExt, TransactionTrait,
};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use validator::Validate;

use crate::{
    handlers::InsertResponse,
    validation::{non_negative_price, ValidatedJson},
};

/// Errors that may occur during the course creation process.
#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum CourseCreateError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// Provided category identifier does not exist.
    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "category not found")]
    CategoryNotFound,
}

/// JSON request body.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(super) struct CourseCreateRequest {
    #[validate(length(min = 1))]
    title: String,

    description: Option<String>,

    /// Course price, zero for free courses.
    #[validate(custom = "non_negative_price")]
    price: f64,

    category_id: Option<i64>,

    /// Instructor's display name.
    #[validate(length(min = 1))]
    instructor: Option<String>,

    /// Cover image URL.
    #[validate(url)]
    image: Option<String>,
}

/// Course creation handler.
pub(super) async fn create(
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<CourseCreateRequest>,
) -> Result<Json<InsertResponse>, CourseCreateError> {
    db.transaction(|txn| {
        Box::pin(async move {
            if let Some(category_id) = request.category_id {
                let category_exists = category::Entity::find_by_id(category_id)
                    .select_only()
                    .exists(txn)
                    .await?;

                if !category_exists {
                    return Err(CourseCreateError::CategoryNotFound);
                }
            }

            let result = course::Entity::insert(course::ActiveModel {
                title: ActiveValue::Set(request.title),
                description: ActiveValue::Set(request.description),
                price: ActiveValue::Set(request.price),
                category_id: ActiveValue::Set(request.category_id),
                instructor: ActiveValue::Set(request.instructor),
                image: ActiveValue::Set(request.image),
                created_at: ActiveValue::Set(current_timestamp()),
                ..Default::default()
            })
            .exec(txn)
            .await?;

            Ok(Json(InsertResponse {
                inserted_id: Some(result.last_insert_id),
            }))
        })
    })
    .await
    .into_raw_result()
}
