use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{
    category, course, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect, SelectExt, TransactionErrorExt, TransactionTrait,
};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use validator::Validate;

use crate::{
    handlers::UpdateResponse,
    validation::{non_negative_price, ValidatedJson},
};

/// Errors that may occur during the course update process.
#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum CourseUpdateError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// Provided category identifier does not exist.
    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "category not found")]
    CategoryNotFound,
}

/// JSON request body.
///
/// Omitted fields are left untouched.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(super) struct CourseUpdateRequest {
    #[validate(length(min = 1))]
    title: Option<String>,

    description: Option<String>,

    #[validate(custom = "non_negative_price")]
    price: Option<f64>,

    category_id: Option<i64>,

    #[validate(length(min = 1))]
    instructor: Option<String>,

    #[validate(url)]
    image: Option<String>,
}

impl CourseUpdateRequest {
    /// Convert request into an active model with only the provided fields set.
    fn into_active_model(self) -> Option<course::ActiveModel> {
        let mut model = course::ActiveModel::default();
        let mut changed = false;

        if let Some(title) = self.title {
            model.title = ActiveValue::Set(title);
            changed = true;
        }

        if let Some(description) = self.description {
            model.description = ActiveValue::Set(Some(description));
            changed = true;
        }

        if let Some(price) = self.price {
            model.price = ActiveValue::Set(price);
            changed = true;
        }

        if let Some(category_id) = self.category_id {
            model.category_id = ActiveValue::Set(Some(category_id));
            changed = true;
        }

        if let Some(instructor) = self.instructor {
            model.instructor = ActiveValue::Set(Some(instructor));
            changed = true;
        }

        if let Some(image) = self.image {
            model.image = ActiveValue::Set(Some(image));
            changed = true;
        }

        changed.then_some(model)
    }
}

/// Course update handler.
pub(super) async fn update(
    Path(id): Path<i64>,
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<CourseUpdateRequest>,
) -> Result<Json<UpdateResponse>, CourseUpdateError> {
    let category_id = request.category_id;

    let Some(model) = request.into_active_model() else {
        return Ok(Json(UpdateResponse { modified_count: 0 }));
    };

    db.transaction(|txn| {
        Box::pin(async move {
            if let Some(category_id) = category_id {
                let category_exists = category::Entity::find_by_id(category_id)
                    .select_only()
                    .exists(txn)
                    .await?;

                if !category_exists {
                    return Err(CourseUpdateError::CategoryNotFound);
                }
            }

            let result = course::Entity::update_many()
                .set(model)
                .filter(course::Column::Id.eq(id))
                .exec(txn)
                .await?;

            Ok(Json(UpdateResponse {
                modified_count: result.rows_affected,
            }))
        })
    })
    .await
    .into_raw_result()
}
