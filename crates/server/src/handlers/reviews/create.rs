use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use axum_derive_error::ErrorResponse;
use db::{
    course, current_timestamp, review, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
    QuerySelect, SelectExt, TransactionErrorExt, TransactionTrait,
};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use validator::Validate;

use crate::{handlers::InsertResponse, validation::ValidatedJson};

/// Errors that may occur while submitting a review.
#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum ReviewCreateError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// Reviewed course does not exist.
    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "course not found")]
    CourseNotFound,
}

/// JSON request body.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(super) struct ReviewCreateRequest {
    course_id: i64,

    /// Reviewer's display name.
    #[validate(length(min = 1))]
    name: String,

    #[validate(url)]
    photo: Option<String>,

    #[validate(range(min = 1, max = 5))]
    rating: i16,

    #[validate(length(min = 1))]
    comment: String,
}

/// Submit a course review.
pub(super) async fn create(
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<ReviewCreateRequest>,
) -> Result<Json<InsertResponse>, ReviewCreateError> {
    db.transaction(|txn| {
        Box::pin(async move {
            let course_exists = course::Entity::find_by_id(request.course_id)
                .select_only()
                .exists(txn)
                .await?;

            if !course_exists {
                return Err(ReviewCreateError::CourseNotFound);
            }

            let result = review::Entity::insert(review::ActiveModel {
                course_id: ActiveValue::Set(request.course_id),
                name: ActiveValue::Set(request.name),
                photo: ActiveValue::Set(request.photo),
                rating: ActiveValue::Set(request.rating),
                comment: ActiveValue::Set(request.comment),
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

#[cfg(test)]
mod tests {
    use assert_json::{assert_json, validators};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
        Router,
    };
    use db::{review, EntityTrait};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{
        handlers::courses::testing::create_test_env,
        testing::{create_test_app, RequestBodyExt, ResponseBodyExt},
    };

    async fn submit(app: &Router, body: Value) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reviews")
                    .header("Content-Type", "application/json")
                    .body(Body::from_json(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn successful() {
        let (app, db, _) = create_test_app().await;
        let (_, course_id) = create_test_env(&db).await;

        let response = submit(
            &app,
            json!({
                "courseId": course_id,
                "name": "A",
                "rating": 5,
                "comment": "Clear and practical",
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_json!(response.json().await, {
            "insertedId": validators::i64(|_| Ok(()))
        });

        let reviews = review::Entity::find().all(&*db).await.unwrap();

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].course_id, course_id);
        assert_eq!(reviews[0].rating, 5);
    }

    #[tokio::test]
    async fn rating_out_of_range() {
        let (app, db, _) = create_test_app().await;
        let (_, course_id) = create_test_env(&db).await;

        for rating in [0, 6] {
            let response = submit(
                &app,
                json!({
                    "courseId": course_id,
                    "name": "A",
                    "rating": rating,
                    "comment": "Clear and practical",
                }),
            )
            .await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        assert!(review::Entity::find().all(&*db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_course() {
        let (app, db, _) = create_test_app().await;

        let response = submit(
            &app,
            json!({
                "courseId": 100,
                "name": "A",
                "rating": 4,
                "comment": "Clear and practical",
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(review::Entity::find().all(&*db).await.unwrap().is_empty());
    }
}
