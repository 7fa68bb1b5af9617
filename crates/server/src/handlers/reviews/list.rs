use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{review, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use derive_more::{Display, Error, From};
use serde::Deserialize;

use super::ReviewData;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum ReviewListError {
    DatabaseError(DbErr),
}

/// Query string parameters.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ReviewListQuery {
    /// Return only reviews of this course.
    course_id: Option<i64>,
}

/// List reviews, newest first.
pub(super) async fn list(
    State(db): State<Arc<DatabaseConnection>>,
    Query(query): Query<ReviewListQuery>,
) -> Result<Json<Vec<ReviewData>>, ReviewListError> {
    let mut select = review::Entity::find().order_by_desc(review::Column::Id);

    if let Some(course_id) = query.course_id {
        select = select.filter(review::Column::CourseId.eq(course_id));
    }

    let reviews = select.all(&*db).await?;

    Ok(Json(reviews.into_iter().map(ReviewData::from).collect()))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use db::{course, current_timestamp, ActiveValue, EntityTrait};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{
        handlers::{courses::testing::create_test_env, reviews::testing::create_review},
        testing::{create_test_app, ResponseBodyExt},
    };

    async fn ratings(app: &Router, uri: String) -> Vec<i64> {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = response.json().await;

        body.as_array()
            .expect("expected an array")
            .iter()
            .map(|review| review["rating"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn course_filter() {
        let (app, db, _) = create_test_app().await;
        let (_, course_id) = create_test_env(&db).await;

        let other_course_id = course::Entity::insert(course::ActiveModel {
            title: ActiveValue::Set(String::from("Rust Basics")),
            price: ActiveValue::Set(0.0),
            created_at: ActiveValue::Set(current_timestamp()),
            ..Default::default()
        })
        .exec(&*db)
        .await
        .expect("unable to create course")
        .last_insert_id;

        create_review(&db, course_id, 3).await;
        create_review(&db, other_course_id, 4).await;
        create_review(&db, course_id, 5).await;

        assert_eq!(ratings(&app, String::from("/reviews")).await, [5, 4, 3]);
        assert_eq!(
            ratings(&app, format!("/reviews?courseId={course_id}")).await,
            [5, 3]
        );
    }
}
