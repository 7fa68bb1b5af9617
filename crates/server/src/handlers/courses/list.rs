use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{course, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use derive_more::{Display, Error, From};
use serde::Deserialize;

use super::CourseData;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum CourseListError {
    DatabaseError(DbErr),
}

/// Query string parameters.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CourseListQuery {
    /// Return only courses of this category.
    category_id: Option<i64>,
}

/// List courses, optionally limited to a single category.
pub(super) async fn list(
    State(db): State<Arc<DatabaseConnection>>,
    Query(query): Query<CourseListQuery>,
) -> Result<Json<Vec<CourseData>>, CourseListError> {
    let mut select = course::Entity::find().order_by_asc(course::Column::Id);

    if let Some(category_id) = query.category_id {
        select = select.filter(course::Column::CategoryId.eq(category_id));
    }

    let courses = select.all(&*db).await?;

    Ok(Json(courses.into_iter().map(CourseData::from).collect()))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::{course, current_timestamp, ActiveValue, EntityTrait};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{
        handlers::courses::testing::create_test_env,
        testing::{create_test_app, ResponseBodyExt},
    };

    #[tokio::test]
    async fn category_filter() {
        let (app, db, _) = create_test_app().await;
        let (category_id, _) = create_test_env(&db).await;

        course::Entity::insert(course::ActiveModel {
            title: ActiveValue::Set(String::from("Uncategorized")),
            price: ActiveValue::Set(0.0),
            created_at: ActiveValue::Set(current_timestamp()),
            ..Default::default()
        })
        .exec_without_returning(&*db)
        .await
        .expect("unable to create course");

        let titles = |body: Value| -> Vec<String> {
            body.as_array()
                .expect("expected an array")
                .iter()
                .map(|course| course["title"].as_str().unwrap().to_string())
                .collect()
        };

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/courses")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            titles(response.json().await),
            ["Go Basics", "Uncategorized"]
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/courses?categoryId={category_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(titles(response.json().await), ["Go Basics"]);
    }
}
