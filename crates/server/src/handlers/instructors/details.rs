use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{instructor, DatabaseConnection, DbErr, EntityTrait};
use derive_more::{Display, Error, From};

use super::InstructorData;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum InstructorDetailsError {
    DatabaseError(DbErr),

    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "instructor not found")]
    InstructorNotFound,
}

/// Instructor profile handler.
pub(super) async fn details(
    Path(id): Path<i64>,
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<InstructorData>, InstructorDetailsError> {
    instructor::Entity::find_by_id(id)
        .one(&*db)
        .await?
        .map(|model| Json(model.into()))
        .ok_or(InstructorDetailsError::InstructorNotFound)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{
        handlers::instructors::testing::create_instructor,
        testing::{create_test_app, ResponseBodyExt},
    };

    #[tokio::test]
    async fn successful() {
        let (app, db, _) = create_test_app().await;
        let id = create_instructor(&db, "B").await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/instructors/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.json().await;

        assert_eq!(body["id"], id);
        assert_eq!(body["name"], "B");
        assert_eq!(body["expertise"], "Systems programming");
        assert!(body["photo"].is_null());
    }

    #[tokio::test]
    async fn unknown() {
        let (app, _, _) = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/instructors/100")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
