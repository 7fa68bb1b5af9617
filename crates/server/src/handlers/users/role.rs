use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{
    sea_query::Expr, user, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{handlers::UpdateResponse, validation::ValidatedJson};

/// Errors that may occur during the role lookup.
#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum UserRoleError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// No user is registered with the provided email address.
    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "user not found")]
    UserNotFound,
}

/// Query string parameters.
#[derive(Deserialize)]
pub(super) struct UserRoleQuery {
    email: String,
}

/// JSON response body.
#[derive(Serialize)]
pub(super) struct UserRoleResponse {
    role: String,
}

/// Get a role of the user with the provided email address.
pub(super) async fn role(
    State(db): State<Arc<DatabaseConnection>>,
    Query(query): Query<UserRoleQuery>,
) -> Result<Json<UserRoleResponse>, UserRoleError> {
    let role = user::Entity::find()
        .select_only()
        .column(user::Column::Role)
        .filter(user::Column::Email.eq(query.email))
        .into_tuple::<String>()
        .one(&*db)
        .await?
        .ok_or(UserRoleError::UserNotFound)?;

    Ok(Json(UserRoleResponse { role }))
}

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum UserRoleUpdateError {
    DatabaseError(DbErr),
}

/// JSON request body.
#[derive(Deserialize, Validate)]
pub(super) struct UserRoleUpdateRequest {
    /// New role value, e.g. `admin` or `instructor`.
    #[validate(length(min = 1, max = 32))]
    role: String,
}

/// Assign a new role to a user.
pub(super) async fn update(
    Path(id): Path<i64>,
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<UserRoleUpdateRequest>,
) -> Result<Json<UpdateResponse>, UserRoleUpdateError> {
    let result = user::Entity::update_many()
        .col_expr(user::Column::Role, Expr::value(request.role))
        .filter(user::Column::Id.eq(id))
        .exec(&*db)
        .await?;

    Ok(Json(UpdateResponse {
        modified_count: result.rows_affected,
    }))
}

#[cfg(test)]
mod tests {
    use assert_json::assert_json;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::{current_timestamp, user, ActiveValue, DatabaseConnection, EntityTrait};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::testing::{create_test_app, RequestBodyExt, ResponseBodyExt};

    async fn create_test_env(db: &DatabaseConnection) -> i64 {
        user::Entity::insert(user::ActiveModel {
            email: ActiveValue::Set(String::from("a@x.com")),
            role: ActiveValue::Set(String::from(user::DEFAULT_ROLE)),
            created_at: ActiveValue::Set(current_timestamp()),
            ..Default::default()
        })
        .exec(db)
        .await
        .expect("unable to create user")
        .last_insert_id
    }

    fn role_request(email: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(format!("/users/role?email={email}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn update_and_fetch() {
        let (app, db, _) = create_test_app().await;
        let id = create_test_env(&db).await;

        let response = app.clone().oneshot(role_request("a@x.com")).await.unwrap();

        assert_json!(response.json().await, { "role": "student" });

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/users/{id}/role"))
                    .header("Content-Type", "application/json")
                    .body(Body::from_json(json!({ "role": "admin" })))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_json!(response.json().await, { "modifiedCount": 1 });

        let response = app.oneshot(role_request("a@x.com")).await.unwrap();

        assert_json!(response.json().await, { "role": "admin" });
    }

    #[tokio::test]
    async fn unknown_user() {
        let (app, db, _) = create_test_app().await;
        create_test_env(&db).await;

        let response = app.clone().oneshot(role_request("b@x.com")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/users/100/role")
                    .header("Content-Type", "application/json")
                    .body(Body::from_json(json!({ "role": "admin" })))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_json!(response.json().await, { "modifiedCount": 0 });
    }
}
