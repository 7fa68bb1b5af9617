use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use axum_derive_error::ErrorResponse;
use db::{
    current_timestamp, footer_page, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QuerySelect, SelectExt, TransactionErrorExt, TransactionTrait,
};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use validator::Validate;

use crate::{
    handlers::InsertResponse,
    validation::{ValidatedJson, SLUG_REGEX},
};

/// Errors that may occur during the footer page creation process.
#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum FooterPageCreateError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// Another page already uses the provided slug.
    #[status(StatusCode::CONFLICT)]
    #[display(fmt = "slug is already taken")]
    SlugTaken,
}

/// JSON request body.
#[derive(Deserialize, Validate)]
pub(super) struct FooterPageCreateRequest {
    #[validate(regex = "SLUG_REGEX")]
    slug: String,

    #[validate(length(min = 1))]
    title: String,

    content: String,
}

/// Publish a new footer page.
pub(super) async fn create(
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<FooterPageCreateRequest>,
) -> Result<Json<InsertResponse>, FooterPageCreateError> {
    db.transaction(|txn| {
        Box::pin(async move {
            let slug_taken = footer_page::Entity::find()
                .select_only()
                .filter(footer_page::Column::Slug.eq(&request.slug))
                .exists(txn)
                .await?;

            if slug_taken {
                return Err(FooterPageCreateError::SlugTaken);
            }

            let result = footer_page::Entity::insert(footer_page::ActiveModel {
                slug: ActiveValue::Set(request.slug),
                title: ActiveValue::Set(request.title),
                content: ActiveValue::Set(request.content),
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
    use db::{footer_page, EntityTrait};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{
        handlers::footer::testing::create_page,
        testing::{create_test_app, RequestBodyExt, ResponseBodyExt},
    };

    async fn publish(app: &Router, body: Value) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/footer")
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

        let response = publish(
            &app,
            json!({
                "slug": "terms-of-use",
                "title": "Terms of Use",
                "content": "Be nice.",
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_json!(response.json().await, {
            "insertedId": validators::i64(|_| Ok(()))
        });

        let pages = footer_page::Entity::find().all(&*db).await.unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].slug, "terms-of-use");
    }

    #[tokio::test]
    async fn taken_slug() {
        let (app, db, _) = create_test_app().await;
        create_page(&db, "privacy-policy").await;

        let response = publish(
            &app,
            json!({
                "slug": "privacy-policy",
                "title": "Privacy",
                "content": "",
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(footer_page::Entity::find().all(&*db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalid_slug() {
        let (app, db, _) = create_test_app().await;

        let response = publish(
            &app,
            json!({
                "slug": "Privacy Policy",
                "title": "Privacy",
                "content": "",
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(footer_page::Entity::find().all(&*db).await.unwrap().is_empty());
    }
}
