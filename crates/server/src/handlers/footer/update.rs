use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{
    footer_page, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use validator::Validate;

use crate::{handlers::UpdateResponse, validation::ValidatedJson};

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum FooterPageUpdateError {
    DatabaseError(DbErr),
}

/// JSON request body.
///
/// The slug is immutable, omitted fields are left untouched.
#[derive(Deserialize, Validate)]
pub(super) struct FooterPageUpdateRequest {
    #[validate(length(min = 1))]
    title: Option<String>,

    content: Option<String>,
}

/// Update footer page text.
pub(super) async fn update(
    Path(slug): Path<String>,
    State(db): State<Arc<DatabaseConnection>>,
    ValidatedJson(request): ValidatedJson<FooterPageUpdateRequest>,
) -> Result<Json<UpdateResponse>, FooterPageUpdateError> {
    if request.title.is_none() && request.content.is_none() {
        return Ok(Json(UpdateResponse { modified_count: 0 }));
    }

    let mut model = footer_page::ActiveModel::default();

    if let Some(title) = request.title {
        model.title = ActiveValue::Set(title);
    }

    if let Some(content) = request.content {
        model.content = ActiveValue::Set(content);
    }

    let result = footer_page::Entity::update_many()
        .set(model)
        .filter(footer_page::Column::Slug.eq(slug))
        .exec(&*db)
        .await?;

    Ok(Json(UpdateResponse {
        modified_count: result.rows_affected,
    }))
}

#[cfg(test)]
mod tests {
    use assert_json::assert_json;
    use axum::{body::Body, http::Request};
    use db::{footer_page, EntityTrait};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::{
        handlers::footer::testing::create_page,
        testing::{create_test_app, RequestBodyExt, ResponseBodyExt},
    };

    #[tokio::test]
    async fn content_update() {
        let (app, db, _) = create_test_app().await;
        create_page(&db, "privacy-policy").await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/footer/privacy-policy")
                    .header("Content-Type", "application/json")
                    .body(Body::from_json(json!({ "content": "Updated." })))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_json!(response.json().await, { "modifiedCount": 1 });

        let pages = footer_page::Entity::find().all(&*db).await.unwrap();

        assert_eq!(pages[0].title, "Privacy Policy");
        assert_eq!(pages[0].content, "Updated.");
    }
}
