use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{footer_page, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use derive_more::{Display, Error, From};

use super::FooterPageData;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum FooterPageDetailsError {
    DatabaseError(DbErr),

    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "page not found")]
    PageNotFound,
}

/// Footer page handler.
pub(super) async fn details(
    Path(slug): Path<String>,
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<FooterPageData>, FooterPageDetailsError> {
    footer_page::Entity::find()
        .filter(footer_page::Column::Slug.eq(slug))
        .one(&*db)
        .await?
        .map(|model| Json(model.into()))
        .ok_or(FooterPageDetailsError::PageNotFound)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{
        handlers::footer::testing::create_page,
        testing::{create_test_app, ResponseBodyExt},
    };

    async fn get(app: &Router, slug: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/footer/{slug}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        (response.status(), response.json().await)
    }

    #[tokio::test]
    async fn by_slug() {
        let (app, db, _) = create_test_app().await;
        create_page(&db, "privacy-policy").await;

        let (status, body) = get(&app, "privacy-policy").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slug"], "privacy-policy");
        assert_eq!(body["title"], "Privacy Policy");
        assert_eq!(body["content"], "We do not sell your data.");

        let (status, _) = get(&app, "refund-policy").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
