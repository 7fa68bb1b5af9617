use std::sync::Arc;

use axum::{extract::State, Json};
use axum_derive_error::ErrorResponse;
use db::{footer_page, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use derive_more::{Display, Error, From};

use super::FooterPageData;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum FooterPageListError {
    DatabaseError(DbErr),
}

/// List all footer pages.
pub(super) async fn list(
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<FooterPageData>>, FooterPageListError> {
    let pages = footer_page::Entity::find()
        .order_by_asc(footer_page::Column::Id)
        .all(&*db)
        .await?;

    Ok(Json(pages.into_iter().map(FooterPageData::from).collect()))
}
