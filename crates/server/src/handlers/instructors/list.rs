use std::sync::Arc;

use axum::{extract::State, Json};
use axum_derive_error::ErrorResponse;
use db::{instructor, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use derive_more::{Display, Error, From};

use super::InstructorData;

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum InstructorListError {
    DatabaseError(DbErr),
}

/// List all instructors.
pub(super) async fn list(
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<InstructorData>>, InstructorListError> {
    let instructors = instructor::Entity::find()
        .order_by_asc(instructor::Column::Id)
        .all(&*db)
        .await?;

    Ok(Json(
        instructors.into_iter().map(InstructorData::from).collect(),
    ))
}
