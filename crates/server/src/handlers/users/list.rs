use std::sync::Arc;

use axum::{extract::State, Json};
use axum_derive_error::ErrorResponse;
use db::{unix_timestamp, user, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use derive_more::{Display, Error, From};
use serde::Serialize;

/// A single user data.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserData {
    id: i64,
    email: String,
    name: Option<String>,
    photo: Option<String>,
    role: String,

    /// Registration timestamp, in seconds since the Unix epoch.
    created_at: i64,
}

impl From<user::Model> for UserData {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            photo: model.photo,
            role: model.role,
            created_at: unix_timestamp(model.created_at),
        }
    }
}

#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum UserListError {
    DatabaseError(DbErr),
}

/// List all registered users.
pub(super) async fn list(
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<UserData>>, UserListError> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(&*db)
        .await?;

    Ok(Json(users.into_iter().map(UserData::from).collect()))
}
