//! Registered user.
//!
//! Users are created by the web app right after the sign-up flow of an external
//! identity provider, so only the profile data is stored here. The role value
//! is managed by administrators and consumed by the web app.

use sea_orm::entity::prelude::*;

/// Role assigned to every newly registered user.
pub const DEFAULT_ROLE: &str = "student";

/// User model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: String,
    pub created_at: TimeDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
