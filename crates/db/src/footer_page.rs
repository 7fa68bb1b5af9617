//! Static footer content, such as the privacy policy or the terms of use.

use sea_orm::entity::prelude::*;

/// Footer page model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "footer_pages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// URL-friendly page key, e.g. `privacy-policy`.
    #[sea_orm(unique)]
    pub slug: String,

    pub title: String,

    /// Page body, rendered by the web app.
    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub created_at: TimeDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
