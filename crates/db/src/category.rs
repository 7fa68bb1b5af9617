//! Course category.

use sea_orm::entity::prelude::*;

/// Course category model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique category identifier.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Free-form publication status, e.g. `active` or `inactive`.
    pub status: String,

    /// Optional cover image URL.
    pub image: Option<String>,

    /// Category creation timestamp.
    pub created_at: TimeDateTime,
}

/// Category model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
