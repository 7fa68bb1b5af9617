//! Student review of a course.

use sea_orm::entity::prelude::*;

/// Course review model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    /// Unique review identifier.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Reviewed course identifier.
    pub course_id: i64,

    /// Reviewer's display name.
    pub name: String,

    /// Reviewer's photo URL.
    pub photo: Option<String>,

    /// Rating, from 1 to 5.
    pub rating: i16,

    /// Review text.
    pub comment: String,

    /// Review creation timestamp.
    pub created_at: TimeDateTime,
}

/// Review model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
