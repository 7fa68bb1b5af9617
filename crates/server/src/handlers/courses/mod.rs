mod create;
mod delete;
mod details;
mod list;
mod update;

use std::sync::Arc;

use axum::{routing::get, Router};
use db::{course, unix_timestamp, DatabaseConnection};
use serde::Serialize;

/// A single course data.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CourseData {
    id: i64,
    title: String,
    description: Option<String>,
    price: f64,
    category_id: Option<i64>,
    instructor: Option<String>,
    image: Option<String>,

    /// Publication timestamp, in seconds since the Unix epoch.
    created_at: i64,
}

impl From<course::Model> for CourseData {
    fn from(model: course::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            price: model.price,
            category_id: model.category_id,
            instructor: model.instructor,
            image: model.image,
            created_at: unix_timestamp(model.created_at),
        }
    }
}

pub(crate) fn routes() -> Router<Arc<DatabaseConnection>> {
    Router::new()
        .route("/", get(list::list).post(create::create))
        .route(
            "/:id",
            get(details::details)
                .put(update::update)
                .delete(delete::delete),
        )
}

#[cfg(test)]
pub(super) mod testing {
    use db::{category, course, current_timestamp, ActiveValue, DatabaseConnection, EntityTrait};

    /// Create a category with a single course and return both identifiers.
    pub(crate) async fn create_test_env(db: &DatabaseConnection) -> (i64, i64) {
        let category_id = category::Entity::insert(category::ActiveModel {
            name: ActiveValue::Set(String::from("Programming")),
            status: ActiveValue::Set(String::from("active")),
            created_at: ActiveValue::Set(current_timestamp()),
            ..Default::default()
        })
        .exec(db)
        .await
        .expect("unable to create category")
        .last_insert_id;

        let course_id = course::Entity::insert(course::ActiveModel {
            title: ActiveValue::Set(String::from("Go Basics")),
            price: ActiveValue::Set(500.0),
            category_id: ActiveValue::Set(Some(category_id)),
            created_at: ActiveValue::Set(current_timestamp()),
            ..Default::default()
        })
        .exec(db)
        .await
        .expect("unable to create course")
        .last_insert_id;

        (category_id, course_id)
    }
}
