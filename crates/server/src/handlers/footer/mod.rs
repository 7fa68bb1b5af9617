mod create;
mod delete;
mod details;
mod list;
mod update;

use std::sync::Arc;

use axum::{routing::get, Router};
use db::{footer_page, unix_timestamp, DatabaseConnection};
use serde::Serialize;

/// A single footer page, such as the privacy policy.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FooterPageData {
    id: i64,
    slug: String,
    title: String,
    content: String,
    created_at: i64,
}

impl From<footer_page::Model> for FooterPageData {
    fn from(model: footer_page::Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug,
            title: model.title,
            content: model.content,
            created_at: unix_timestamp(model.created_at),
        }
    }
}

/// Pages are addressed by their slug, so the web app can link to `/footer/privacy-policy`.
pub(crate) fn routes() -> Router<Arc<DatabaseConnection>> {
    Router::new()
        .route("/", get(list::list).post(create::create))
        .route(
            "/:slug",
            get(details::details)
                .put(update::update)
                .delete(delete::delete),
        )
}

#[cfg(test)]
pub(super) mod testing {
    use db::{current_timestamp, footer_page, ActiveValue, DatabaseConnection, EntityTrait};

    /// Store a footer page with the provided slug.
    pub(crate) async fn create_page(db: &DatabaseConnection, slug: &str) {
        footer_page::Entity::insert(footer_page::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            title: ActiveValue::Set(String::from("Privacy Policy")),
            content: ActiveValue::Set(String::from("We do not sell your data.")),
            created_at: ActiveValue::Set(current_timestamp()),
            ..Default::default()
        })
        .exec_without_returning(db)
        .await
        .expect("unable to create footer page");
    }
}
