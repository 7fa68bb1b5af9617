pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_users_table;
mod m20240601_000002_create_sliders_table;
mod m20240601_000003_create_categories_table;
mod m20240601_000004_create_courses_table;
mod m20240601_000005_create_payment_transactions_table;
mod m20240601_000006_create_instructors_table;
mod m20240601_000007_create_reviews_table;
mod m20240601_000008_create_footer_pages_table;

pub(crate) use m20240601_000003_create_categories_table::Categories;
pub(crate) use m20240601_000004_create_courses_table::Courses;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users_table::Migration),
            Box::new(m20240601_000002_create_sliders_table::Migration),
            Box::new(m20240601_000003_create_categories_table::Migration),
            Box::new(m20240601_000004_create_courses_table::Migration),
            Box::new(m20240601_000005_create_payment_transactions_table::Migration),
            Box::new(m20240601_000006_create_instructors_table::Migration),
            Box::new(m20240601_000007_create_reviews_table::Migration),
            Box::new(m20240601_000008_create_footer_pages_table::Migration),
        ]
    }
}
