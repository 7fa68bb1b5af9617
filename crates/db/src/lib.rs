pub mod category;
pub mod course;
pub mod footer_page;
pub mod instructor;
pub mod payment;
pub mod review;
pub mod slider;
pub mod user;

use std::error::Error;

use async_trait::async_trait;
pub use sea_orm::{
    sea_query, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectOptions, ConnectionTrait,
    Database, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait, StatementBuilder, TransactionError, TransactionTrait,
};
pub use time::{OffsetDateTime, PrimitiveDateTime};

/// Get current UTC time in a form suitable for timestamp columns.
pub fn current_timestamp() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();

    PrimitiveDateTime::new(now.date(), now.time())
}

/// Convert a timestamp column value into a UNIX timestamp.
pub fn unix_timestamp(value: PrimitiveDateTime) -> i64 {
    value.assume_utc().unix_timestamp()
}

pub trait TransactionErrorExt<T, E> {
    /// Convert transaction [`Result`] into a [`Result`] with
    /// a custom error.
    fn into_raw_result(self) -> Result<T, E>;
}

impl<T, E> TransactionErrorExt<T, E> for Result<T, TransactionError<E>>
where
    E: Error + From<DbErr>,
{
    fn into_raw_result(self) -> Result<T, E> {
        match self {
            Ok(val) => Ok(val),
            Err(TransactionError::Connection(err)) => Err(err.into()),
            Err(TransactionError::Transaction(err)) => Err(err),
        }
    }
}

#[async_trait]
pub trait SelectExt {
    /// Check if at least one record that satisfies a query.
    async fn exists<C: ConnectionTrait + Send>(self, db: &C) -> Result<bool, DbErr>;
}

#[async_trait]
impl<T> SelectExt for T
where
    T: QueryTrait<QueryStatement = sea_query::SelectStatement> + Send,
{
    async fn exists<C: ConnectionTrait + Send>(self, db: &C) -> Result<bool, DbErr> {
        use sea_query::{Expr, Query};

        let mut query = self.into_query();

        // Fix failing tests with SQLite by returning at least some expr
        query.expr(1);

        let stmt = StatementBuilder::build(
            Query::select().expr(Expr::exists(query)),
            &db.get_database_backend(),
        );

        match db.query_one(stmt).await? {
            Some(row) => row.try_get_by_index(0),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{
        ActiveValue, ColumnTrait, ConnectionTrait, Database, EntityTrait, QueryFilter, QuerySelect,
        Schema,
    };

    use crate::{current_timestamp, unix_timestamp, user, SelectExt};

    #[tokio::test]
    async fn exists() {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("unable to create test database");

        let backend = db.get_database_backend();
        let table = Schema::new(backend).create_table_from_entity(user::Entity);
        db.execute(backend.build(&table)).await.unwrap();

        let query = || {
            user::Entity::find()
                .select_only()
                .filter(user::Column::Email.eq("a@x.com"))
        };

        assert!(!query().exists(&db).await.unwrap());

        user::Entity::insert(user::ActiveModel {
            email: ActiveValue::Set(String::from("a@x.com")),
            role: ActiveValue::Set(String::from(user::DEFAULT_ROLE)),
            created_at: ActiveValue::Set(current_timestamp()),
            ..Default::default()
        })
        .exec_without_returning(&db)
        .await
        .unwrap();

        assert!(query().exists(&db).await.unwrap());
    }

    #[test]
    fn timestamps() {
        let now = current_timestamp();

        assert_eq!(unix_timestamp(now), now.assume_utc().unix_timestamp());
        assert!(unix_timestamp(now) > 1_672_531_200);
    }
}
