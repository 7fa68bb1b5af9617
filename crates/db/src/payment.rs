//! Course purchase transaction.
//!
//! A transaction is stored for every purchase attempt registered with the payment gateway.
//! Each transaction starts in the [`Status::Initiated`] state and is moved to exactly one
//! terminal state when the gateway reports the outcome. Terminal states are final,
//! see [`resolve`] for the details on how the transition is performed.

use rand::{
    distributions::{Alphanumeric, DistString},
    thread_rng,
};
use sea_orm::{entity::prelude::*, sea_query::Expr, ConnectionTrait, QuerySelect};
use serde::Serialize;

/// Prefix of every transaction identifier.
pub const ID_PREFIX: &str = "TXN_";

/// Length of the random part of a transaction identifier.
pub const ID_LENGTH: usize = 32;

/// Payment transaction model.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_transactions")]
pub struct Model {
    /// Unique transaction identifier shared with the payment gateway.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Current transaction status.
    pub status: Status,

    /// Purchased course identifier.
    pub course_id: String,

    /// Purchased course title, as displayed on the checkout page.
    pub course_title: String,

    /// Total amount charged.
    pub amount: f64,

    /// Currency code of the amount.
    pub currency: String,

    /// Buyer's name.
    pub name: String,

    /// Buyer's email address.
    pub email: String,

    /// Buyer's phone number.
    pub phone: String,

    /// Buyer's postal address.
    pub address: String,

    /// Transaction creation timestamp.
    pub created_at: TimeDateTime,

    /// Timestamp of a transition to a terminal status.
    pub resolved_at: Option<TimeDateTime>,
}

/// Transaction status.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[sea_orm(num_value = 0)]
    Initiated,
    #[sea_orm(num_value = 1)]
    Success,
    #[sea_orm(num_value = 2)]
    Failed,
    #[sea_orm(num_value = 3)]
    Canceled,
}

impl Status {
    /// Check if no further transitions are allowed from this status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Initiated)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Result of an attempt to move a transaction into a terminal status.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Transaction was moved from [`Status::Initiated`] to the requested status.
    Applied,

    /// Transaction already had the requested status.
    Duplicate,

    /// Transaction already had a different terminal status, which was kept.
    Conflict(Status),

    /// No transaction with the provided identifier exists.
    Unknown,
}

/// Generate new random transaction identifier.
///
/// ## Example
///
/// ```
/// use db::payment::{generate_id, ID_LENGTH, ID_PREFIX};
///
/// let id = generate_id();
/// assert!(id.starts_with(ID_PREFIX));
/// assert_eq!(id.len(), ID_PREFIX.len() + ID_LENGTH);
/// ```
pub fn generate_id() -> String {
    let token = Alphanumeric.sample_string(&mut thread_rng(), ID_LENGTH);

    format!("{ID_PREFIX}{token}")
}

/// Move an initiated transaction into the provided terminal status.
///
/// The status change is a single conditional `UPDATE` statement, that only matches rows
/// still in the [`Status::Initiated`] state, so concurrent calls for the same transaction
/// result in at most one [`Resolution::Applied`] value.
pub async fn resolve<C: ConnectionTrait>(
    db: &C,
    id: &str,
    outcome: Status,
) -> Result<Resolution, DbErr> {
    debug_assert!(outcome.is_terminal());

    let result = Entity::update_many()
        .col_expr(Column::Status, Expr::value(outcome))
        .col_expr(Column::ResolvedAt, Expr::value(crate::current_timestamp()))
        .filter(Column::Id.eq(id))
        .filter(Column::Status.eq(Status::Initiated))
        .exec(db)
        .await?;

    if result.rows_affected > 0 {
        return Ok(Resolution::Applied);
    }

    let current = Entity::find_by_id(id.to_owned())
        .select_only()
        .column(Column::Status)
        .into_tuple::<Status>()
        .one(db)
        .await?;

    Ok(match current {
        None => Resolution::Unknown,
        Some(status) if status == outcome => Resolution::Duplicate,
        Some(status) => Resolution::Conflict(status),
    })
}
