use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_derive_error::ErrorResponse;
use db::{
    payment::{self, Status},
    unix_timestamp, DatabaseConnection, DbErr, EntityTrait,
};
use derive_more::{Display, Error, From};
use serde::Serialize;

/// Errors that may occur during the transaction lookup.
#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum TransactionDetailsError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// Requested transaction was not found.
    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "transaction not found")]
    TransactionNotFound,
}

/// Stored transaction data.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TransactionData {
    id: String,
    status: Status,
    course_id: String,
    course_title: String,
    amount: f64,
    currency: String,
    name: String,
    email: String,
    phone: String,
    address: String,

    /// Creation timestamp, in seconds since the Unix epoch.
    created_at: i64,

    /// Resolution timestamp, in seconds since the Unix epoch.
    resolved_at: Option<i64>,
}

impl From<payment::Model> for TransactionData {
    fn from(model: payment::Model) -> Self {
        Self {
            id: model.id,
            status: model.status,
            course_id: model.course_id,
            course_title: model.course_title,
            amount: model.amount,
            currency: model.currency,
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            created_at: unix_timestamp(model.created_at),
            resolved_at: model.resolved_at.map(unix_timestamp),
        }
    }
}

/// Transaction details handler.
///
/// Used by the web app landing pages to display the payment result.
pub(super) async fn details(
    Path(transaction_id): Path<String>,
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<TransactionData>, TransactionDetailsError> {
    payment::Entity::find_by_id(transaction_id)
        .one(&*db)
        .await?
        .map(|model| Json(model.into()))
        .ok_or(TransactionDetailsError::TransactionNotFound)
}
