use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Form, Json,
};
use axum_derive_error::ErrorResponse;
use common::config::Config;
use db::{DatabaseConnection, DbErr};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::settlement::{settle, Outcome, Settlement, SettlementError};
use crate::gateway::PaymentGateway;

#[derive(ErrorResponse, Display, Error)]
pub(super) enum PaymentNotificationError {
    DatabaseError(DbErr),

    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "transaction not found")]
    UnknownTransaction,

    #[status(StatusCode::SERVICE_UNAVAILABLE)]
    #[display(fmt = "payments are not configured")]
    PaymentsDisabled,
}

impl From<SettlementError> for PaymentNotificationError {
    fn from(err: SettlementError) -> Self {
        match err {
            SettlementError::Database(err) => PaymentNotificationError::DatabaseError(err),
            SettlementError::UnknownTransaction => PaymentNotificationError::UnknownTransaction,
        }
    }
}

/// Form fields of a gateway notification.
#[derive(Deserialize)]
pub(super) struct NotificationForm {
    /// Gateway-side payment status.
    status: String,

    /// Gateway payment validation identifier.
    #[serde(default)]
    val_id: Option<String>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(super) enum NotificationStatus {
    Applied,
    Duplicate,
    Conflict,
    Unverified,
    Ignored,
}

#[derive(Serialize)]
pub(super) struct NotificationResponse {
    status: NotificationStatus,
}

/// Map a gateway-side payment status to an outcome.
///
/// Intermediate statuses, such as `UNATTEMPTED` or `EXPIRED`, do not carry an outcome.
fn outcome(status: &str) -> Option<Outcome> {
    match status {
        "VALID" | "VALIDATED" => Some(Outcome::Success),
        "FAILED" => Some(Outcome::Fail),
        "CANCELLED" => Some(Outcome::Cancel),
        _ => None,
    }
}

/// Server-to-server payment notification handler.
pub(super) async fn ipn(
    State(db): State<Arc<DatabaseConnection>>,
    Extension(config): Extension<Arc<Config>>,
    Extension(gateway): Extension<Arc<dyn PaymentGateway>>,
    Path(transaction_id): Path<String>,
    Form(form): Form<NotificationForm>,
) -> Result<Json<NotificationResponse>, PaymentNotificationError> {
    let payment_config = config
        .payment
        .as_ref()
        .ok_or(PaymentNotificationError::PaymentsDisabled)?;

    let Some(outcome) = outcome(&form.status) else {
        debug!(transaction = %transaction_id, status = %form.status, "notification ignored");

        return Ok(Json(NotificationResponse {
            status: NotificationStatus::Ignored,
        }));
    };

    let settlement = settle(
        &db,
        payment_config,
        &*gateway,
        &transaction_id,
        outcome,
        form.val_id.as_deref(),
    )
    .await?;

    let status = match settlement {
        Settlement::Applied => NotificationStatus::Applied,
        Settlement::Duplicate => NotificationStatus::Duplicate,
        Settlement::Conflict(_) => NotificationStatus::Conflict,
        Settlement::Unverified => NotificationStatus::Unverified,
    };

    Ok(Json(NotificationResponse { status }))
}

#[cfg(test)]
mod tests {
    use assert_json::assert_json;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
        Router,
    };
    use db::payment::Status;
    use tower::ServiceExt;

    use crate::testing::{
        create_test_app, create_test_app_with, create_transaction, transaction_status,
        MockGateway, RequestBodyExt, ResponseBodyExt,
    };

    async fn notify(app: &Router, id: &str, status: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/payment/ipn/{id}"))
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from_form(&[
                        ("status", status),
                        ("tran_id", id),
                        ("val_id", id),
                    ]))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn valid_payment() {
        let (app, db, _) = create_test_app().await;
        let id = create_transaction(&db, Status::Initiated).await;

        let response = notify(&app, &id, "VALID").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_json!(response.json().await, { "status": "applied" });
        assert_eq!(transaction_status(&db, &id).await, Status::Success);

        let response = notify(&app, &id, "VALID").await;

        assert_json!(response.json().await, { "status": "duplicate" });
    }

    #[tokio::test]
    async fn conflicting_notification() {
        let (app, db, _) = create_test_app().await;
        let id = create_transaction(&db, Status::Canceled).await;

        let response = notify(&app, &id, "FAILED").await;

        assert_json!(response.json().await, { "status": "conflict" });
        assert_eq!(transaction_status(&db, &id).await, Status::Canceled);
    }

    #[tokio::test]
    async fn ignored_status() {
        let (app, db, _) = create_test_app().await;
        let id = create_transaction(&db, Status::Initiated).await;

        let response = notify(&app, &id, "UNATTEMPTED").await;

        assert_json!(response.json().await, { "status": "ignored" });
        assert_eq!(transaction_status(&db, &id).await, Status::Initiated);
    }

    #[tokio::test]
    async fn unverified_payment() {
        let (app, db, _) = create_test_app_with(MockGateway::rejecting()).await;
        let id = create_transaction(&db, Status::Initiated).await;

        let response = notify(&app, &id, "VALID").await;

        assert_json!(response.json().await, { "status": "unverified" });
        assert_eq!(transaction_status(&db, &id).await, Status::Initiated);
    }

    #[tokio::test]
    async fn unknown_transaction() {
        let (app, _, _) = create_test_app().await;

        let response = notify(&app, "TXN_unknown", "FAILED").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
