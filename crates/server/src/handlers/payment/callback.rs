use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Extension, Form,
};
use axum_derive_error::ErrorResponse;
use common::config::Config;
use db::DatabaseConnection;
use derive_more::{Display, Error};
use serde::Deserialize;
use tracing::error;

use super::settlement::{settle, Outcome, SettlementError};
use crate::gateway::PaymentGateway;

#[derive(ErrorResponse, Display, Error)]
pub(super) enum PaymentCallbackError {
    #[status(StatusCode::NOT_FOUND)]
    #[display(fmt = "transaction not found")]
    UnknownTransaction,

    #[status(StatusCode::SERVICE_UNAVAILABLE)]
    #[display(fmt = "payments are not configured")]
    PaymentsDisabled,
}

/// Form fields posted by the gateway along with the browser redirect.
#[derive(Deserialize)]
pub(super) struct CallbackForm {
    /// Gateway payment validation identifier.
    #[serde(default)]
    val_id: Option<String>,
}

pub(super) async fn success(
    State(db): State<Arc<DatabaseConnection>>,
    Extension(config): Extension<Arc<Config>>,
    Extension(gateway): Extension<Arc<dyn PaymentGateway>>,
    Path(transaction_id): Path<String>,
    form: Option<Form<CallbackForm>>,
) -> Result<Response, PaymentCallbackError> {
    callback(db, config, gateway, transaction_id, Outcome::Success, form).await
}

pub(super) async fn fail(
    State(db): State<Arc<DatabaseConnection>>,
    Extension(config): Extension<Arc<Config>>,
    Extension(gateway): Extension<Arc<dyn PaymentGateway>>,
    Path(transaction_id): Path<String>,
    form: Option<Form<CallbackForm>>,
) -> Result<Response, PaymentCallbackError> {
    callback(db, config, gateway, transaction_id, Outcome::Fail, form).await
}

pub(super) async fn cancel(
    State(db): State<Arc<DatabaseConnection>>,
    Extension(config): Extension<Arc<Config>>,
    Extension(gateway): Extension<Arc<dyn PaymentGateway>>,
    Path(transaction_id): Path<String>,
    form: Option<Form<CallbackForm>>,
) -> Result<Response, PaymentCallbackError> {
    callback(db, config, gateway, transaction_id, Outcome::Cancel, form).await
}

/// Apply the reported outcome and send the browser back to the web app.
///
/// Storage errors are not exposed to the browser, which is sent to the generic
/// failure page instead.
async fn callback(
    db: Arc<DatabaseConnection>,
    config: Arc<Config>,
    gateway: Arc<dyn PaymentGateway>,
    transaction_id: String,
    outcome: Outcome,
    form: Option<Form<CallbackForm>>,
) -> Result<Response, PaymentCallbackError> {
    let payment_config = config
        .payment
        .as_ref()
        .ok_or(PaymentCallbackError::PaymentsDisabled)?;

    let validation_id = form.and_then(|Form(form)| form.val_id);

    let landing = match settle(
        &db,
        payment_config,
        &*gateway,
        &transaction_id,
        outcome,
        validation_id.as_deref(),
    )
    .await
    {
        Ok(settlement) => settlement.landing(outcome),
        Err(SettlementError::UnknownTransaction) => {
            return Err(PaymentCallbackError::UnknownTransaction)
        }
        Err(SettlementError::Database(err)) => {
            error!(transaction = %transaction_id, %err, "unable to store payment outcome");
            Outcome::Fail
        }
    };

    Ok(landing.redirect(&payment_config.frontend_url, &transaction_id))
}
