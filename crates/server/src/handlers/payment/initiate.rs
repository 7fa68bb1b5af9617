use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};
use axum_derive_error::ErrorResponse;
use common::config::Config;
use db::{
    current_timestamp,
    payment::{self, Status},
    ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use validator::Validate;

use crate::{
    gateway::{CallbackUrls, Customer, GatewayError, PaymentGateway, Product, SessionDescriptor},
    validation::{positive_amount, ValidatedJson, PHONE_REGEX},
};

/// Errors that may occur during the payment initiation.
#[derive(ErrorResponse, Display, From, Error)]
pub(super) enum PaymentInitiateError {
    /// Database-related error.
    DatabaseError(DbErr),

    /// Gateway refused to create a payment session or was unreachable.
    #[status(StatusCode::BAD_GATEWAY)]
    #[display(fmt = "unable to create payment session: {}", _0)]
    GatewayError(GatewayError),

    /// Payment gateway configuration is missing.
    #[status(StatusCode::SERVICE_UNAVAILABLE)]
    #[display(fmt = "payments are not configured")]
    PaymentsDisabled,
}

/// JSON request body.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(super) struct PaymentInitiateRequest {
    /// Purchased course identifier.
    #[validate(length(min = 1))]
    course_id: String,

    /// Purchased course title.
    #[validate(length(min = 1))]
    course_title: String,

    /// Amount to charge.
    #[validate(custom = "positive_amount")]
    amount: f64,

    /// Buyer's name.
    #[validate(length(min = 1))]
    name: String,

    /// Buyer's email address.
    #[validate(email)]
    email: String,

    /// Buyer's phone number.
    #[validate(regex = "PHONE_REGEX")]
    phone: String,

    /// Buyer's postal address.
    #[validate(length(min = 1))]
    address: String,
}

/// JSON response body.
#[derive(Serialize)]
pub(super) struct PaymentInitiateResponse {
    /// Hosted checkout page URL.
    url: String,
}

/// Payment initiation handler.
///
/// Registers a payment session with the gateway and stores a new transaction.
/// Transactions for which the gateway refused to create a session are stored
/// with a [`Status::Failed`] status right away.
pub(super) async fn initiate(
    State(db): State<Arc<DatabaseConnection>>,
    Extension(config): Extension<Arc<Config>>,
    Extension(gateway): Extension<Arc<dyn PaymentGateway>>,
    ValidatedJson(request): ValidatedJson<PaymentInitiateRequest>,
) -> Result<Json<PaymentInitiateResponse>, PaymentInitiateError> {
    let payment_config = config
        .payment
        .as_ref()
        .ok_or(PaymentInitiateError::PaymentsDisabled)?;

    let transaction_id = payment::generate_id();

    let descriptor = SessionDescriptor {
        transaction_id: transaction_id.clone(),
        amount: request.amount,
        currency: payment_config.currency.clone(),
        customer: Customer {
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
        },
        product: Product {
            id: request.course_id,
            name: request.course_title,
        },
        callbacks: CallbackUrls::for_transaction(&payment_config.backend_url, &transaction_id),
    };

    let session = gateway.create_session(&descriptor).await;

    let (status, resolved_at) = match session {
        Ok(_) => (Status::Initiated, None),
        Err(_) => (Status::Failed, Some(current_timestamp())),
    };

    let SessionDescriptor {
        amount,
        currency,
        customer,
        product,
        ..
    } = descriptor;

    payment::Entity::insert(payment::ActiveModel {
        id: ActiveValue::Set(transaction_id.clone()),
        status: ActiveValue::Set(status),
        course_id: ActiveValue::Set(product.id),
        course_title: ActiveValue::Set(product.name),
        amount: ActiveValue::Set(amount),
        currency: ActiveValue::Set(currency),
        name: ActiveValue::Set(customer.name),
        email: ActiveValue::Set(customer.email),
        phone: ActiveValue::Set(customer.phone),
        address: ActiveValue::Set(customer.address),
        created_at: ActiveValue::Set(current_timestamp()),
        resolved_at: ActiveValue::Set(resolved_at),
    })
    .exec_without_returning(&*db)
    .await
    .map_err(|err| {
        error!(transaction = %transaction_id, %err, "unable to store transaction");
        err
    })?;

    match session {
        Ok(session) => {
            info!(transaction = %transaction_id, "payment session created");
            Ok(Json(PaymentInitiateResponse { url: session.url }))
        }
        Err(err) => {
            error!(transaction = %transaction_id, %err, "unable to create payment session");
            Err(err.into())
        }
    }
}
