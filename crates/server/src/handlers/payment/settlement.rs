use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use common::config::Payment;
use db::{
    payment::{self, Resolution, Status},
    DatabaseConnection, DbErr, EntityTrait,
};
use derive_more::{Display, Error, From};
use tracing::{debug, error, info, warn};

use crate::gateway::PaymentGateway;

/// Payment outcome reported by the gateway.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Outcome {
    Success,
    Fail,
    Cancel,
}

impl Outcome {
    /// Terminal transaction status matching this outcome.
    pub fn status(self) -> Status {
        match self {
            Outcome::Success => Status::Success,
            Outcome::Fail => Status::Failed,
            Outcome::Cancel => Status::Canceled,
        }
    }

    /// Outcome matching a terminal transaction status.
    pub fn from_status(status: Status) -> Option<Self> {
        match status {
            Status::Initiated => None,
            Status::Success => Some(Outcome::Success),
            Status::Failed => Some(Outcome::Fail),
            Status::Canceled => Some(Outcome::Cancel),
        }
    }

    /// Path segment used in both callback and web app URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Fail => "fail",
            Outcome::Cancel => "cancel",
        }
    }

    /// Redirect the browser to the web app page for this outcome.
    pub fn redirect(self, frontend_url: &str, transaction_id: &str) -> Response {
        let location = format!(
            "{}/payment/{}?tranId={transaction_id}",
            frontend_url.trim_end_matches('/'),
            self.as_str()
        );

        (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
    }
}

/// Result of an outcome report processing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Settlement {
    /// Transaction was moved to the reported status.
    Applied,

    /// Transaction already had the reported status.
    Duplicate,

    /// Transaction already had a different terminal status, report was rejected.
    Conflict(Status),

    /// Successful payment report was not confirmed by the gateway.
    Unverified,
}

impl Settlement {
    /// Get the outcome the web app should display after processing a report.
    pub fn landing(self, reported: Outcome) -> Outcome {
        match self {
            Settlement::Applied | Settlement::Duplicate => reported,
            Settlement::Conflict(status) => Outcome::from_status(status).unwrap_or(Outcome::Fail),
            Settlement::Unverified => Outcome::Fail,
        }
    }
}

#[derive(Debug, Display, From, Error)]
pub(super) enum SettlementError {
    Database(DbErr),

    #[display(fmt = "transaction not found")]
    UnknownTransaction,
}

/// Apply a payment outcome reported by the gateway to a stored transaction.
///
/// Successful payments are confirmed with the gateway first when callback
/// verification is enabled, since callback URLs are publicly reachable.
pub(super) async fn settle(
    db: &DatabaseConnection,
    config: &Payment,
    gateway: &dyn PaymentGateway,
    transaction_id: &str,
    outcome: Outcome,
    validation_id: Option<&str>,
) -> Result<Settlement, SettlementError> {
    let Some(transaction) = payment::Entity::find_by_id(transaction_id.to_owned())
        .one(db)
        .await?
    else {
        warn!(transaction = %transaction_id, outcome = outcome.as_str(), "outcome reported for an unknown transaction");
        return Err(SettlementError::UnknownTransaction);
    };

    if outcome == Outcome::Success
        && config.verify_callbacks
        && transaction.status == Status::Initiated
        && !verify(gateway, &transaction, validation_id).await
    {
        warn!(transaction = %transaction_id, "successful payment was not confirmed by the gateway");
        return Ok(Settlement::Unverified);
    }

    let settlement = match payment::resolve(db, transaction_id, outcome.status()).await? {
        Resolution::Applied => {
            info!(transaction = %transaction_id, outcome = outcome.as_str(), "transaction resolved");
            Settlement::Applied
        }
        Resolution::Duplicate => {
            debug!(transaction = %transaction_id, outcome = outcome.as_str(), "duplicate outcome report");
            Settlement::Duplicate
        }
        Resolution::Conflict(current) => {
            warn!(
                transaction = %transaction_id,
                current = ?current,
                outcome = outcome.as_str(),
                "conflicting outcome report rejected"
            );
            Settlement::Conflict(current)
        }
        Resolution::Unknown => {
            warn!(transaction = %transaction_id, "transaction disappeared during resolution");
            return Err(SettlementError::UnknownTransaction);
        }
    };

    Ok(settlement)
}

/// Check that the gateway reports the transaction as paid in full.
async fn verify(
    gateway: &dyn PaymentGateway,
    transaction: &payment::Model,
    validation_id: Option<&str>,
) -> bool {
    let Some(validation_id) = validation_id else {
        return false;
    };

    match gateway.validate(validation_id).await {
        Ok(validation) => {
            validation.valid
                && validation.transaction_id == transaction.id
                && validation
                    .amount
                    .map_or(true, |amount| (amount - transaction.amount).abs() < 0.01)
        }
        Err(err) => {
            error!(transaction = %transaction.id, %err, "unable to validate payment");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use db::payment::Status;

    use super::{Outcome, Settlement};

    #[test]
    fn landing_pages() {
        assert_eq!(Settlement::Applied.landing(Outcome::Cancel), Outcome::Cancel);
        assert_eq!(Settlement::Duplicate.landing(Outcome::Success), Outcome::Success);
        assert_eq!(
            Settlement::Conflict(Status::Success).landing(Outcome::Fail),
            Outcome::Success
        );
        assert_eq!(Settlement::Unverified.landing(Outcome::Success), Outcome::Fail);
    }

    #[test]
    fn statuses() {
        for outcome in [Outcome::Success, Outcome::Fail, Outcome::Cancel] {
            assert_eq!(Outcome::from_status(outcome.status()), Some(outcome));
        }

        assert_eq!(Outcome::from_status(Status::Initiated), None);
    }
}
