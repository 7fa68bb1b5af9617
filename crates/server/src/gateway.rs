//! Payment gateway client.
//!
//! The gateway hosts the checkout page users are redirected to and reports
//! payment outcomes back to the API server via callbacks. API handlers only
//! interact with the gateway through the [`PaymentGateway`] trait, which allows
//! replacing the real HTTP client in tests.

mod sslcommerz;

use axum::async_trait;
use derive_more::{Display, Error, From};

pub(crate) use sslcommerz::SslCommerz;

/// Buyer profile passed to the gateway.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Purchased product metadata.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Product {
    /// Course identifier.
    pub id: String,

    /// Course title.
    pub name: String,
}

/// URLs the gateway reports payment outcomes to.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CallbackUrls {
    pub success: String,
    pub fail: String,
    pub cancel: String,

    /// Server-to-server notification URL.
    pub notification: String,
}

impl CallbackUrls {
    /// Build callback URLs for the provided transaction.
    pub fn for_transaction(backend_url: &str, transaction_id: &str) -> Self {
        let base = backend_url.trim_end_matches('/');

        Self {
            success: format!("{base}/payment/success/{transaction_id}"),
            fail: format!("{base}/payment/fail/{transaction_id}"),
            cancel: format!("{base}/payment/cancel/{transaction_id}"),
            notification: format!("{base}/payment/ipn/{transaction_id}"),
        }
    }
}

/// Payment session registration data.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SessionDescriptor {
    pub transaction_id: String,
    pub amount: f64,
    pub currency: String,
    pub customer: Customer,
    pub product: Product,
    pub callbacks: CallbackUrls,
}

/// Payment session registered by the gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CheckoutSession {
    /// Hosted checkout page URL.
    pub url: String,
}

/// Gateway-side payment validation result.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Validation {
    /// Gateway considers the payment to be completed.
    pub valid: bool,

    /// Transaction identifier the payment belongs to.
    pub transaction_id: String,

    /// Amount paid, if reported by the gateway.
    pub amount: Option<f64>,
}

#[derive(Debug, Display, From, Error)]
pub(crate) enum GatewayError {
    Http(reqwest::Error),

    #[from(ignore)]
    #[display(fmt = "payment session was rejected: {}", reason)]
    Rejected { reason: String },

    #[from(ignore)]
    #[display(fmt = "gateway response is missing the checkout URL")]
    MissingCheckoutUrl,
}

/// Payment gateway operations used by the API server.
#[async_trait]
pub(crate) trait PaymentGateway: Send + Sync {
    /// Register a new payment session and get its checkout page.
    async fn create_session(
        &self,
        descriptor: &SessionDescriptor,
    ) -> Result<CheckoutSession, GatewayError>;

    /// Query the gateway for the state of a payment, identified by the
    /// validation identifier the gateway attaches to its callbacks.
    async fn validate(&self, validation_id: &str) -> Result<Validation, GatewayError>;
}
