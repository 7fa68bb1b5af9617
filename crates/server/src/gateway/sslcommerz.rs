use axum::async_trait;
use common::config::Payment;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CheckoutSession, GatewayError, PaymentGateway, SessionDescriptor, Validation};

/// Session creation API path.
const SESSION_PATH: &str = "/gwprocess/v4/api.php";

/// Order validation API path.
const VALIDATION_PATH: &str = "/validator/api/validationserverAPI.php";

/// SSLCommerz payment gateway HTTP client.
pub(crate) struct SslCommerz {
    client: Client,
    api_url: String,
    store_id: String,
    store_password: String,
}

impl SslCommerz {
    /// Create new gateway client from the payment configuration.
    pub fn new(config: &Payment) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            store_id: config.store_id.clone(),
            store_password: config.store_password.clone(),
        })
    }

    fn session_form<'a>(&'a self, descriptor: &'a SessionDescriptor) -> SessionForm<'a> {
        SessionForm {
            store_id: &self.store_id,
            store_passwd: &self.store_password,
            total_amount: descriptor.amount,
            currency: &descriptor.currency,
            tran_id: &descriptor.transaction_id,
            success_url: &descriptor.callbacks.success,
            fail_url: &descriptor.callbacks.fail,
            cancel_url: &descriptor.callbacks.cancel,
            ipn_url: &descriptor.callbacks.notification,
            cus_name: &descriptor.customer.name,
            cus_email: &descriptor.customer.email,
            cus_phone: &descriptor.customer.phone,
            cus_add1: &descriptor.customer.address,
            shipping_method: "NO",
            num_of_item: 1,
            product_name: &descriptor.product.name,
            product_category: "course",
            product_profile: "non-physical-goods",
            value_a: &descriptor.product.id,
        }
    }
}

/// Form-encoded session creation request.
#[derive(Serialize)]
struct SessionForm<'a> {
    store_id: &'a str,
    store_passwd: &'a str,
    total_amount: f64,
    currency: &'a str,
    tran_id: &'a str,
    success_url: &'a str,
    fail_url: &'a str,
    cancel_url: &'a str,
    ipn_url: &'a str,
    cus_name: &'a str,
    cus_email: &'a str,
    cus_phone: &'a str,
    cus_add1: &'a str,
    shipping_method: &'a str,
    num_of_item: u32,
    product_name: &'a str,
    product_category: &'a str,
    product_profile: &'a str,

    /// Custom pass-through field, carries the course identifier.
    value_a: &'a str,
}

#[derive(Deserialize)]
struct SessionResponse {
    status: String,

    #[serde(default, rename = "GatewayPageURL")]
    gateway_page_url: Option<String>,

    #[serde(default, rename = "failedreason")]
    failed_reason: Option<String>,
}

impl TryFrom<SessionResponse> for CheckoutSession {
    type Error = GatewayError;

    fn try_from(response: SessionResponse) -> Result<Self, Self::Error> {
        if !response.status.eq_ignore_ascii_case("SUCCESS") {
            return Err(GatewayError::Rejected {
                reason: response
                    .failed_reason
                    .filter(|reason| !reason.is_empty())
                    .unwrap_or(response.status),
            });
        }

        match response.gateway_page_url {
            Some(url) if !url.is_empty() => Ok(CheckoutSession { url }),
            _ => Err(GatewayError::MissingCheckoutUrl),
        }
    }
}

#[derive(Serialize)]
struct ValidationQuery<'a> {
    val_id: &'a str,
    store_id: &'a str,
    store_passwd: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct ValidationResponse {
    status: String,

    #[serde(default)]
    tran_id: Option<String>,

    /// Amounts are reported as decimal strings.
    #[serde(default)]
    amount: Option<String>,
}

impl From<ValidationResponse> for Validation {
    fn from(response: ValidationResponse) -> Self {
        Self {
            valid: matches!(response.status.as_str(), "VALID" | "VALIDATED"),
            transaction_id: response.tran_id.unwrap_or_default(),
            amount: response.amount.and_then(|amount| amount.parse().ok()),
        }
    }
}

#[async_trait]
impl PaymentGateway for SslCommerz {
    async fn create_session(
        &self,
        descriptor: &SessionDescriptor,
    ) -> Result<CheckoutSession, GatewayError> {
        debug!(transaction = %descriptor.transaction_id, "registering payment session");

        let response: SessionResponse = self
            .client
            .post(format!("{}{SESSION_PATH}", self.api_url))
            .form(&self.session_form(descriptor))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response.try_into()
    }

    async fn validate(&self, validation_id: &str) -> Result<Validation, GatewayError> {
        let response: ValidationResponse = self
            .client
            .get(format!("{}{VALIDATION_PATH}", self.api_url))
            .query(&ValidationQuery {
                val_id: validation_id,
                store_id: &self.store_id,
                store_passwd: &self.store_password,
                format: "json",
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.into())
    }
}
