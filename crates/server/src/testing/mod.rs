use std::{
    error::Error,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use axum::{async_trait, Router};
use common::config::Config;
use db::{
    current_timestamp,
    payment::{self, Status},
    ActiveValue, Database, DatabaseConnection, EntityTrait,
};
use hyper::body::{self, Bytes, HttpBody};
use migration::MigratorTrait;
use serde::Serialize;

use crate::gateway::{
    CheckoutSession, GatewayError, PaymentGateway, SessionDescriptor, Validation,
};

pub(crate) async fn create_database() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("unable to create test database");

    migration::Migrator::up(&db, None)
        .await
        .expect("unable to run migrations");

    db
}

/// Create an API router backed by a test database and a default [`MockGateway`].
pub(crate) async fn create_test_app() -> (Router, Arc<DatabaseConnection>, Arc<MockGateway>) {
    create_test_app_with(MockGateway::default()).await
}

/// Create an API router backed by a test database and the provided [`MockGateway`].
pub(crate) async fn create_test_app_with(
    gateway: MockGateway,
) -> (Router, Arc<DatabaseConnection>, Arc<MockGateway>) {
    let db = Arc::new(create_database().await);
    let gateway = Arc::new(gateway);

    let app = crate::app_router(db.clone(), Arc::new(Config::for_tests()), gateway.clone());

    (app, db, gateway)
}

/// Store a transaction with the provided status and return its identifier.
pub(crate) async fn create_transaction(db: &DatabaseConnection, status: Status) -> String {
    let id = payment::generate_id();

    payment::Entity::insert(payment::ActiveModel {
        id: ActiveValue::Set(id.clone()),
        status: ActiveValue::Set(status),
        course_id: ActiveValue::Set(String::from("c1")),
        course_title: ActiveValue::Set(String::from("Go Basics")),
        amount: ActiveValue::Set(500.0),
        currency: ActiveValue::Set(String::from("BDT")),
        name: ActiveValue::Set(String::from("A")),
        email: ActiveValue::Set(String::from("a@x.com")),
        phone: ActiveValue::Set(String::from("0123")),
        address: ActiveValue::Set(String::from("Dhaka")),
        created_at: ActiveValue::Set(current_timestamp()),
        resolved_at: ActiveValue::Set(status.is_terminal().then(current_timestamp)),
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert transaction");

    id
}

/// Get the current status of a stored transaction.
pub(crate) async fn transaction_status(db: &DatabaseConnection, id: &str) -> Status {
    payment::Entity::find_by_id(id.to_owned())
        .one(db)
        .await
        .expect("unable to query transaction")
        .expect("transaction is missing")
        .status
}

/// Payment gateway double.
///
/// Validation identifiers are treated as transaction identifiers, so a validation
/// request for `TXN_1` reports the payment for `TXN_1` unless rejections are enabled.
#[derive(Default)]
pub(crate) struct MockGateway {
    fail_sessions: bool,
    reject_validations: bool,
    sessions: Mutex<Vec<SessionDescriptor>>,
    validations: AtomicUsize,
}

impl MockGateway {
    /// Create a gateway that fails all session creation requests.
    pub fn failing() -> Self {
        Self {
            fail_sessions: true,
            ..Default::default()
        }
    }

    /// Create a gateway that reports all payments as invalid.
    pub fn rejecting() -> Self {
        Self {
            reject_validations: true,
            ..Default::default()
        }
    }

    /// Get all session descriptors submitted so far.
    pub fn sessions(&self) -> Vec<SessionDescriptor> {
        self.sessions.lock().expect("poisoned lock").clone()
    }

    /// Get the count of validation requests made so far.
    pub fn validations(&self) -> usize {
        self.validations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_session(
        &self,
        descriptor: &SessionDescriptor,
    ) -> Result<CheckoutSession, GatewayError> {
        self.sessions
            .lock()
            .expect("poisoned lock")
            .push(descriptor.clone());

        if self.fail_sessions {
            return Err(GatewayError::Rejected {
                reason: String::from("Store Credential Error Or Store is De-active"),
            });
        }

        Ok(CheckoutSession {
            url: format!(
                "https://sandbox.sslcommerz.com/EasyCheckOut/{}",
                descriptor.transaction_id
            ),
        })
    }

    async fn validate(&self, validation_id: &str) -> Result<Validation, GatewayError> {
        self.validations.fetch_add(1, Ordering::SeqCst);

        Ok(Validation {
            valid: !self.reject_validations,
            transaction_id: validation_id.to_string(),
            amount: None,
        })
    }
}

pub(crate) trait RequestBodyExt: Sized {
    fn from_json<B: Serialize>(val: B) -> Self;

    fn from_form(val: &[(&str, &str)]) -> Self;
}

impl<T> RequestBodyExt for T
where
    T: HttpBody + From<Vec<u8>>,
{
    fn from_json<B: Serialize>(val: B) -> Self {
        T::from(serde_json::to_vec(&val).expect("unable to serialize"))
    }

    fn from_form(val: &[(&str, &str)]) -> Self {
        T::from(
            serde_urlencoded::to_string(val)
                .expect("unable to serialize")
                .into_bytes(),
        )
    }
}

#[async_trait(?Send)]
pub(crate) trait ResponseBodyExt {
    async fn bytes(self) -> Bytes;

    async fn json(self) -> serde_json::Value;
}

#[async_trait(?Send)]
impl<T> ResponseBodyExt for T
where
    T: HttpBody,
    T::Error: Error,
{
    async fn bytes(self) -> Bytes {
        body::to_bytes(self)
            .await
            .expect("unable to convert to bytes")
    }

    async fn json(self) -> serde_json::Value {
        serde_json::from_slice(&self.bytes().await).expect("unable to convert to json")
    }
}

mod tests {
    use axum::body::Body;

    use super::{RequestBodyExt, ResponseBodyExt};

    #[tokio::test]
    async fn form_encoding() {
        let body = Body::from_form(&[("status", "VALID"), ("val_id", "a&b c=d")]);

        assert_eq!(&body.bytes().await[..], b"status=VALID&val_id=a%26b+c%3Dd");
    }
}
