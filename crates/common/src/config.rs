use std::{net::SocketAddr, time::Duration};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[cfg(feature = "logging")]
use tracing_subscriber::filter::LevelFilter;

/// Database configuration.
#[derive(Deserialize)]
pub struct Database {
    /// Database URL string.
    pub url: String,

    /// Connect and pool acquire timeout, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Database {
    /// Get connection timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// HTTP server configuration.
#[derive(Deserialize)]
pub struct Server {
    /// Address, that HTTP server will listen on.
    pub address: SocketAddr,
}

/// Implementation of [`serde`]'s deserializer for [`FromStr`] types.
#[cfg(feature = "logging")]
fn deserialize_from_str<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: std::str::FromStr,
    T::Err: std::error::Error,
    D: serde::de::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    std::str::FromStr::from_str(&s).map_err(serde::de::Error::custom)
}

/// Logging configuration.
#[cfg(feature = "logging")]
#[derive(Deserialize)]
pub struct Logging {
    /// Log level.
    #[serde(deserialize_with = "deserialize_from_str")]
    pub level: LevelFilter,
}

#[cfg(feature = "logging")]
impl Default for Logging {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
        }
    }
}

/// Payment gateway configuration.
#[derive(Deserialize)]
pub struct Payment {
    /// Merchant store identifier issued by the gateway.
    pub store_id: String,

    /// Merchant store password issued by the gateway.
    pub store_password: String,

    /// Base URL of the gateway API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Currency code passed along with every payment session.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Public URL of this API server.
    ///
    /// Gateway callbacks are sent to paths relative to this value.
    pub backend_url: String,

    /// Public URL of the web app users are redirected to after the checkout.
    pub frontend_url: String,

    /// Gateway request timeout, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Confirm successful payments with the gateway validation API
    /// before trusting a callback.
    #[serde(default = "default_verify_callbacks")]
    pub verify_callbacks: bool,
}

impl Payment {
    /// Get gateway request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

fn default_timeout() -> u64 {
    10
}

fn default_api_url() -> String {
    String::from("https://sandbox.sslcommerz.com")
}

fn default_currency() -> String {
    String::from("BDT")
}

fn default_verify_callbacks() -> bool {
    true
}

/// General configuration.
#[derive(Deserialize)]
pub struct Config {
    /// General database configuration.
    pub database: Database,

    /// HTTP server configuration.
    #[serde(default)]
    pub server: Option<Server>,

    /// Logging configuration.
    #[cfg(feature = "logging")]
    #[serde(default)]
    pub logging: Logging,

    /// Payment gateway configuration.
    #[serde(default)]
    pub payment: Option<Payment>,
}

impl Config {
    /// Create new config using default configuration file or environment variables.
    ///
    /// Nested keys in environment variables are separated with a double underscore,
    /// e.g. `CONFIG_PAYMENT__STORE_ID`.
    ///
    /// See [`Env`] for more details on how to use environment variables configuration.
    ///
    /// [`Env`]: figment::providers::Env
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file("Config.toml"))
            .merge(Env::prefixed("CONFIG_").split("__"))
    }

    /// Create new config suitable for running unit tests.
    #[cfg(feature = "test-utils")]
    pub fn for_tests() -> Self {
        Self {
            database: Database {
                url: String::from("sqlite::memory:"),
                timeout: default_timeout(),
            },
            server: Some(Server {
                address: "127.0.0.1:5000".parse().unwrap(),
            }),
            #[cfg(feature = "logging")]
            logging: Logging::default(),
            payment: Some(Payment {
                store_id: String::from("testbox"),
                store_password: String::from("qwerty"),
                api_url: default_api_url(),
                currency: default_currency(),
                backend_url: String::from("http://localhost:5000"),
                frontend_url: String::from("http://localhost:5173"),
                timeout: default_timeout(),
                verify_callbacks: true,
            }),
        }
    }
}
