use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest},
    http::{Request, StatusCode},
    Json,
};
use axum_derive_error::ErrorResponse;
use derive_more::{Display, Error};
use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

/// Phone numbers, with an optional international prefix and digit group separators.
pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\+?[0-9][0-9 \-]{2,19}$"#).expect("invalid regex string"));

/// Lowercase, dash-separated page keys, e.g. `privacy-policy`.
pub static SLUG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[a-z0-9]+(-[a-z0-9]+)*$"#).expect("invalid regex string"));

/// Errors related to JSON validation.
#[derive(ErrorResponse, Display, Error)]
pub enum ValidatedJsonRejection {
    /// Unable to parse a JSON value or some of the fields are missing.
    #[status(StatusCode::UNPROCESSABLE_ENTITY)]
    JsonParsingError(JsonRejection),

    /// JSON value was parsed, but contains invalid field values.
    #[status(StatusCode::BAD_REQUEST)]
    ValidationError(ValidationErrors),
}

/// Wrapper for [`axum`] JSON value validation.
///
/// Equivalent to the [`axum`]'s [`Json`] struct
/// with [`validator`] crate support.
///
/// [`JSON`]: axum::extract::Json
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for ValidatedJson<T>
where
    T: Validate,
    B: Send + 'static,
    S: Sync,
    Json<T>: FromRequest<S, B, Rejection = JsonRejection>,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonParsingError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

/// Require a finite, strictly positive amount of money.
pub fn positive_amount(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("positive_amount"))
    }
}

/// Require a finite, non-negative price.
pub fn non_negative_price(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("non_negative_price"))
    }
}
