use thiserror::Error;

use crate::catalog::CatalogError;
use crate::fx::FxError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the package aggregation core.
///
/// Every failure carries one of four stable kinds so the boundary can map
/// them onto 4xx/5xx responses: the first three are the caller's fault,
/// `UpstreamUnavailable` means an external dependency is down or erroring
/// after retries ("try later" rather than "our bug").
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("External service unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        match err {
            // Upstream explicitly reported the product as absent.
            CatalogError::NotFound(msg) => Error::InvalidProduct(msg),
            other => Error::UpstreamUnavailable(other.to_string()),
        }
    }
}

impl From<FxError> for Error {
    fn from(err: FxError) -> Self {
        Error::UpstreamUnavailable(err.to_string())
    }
}
