use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FxError {
    #[error("Exchange rate service unavailable: {0}")]
    Unavailable(String),

    /// The service responded but the requested code was absent.
    #[error("No rate for currency: {0}")]
    UnknownCurrency(String),
}
