use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    /// Upstream explicitly reported the product as absent.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Upstream reported an internal failure (5xx).
    #[error("Product service error: {0}")]
    ServerError(String),

    /// Connect/read/write failure or timeout before a response arrived.
    #[error("Product service transport error: {0}")]
    Transport(String),

    /// Any other upstream failure (unexpected status, undecodable body).
    #[error("Product service unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    /// Server-side failures and transport errors are transient; client
    /// errors are not retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CatalogError::ServerError(_) | CatalogError::Transport(_)
        )
    }
}
