use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::errors::Result;

/// Trait defining the contract for exchange rate gateway operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// USD→`currency` multiplicative factor. Exactly one for the base
    /// currency, by definition and without any network or cache activity.
    async fn rate_usd_to(&self, currency: &str) -> Result<Decimal>;

    /// Code→display-name mapping of all supported currencies.
    async fn list_currencies(&self) -> Result<HashMap<String, String>>;
}
