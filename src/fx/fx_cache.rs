use moka::future::Cache;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::time::Duration;

/// Rates and the currency list expire one hour after being fetched.
pub const RATE_CACHE_TTL_SECS: u64 = 60 * 60;
/// Bound on cached per-currency rates.
pub const RATE_CACHE_MAX_ENTRIES: u64 = 100;

pub(super) const CURRENCIES_CACHE_KEY: &str = "currencies";

/// In-memory exchange rate cache, keyed by target currency code, plus a
/// single-entry cache for the supported-currency list.
pub struct RateCache {
    rates: Cache<String, Decimal>,
    currencies: Cache<&'static str, HashMap<String, String>>,
}

impl RateCache {
    pub fn new() -> Self {
        Self::with_policy(
            Duration::from_secs(RATE_CACHE_TTL_SECS),
            RATE_CACHE_MAX_ENTRIES,
        )
    }

    pub fn with_policy(ttl: Duration, max_entries: u64) -> Self {
        RateCache {
            rates: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(max_entries)
                .build(),
            currencies: Cache::builder().time_to_live(ttl).max_capacity(1).build(),
        }
    }

    pub(super) fn rates(&self) -> &Cache<String, Decimal> {
        &self.rates
    }

    pub(super) fn currencies(&self) -> &Cache<&'static str, HashMap<String, String>> {
        &self.currencies
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}
