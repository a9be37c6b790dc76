use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::fx_cache::{RateCache, CURRENCIES_CACHE_KEY};
use super::fx_errors::FxError;
use super::fx_provider::RateApi;
use super::fx_traits::FxServiceTrait;
use crate::constants::DEFAULT_CURRENCY;
use crate::errors::Result;

/// Gateway over the external exchange rate service.
///
/// No retry layer here: rate lookups are a single attempt and failures
/// surface immediately, unlike the catalog gateway.
pub struct ExchangeRateService {
    api: Arc<dyn RateApi>,
    cache: Arc<RateCache>,
}

impl ExchangeRateService {
    pub fn new(api: Arc<dyn RateApi>, cache: Arc<RateCache>) -> Self {
        ExchangeRateService { api, cache }
    }
}

#[async_trait]
impl FxServiceTrait for ExchangeRateService {
    async fn rate_usd_to(&self, currency: &str) -> Result<Decimal> {
        if currency.eq_ignore_ascii_case(DEFAULT_CURRENCY) {
            return Ok(Decimal::ONE);
        }

        let code = currency.to_ascii_uppercase();
        let api = Arc::clone(&self.api);
        let rate = self
            .cache
            .rates()
            .try_get_with(code.clone(), {
                let code = code.clone();
                async move {
                    let response = api.fetch_latest(&code).await?;
                    response
                        .rates
                        .get(&code)
                        .copied()
                        .ok_or(FxError::UnknownCurrency(code))
                }
            })
            .await
            .map_err(|err| {
                log::error!("Failed to fetch exchange rate for {}: {}", code, err);
                (*err).clone()
            })?;
        Ok(rate)
    }

    async fn list_currencies(&self) -> Result<HashMap<String, String>> {
        let api = Arc::clone(&self.api);
        let currencies = self
            .cache
            .currencies()
            .try_get_with(CURRENCIES_CACHE_KEY, async move {
                api.fetch_currencies().await
            })
            .await
            .map_err(|err| {
                log::error!("Failed to fetch currency list: {}", err);
                (*err).clone()
            })?;
        Ok(currencies)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fx_model::LatestRatesResponse;
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeRateApi {
        rates: HashMap<String, Decimal>,
        rate_calls: AtomicUsize,
        currency_calls: AtomicUsize,
    }

    impl FakeRateApi {
        fn new(rates: Vec<(&str, Decimal)>) -> Self {
            FakeRateApi {
                rates: rates
                    .into_iter()
                    .map(|(code, rate)| (code.to_string(), rate))
                    .collect(),
                rate_calls: AtomicUsize::new(0),
                currency_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RateApi for FakeRateApi {
        async fn fetch_latest(
            &self,
            to_currency: &str,
        ) -> std::result::Result<LatestRatesResponse, FxError> {
            self.rate_calls.fetch_add(1, Ordering::SeqCst);
            let mut rates = HashMap::new();
            if let Some(rate) = self.rates.get(to_currency) {
                rates.insert(to_currency.to_string(), *rate);
            }
            Ok(LatestRatesResponse {
                base: DEFAULT_CURRENCY.to_string(),
                rates,
            })
        }

        async fn fetch_currencies(
            &self,
        ) -> std::result::Result<HashMap<String, String>, FxError> {
            self.currency_calls.fetch_add(1, Ordering::SeqCst);
            let mut all = HashMap::new();
            all.insert("EUR".to_string(), "Euro".to_string());
            all.insert("USD".to_string(), "United States Dollar".to_string());
            Ok(all)
        }
    }

    fn service(api: FakeRateApi) -> (Arc<FakeRateApi>, ExchangeRateService) {
        let api = Arc::new(api);
        let svc = ExchangeRateService::new(api.clone(), Arc::new(RateCache::new()));
        (api, svc)
    }

    #[tokio::test]
    async fn base_currency_is_identity_without_a_call() {
        let (api, svc) = service(FakeRateApi::new(vec![]));

        assert_eq!(svc.rate_usd_to("USD").await.unwrap(), Decimal::ONE);
        assert_eq!(svc.rate_usd_to("usd").await.unwrap(), Decimal::ONE);
        assert_eq!(api.rate_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn rates_are_cached_per_currency_code() {
        let (api, svc) = service(FakeRateApi::new(vec![("EUR", dec!(0.92))]));

        assert_eq!(svc.rate_usd_to("EUR").await.unwrap(), dec!(0.92));
        assert_eq!(svc.rate_usd_to("eur").await.unwrap(), dec!(0.92));
        assert_eq!(api.rate_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unrecognized_currency_surfaces_as_unavailable() {
        let (_, svc) = service(FakeRateApi::new(vec![]));

        let err = svc.rate_usd_to("XXX").await.unwrap_err();

        assert!(matches!(err, Error::UpstreamUnavailable(_)));
    }

    #[tokio::test]
    async fn currency_list_is_cached_as_a_single_entry() {
        let (api, svc) = service(FakeRateApi::new(vec![]));

        let first = svc.list_currencies().await.unwrap();
        let second = svc.list_currencies().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.get("EUR"), Some(&"Euro".to_string()));
        assert_eq!(api.currency_calls.load(Ordering::SeqCst), 1);
    }
}
