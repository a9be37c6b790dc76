mod currency_converter;
mod fx_cache;
mod fx_errors;
mod fx_model;
mod fx_provider;
mod fx_service;
mod fx_traits;

pub use currency_converter::{convert, convert_optional};
pub use fx_cache::RateCache;
pub use fx_errors::FxError;
pub use fx_model::{currency_options, CurrencyOption, LatestRatesResponse};
pub use fx_provider::{HttpRateApi, RateApi, RateApiConfig};
pub use fx_service::ExchangeRateService;
pub use fx_traits::FxServiceTrait;
