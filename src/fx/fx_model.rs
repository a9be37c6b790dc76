use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response shape of the rate service's `/latest` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestRatesResponse {
    pub base: String,
    pub rates: HashMap<String, Decimal>,
}

/// A currency offered for display selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyOption {
    pub code: String,
    pub name: String,
}

/// Turns the raw code→name mapping into selector options, sorted by code.
/// An optional search term filters case-insensitively on code or name.
pub fn currency_options(
    all: &HashMap<String, String>,
    search: Option<&str>,
) -> Vec<CurrencyOption> {
    let term = search.unwrap_or("").trim().to_lowercase();
    let mut options: Vec<CurrencyOption> = all
        .iter()
        .filter(|(code, name)| {
            term.is_empty()
                || code.to_lowercase().contains(&term)
                || name.to_lowercase().contains(&term)
        })
        .map(|(code, name)| CurrencyOption {
            code: code.clone(),
            name: name.clone(),
        })
        .collect();
    options.sort_by(|a, b| a.code.cmp(&b.code));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserializes_latest_rates_response() {
        let response: LatestRatesResponse = serde_json::from_str(
            r#"{"amount":1.0,"base":"USD","date":"2024-05-03","rates":{"EUR":0.92}}"#,
        )
        .unwrap();

        assert_eq!(response.base, "USD");
        assert_eq!(response.rates.get("EUR"), Some(&dec!(0.92)));
    }

    #[test]
    fn currency_options_are_sorted_and_filterable() {
        let mut all = HashMap::new();
        all.insert("JPY".to_string(), "Japanese Yen".to_string());
        all.insert("EUR".to_string(), "Euro".to_string());
        all.insert("GBP".to_string(), "British Pound".to_string());

        let everything = currency_options(&all, None);
        assert_eq!(
            everything.iter().map(|o| o.code.as_str()).collect::<Vec<_>>(),
            vec!["EUR", "GBP", "JPY"]
        );

        let by_name = currency_options(&all, Some("japanese"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].code, "JPY");

        let by_code = currency_options(&all, Some("eu"));
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].code, "EUR");
    }
}
