use derive_getters::Getters;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::models::{Currency, CurrencyRate};

/// Body of `GET /p24api/exchange_rates?json&date=DD.MM.YYYY`.
///
/// Every field decodes leniently: a missing or mistyped field falls back to
/// its default instead of failing the whole response.
#[derive(Debug, Default, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PrivatRatesDto {
    #[serde(default, deserialize_with = "lenient")]
    date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    bank: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    base_currency_lit: Option<String>,
    #[serde(default, deserialize_with = "lenient_entries")]
    exchange_rate: Vec<PrivatRateDto>,
}

#[derive(Debug, Default, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PrivatRateDto {
    #[serde(default, deserialize_with = "lenient")]
    currency: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    purchase_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    sale_rate: Option<f64>,
}

impl PrivatRatesDto {
    /// Never fails; a body that is not an object yields an empty DTO.
    pub fn from_value(value: &Value) -> Self {
        // Derived struct decoding also accepts arrays positionally.
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }

    pub fn rate_for(&self, currency: &str) -> CurrencyRate {
        self.exchange_rate
            .iter()
            .find(|entry| entry.currency.as_deref() == Some(currency))
            .map(PrivatRateDto::to_currency_rate)
            .unwrap_or_default()
    }
}

impl PrivatRateDto {
    pub fn to_currency_rate(&self) -> CurrencyRate {
        CurrencyRate::new(rate_or_zero(self.purchase_rate), rate_or_zero(self.sale_rate))
    }
}

fn rate_or_zero(rate: Option<f64>) -> f64 {
    rate.filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_entries<'de, D>(deserializer: D) -> Result<Vec<PrivatRateDto>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Purchase/sale pair for `currency` in a parsed response body, `{0.0, 0.0}`
/// when the currency or the `exchangeRate` list is absent.
pub fn extract_currency_rate(body: &Value, currency: &str) -> CurrencyRate {
    PrivatRatesDto::from_value(body).rate_for(currency)
}

pub fn extract_rate(body: &Value, currency: Currency) -> CurrencyRate {
    extract_currency_rate(body, currency.as_ref())
}
