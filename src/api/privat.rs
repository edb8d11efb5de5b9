use std::{collections::BTreeMap, time::Duration};

use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;
use strum::IntoEnumIterator;

use crate::{
    config::Config,
    error::{FetchError, Result},
    models::{Currency, DateKey, DayResult},
};

use super::{privat_dto::PrivatRatesDto, utils::make_request};

pub const BASE_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates?json&date=";

/// Client for the PrivatBank archive exchange rates endpoint.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct PrivatApi {
    client: Client,
    base_url: String,
}

impl PrivatApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FetchError::Client(err.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Uses a preconfigured client; its timeout is the caller's responsibility.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url().as_str(), *config.timeout())
    }

    pub fn url_for(&self, date: &DateKey) -> String {
        format!("{}{}", self.base_url, date)
    }

    /// Fetches one date. Every failure is folded into the returned
    /// [`DayResult`].
    pub async fn fetch_day(&self, date: DateKey) -> DayResult {
        let url = self.url_for(&date);

        match make_request(&self.client, &url).await {
            Ok(body) => {
                debug!("received rates for {}", date);
                day_result_from_body(date, &body)
            }
            Err(err) => {
                warn!("failed to fetch rates for {}: {}", date, err);
                DayResult::failed(date, err)
            }
        }
    }
}

fn day_result_from_body(date: DateKey, body: &Value) -> DayResult {
    let dto = PrivatRatesDto::from_value(body);

    if let Some(response_date) = dto.date()
        && response_date != date.as_str()
    {
        warn!(
            "response for {} carries date {}, keeping requested date",
            date, response_date
        );
    }

    let rates = Currency::iter()
        .map(|currency| (currency, dto.rate_for(currency.as_ref())))
        .collect::<BTreeMap<_, _>>();

    DayResult::rates(date, rates)
}
