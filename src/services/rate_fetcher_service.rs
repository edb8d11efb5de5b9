use chrono::NaiveDate;
use log::{info, warn};

use crate::{
    api::PrivatApi,
    app::dates::{date_range, date_range_from},
    config::{Config, FailurePolicy},
    error::{FetchError, Result},
    models::{BatchResult, DateKey, DayResult},
};

/// Fans one request per date out over the runtime and joins them back in
/// date order.
#[derive(Clone, Debug)]
pub struct RateFetcherService {
    api: PrivatApi,
    policy: FailurePolicy,
}

impl RateFetcherService {
    pub fn new(api: PrivatApi, policy: FailurePolicy) -> Self {
        Self { api, policy }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(PrivatApi::from_config(config)?, *config.policy()))
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Rates for today and the `days - 1` days before it.
    pub async fn fetch_batch(&self, days: i64) -> Result<BatchResult> {
        let dates = date_range(days)?;
        self.fetch_dates(dates).await
    }

    pub async fn fetch_batch_from(&self, today: NaiveDate, days: i64) -> Result<BatchResult> {
        let dates = date_range_from(today, days)?;
        self.fetch_dates(dates).await
    }

    async fn fetch_dates(&self, dates: Vec<DateKey>) -> Result<BatchResult> {
        info!("fetching exchange rates for {} day(s)", dates.len());

        let handles = dates
            .into_iter()
            .map(|date| {
                let api = self.api.clone();
                let task_date = date.clone();
                (date, tokio::spawn(async move { api.fetch_day(task_date).await }))
            })
            .collect::<Vec<_>>();

        let mut days = Vec::with_capacity(handles.len());
        for (date, handle) in handles {
            let day = match handle.await {
                Ok(day) => day,
                Err(err) => {
                    warn!("task for {} did not complete: {}", date, err);
                    let reason = err.to_string();
                    DayResult::failed(
                        date.clone(),
                        FetchError::Interrupted {
                            date: date.to_string(),
                            reason,
                        },
                    )
                }
            };
            days.push(day);
        }

        let failed = days.iter().filter(|day| !day.is_ok()).count();
        info!("fetched {} day(s), {} failed", days.len() - failed, failed);

        if self.policy == FailurePolicy::AbortOnError
            && let Some(index) = days.iter().position(|day| day.error().is_some())
            && let Some(err) = days.swap_remove(index).into_error()
        {
            return Err(err);
        }

        Ok(BatchResult::new(days))
    }
}
