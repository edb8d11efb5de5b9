use std::collections::BTreeMap;

use derive_getters::Getters;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::error::FetchError;

use super::{Currency, CurrencyRate, DateKey};

#[derive(Debug)]
pub enum DayOutcome {
    Rates(BTreeMap<Currency, CurrencyRate>),
    Failed(FetchError),
}

/// The outcome of fetching a single date.
#[derive(Debug, Getters)]
pub struct DayResult {
    date: DateKey,
    outcome: DayOutcome,
}

impl DayResult {
    pub fn rates(date: DateKey, rates: BTreeMap<Currency, CurrencyRate>) -> Self {
        Self {
            date,
            outcome: DayOutcome::Rates(rates),
        }
    }

    pub fn failed(date: DateKey, error: FetchError) -> Self {
        Self {
            date,
            outcome: DayOutcome::Failed(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, DayOutcome::Rates(_))
    }

    pub fn rate(&self, currency: Currency) -> Option<&CurrencyRate> {
        match &self.outcome {
            DayOutcome::Rates(rates) => rates.get(&currency),
            DayOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.outcome {
            DayOutcome::Rates(_) => None,
            DayOutcome::Failed(err) => Some(err),
        }
    }

    pub fn into_error(self) -> Option<FetchError> {
        match self.outcome {
            DayOutcome::Rates(_) => None,
            DayOutcome::Failed(err) => Some(err),
        }
    }
}

struct ErrorBody<'a>(&'a FetchError);

impl Serialize for ErrorBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("error", &self.0.to_string())?;
        map.end()
    }
}

// `{"DD.MM.YYYY": {"EUR": {..}, "USD": {..}}}` or `{"DD.MM.YYYY": {"error": ".."}}`
impl Serialize for DayResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match &self.outcome {
            DayOutcome::Rates(rates) => map.serialize_entry(&self.date, rates)?,
            DayOutcome::Failed(err) => map.serialize_entry(&self.date, &ErrorBody(err))?,
        }
        map.end()
    }
}
