use serde::Serialize;

use super::DayResult;

/// Results of one batch, most recent date first.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BatchResult(Vec<DayResult>);

impl BatchResult {
    pub fn new(days: Vec<DayResult>) -> Self {
        Self(days)
    }

    pub fn days(&self) -> &[DayResult] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DayResult> {
        self.0.iter().filter(|day| !day.is_ok())
    }
}
