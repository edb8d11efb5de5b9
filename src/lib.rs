pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

mod test;

pub use config::{Config, FailurePolicy};
pub use error::FetchError;
pub use models::{BatchResult, Currency, CurrencyRate, DateKey, DayResult};
pub use services::RateFetcherService;
