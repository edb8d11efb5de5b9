pub mod batch_result;
pub mod currency;
pub mod currency_rate;
pub mod date_key;
pub mod day_result;

pub use batch_result::BatchResult;
pub use currency::Currency;
pub use currency_rate::CurrencyRate;
pub use date_key::DateKey;
pub use day_result::{DayOutcome, DayResult};
