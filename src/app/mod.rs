pub mod dates;

pub use dates::{date_range, date_range_from};
