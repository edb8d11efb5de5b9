pub mod privat;
pub mod privat_dto;
pub mod utils;

pub use privat::PrivatApi;
pub use privat_dto::{PrivatRatesDto, extract_currency_rate, extract_rate};
