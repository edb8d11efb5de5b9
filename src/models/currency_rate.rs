use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

/// Bank purchase and sale rate of one currency against UAH.
#[derive(Clone, Copy, Debug, Default, Getters, PartialEq, Serialize, new)]
pub struct CurrencyRate {
    purchase: f64,
    sale: f64,
}
