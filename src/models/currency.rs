use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Currencies extracted from every daily response.
#[derive(
    AsRefStr, Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, Ord, PartialEq,
    PartialOrd, Serialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
}
