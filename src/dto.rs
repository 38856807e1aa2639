use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// A single ledger row, deserialized straight from the bank's CSV export.
///
/// `indicator` and `tx_type` are kept as raw strings rather than enums:
/// the aggregation queries give unrecognized values per-method treatment
/// (excluded, debit-by-default, or zero contribution), so rejecting them
/// at parse time would change observable behavior.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(rename = "Booking Date", deserialize_with = "deserialize_booking_date")]
    pub booking_date: NaiveDate,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    #[serde(rename = "Credit Debit Indicator", default)]
    pub indicator: String,
    #[serde(rename = "type", default)]
    pub tx_type: String,
    #[serde(rename = "Type Group", default)]
    pub type_group: String,
    #[serde(rename = "Reference", default)]
    pub reference: String,
    #[serde(rename = "Instructed Currency", default)]
    pub instructed_currency: String,
    #[serde(rename = "Currency Exchange Rate", default)]
    pub exchange_rate: String,
    #[serde(rename = "Instructed Amount", default)]
    pub instructed_amount: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Check Serial Number", default)]
    pub check_serial_number: String,
    #[serde(rename = "Card Ending", default)]
    pub card_ending: String,
}

/// Date formats seen in real exports: ISO first, then US-style.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

fn deserialize_booking_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .ok_or_else(|| de::Error::custom(format!("unrecognized booking date: {raw:?}")))
}
