use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::payload::{DayRates, RateEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExchangeRate {
    pub sale: Decimal,
    pub purchase: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSide {
    Sale,
    Purchase,
}

impl fmt::Display for RateSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sale => f.write_str("sale"),
            Self::Purchase => f.write_str("purchase"),
        }
    }
}

/// Rates of the requested currencies for one day.
///
/// Serializes as `{"<date>": {"<currency>": {"sale": .., "purchase": ..}}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    date: String,
    rates: BTreeMap<String, ExchangeRate>,
}

impl DayRecord {
    pub fn new(date: impl Into<String>, rates: BTreeMap<String, ExchangeRate>) -> Self {
        Self {
            date: date.into(),
            rates,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn rates(&self) -> &BTreeMap<String, ExchangeRate> {
        &self.rates
    }

    pub fn get(&self, currency: &str) -> Option<&ExchangeRate> {
        self.rates.get(currency)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Serialize for DayRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.rates)?;
        map.end()
    }
}

impl From<DayRecord> for DayRates {
    fn from(record: DayRecord) -> Self {
        let exchange_rate = record
            .rates
            .into_iter()
            .map(|(currency, rate)| RateEntry {
                currency: Some(currency),
                sale_rate: Some(rate.sale),
                purchase_rate: Some(rate.purchase),
                ..Default::default()
            })
            .collect();

        Self {
            date: record.date,
            exchange_rate,
        }
    }
}
