//! Reduction of raw daily payloads to the requested currencies.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::exchange_rate::{DayRecord, ExchangeRate, RateSide};
use crate::payload::{DayRates, RateEntry};

/// Normalizes user supplied currency codes: trimmed, upper-cased, blanks dropped.
pub fn currency_set<I, S>(codes: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    codes
        .into_iter()
        .map(|code| code.as_ref().trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .collect()
}

/// Keeps only `currencies` from each available day.
///
/// Absent days and days without any requested currency are dropped; the
/// remaining days keep their input order.
///
/// # Errors
///
/// Returns [`Error::MissingRate`] if a requested currency has neither the
/// market nor the national bank rate for a side.
pub fn format_data(data: &[Option<DayRates>], currencies: &HashSet<String>) -> Result<Vec<DayRecord>> {
    let mut formatted = Vec::new();

    for day in data.iter().flatten() {
        let mut rates = BTreeMap::new();
        for entry in &day.exchange_rate {
            let Some(currency) = entry.currency.as_ref() else {
                continue;
            };
            if !currencies.contains(currency) {
                continue;
            }

            let rate = ExchangeRate {
                sale: required_rate(day, currency, entry, RateSide::Sale)?,
                purchase: required_rate(day, currency, entry, RateSide::Purchase)?,
            };
            rates.insert(currency.clone(), rate);
        }

        if !rates.is_empty() {
            formatted.push(DayRecord::new(day.date.clone(), rates));
        }
    }

    Ok(formatted)
}

fn required_rate(day: &DayRates, currency: &str, entry: &RateEntry, side: RateSide) -> Result<Decimal> {
    entry.rate(side).ok_or_else(|| Error::MissingRate {
        date: day.date.clone(),
        currency: currency.to_string(),
        side,
    })
}

/// Renders formatted days as a JSON array.
pub fn to_json(records: &[DayRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}
