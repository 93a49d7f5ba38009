use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::exchange_rate::RateSide;

/// One currency's row in the bank's `exchangeRate` array.
///
/// The bank publishes a market rate (`saleRate`/`purchaseRate`) only for
/// the currencies it trades; the national bank rate is present for most.
/// The leading UAH row carries no `currency` at all.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RateEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "saleRate", default, skip_serializing_if = "Option::is_none")]
    pub sale_rate: Option<Decimal>,
    #[serde(rename = "saleRateNB", default, skip_serializing_if = "Option::is_none")]
    pub sale_rate_nb: Option<Decimal>,
    #[serde(rename = "purchaseRate", default, skip_serializing_if = "Option::is_none")]
    pub purchase_rate: Option<Decimal>,
    #[serde(rename = "purchaseRateNB", default, skip_serializing_if = "Option::is_none")]
    pub purchase_rate_nb: Option<Decimal>,
}

impl RateEntry {
    /// Market rate for `side`, else the national bank rate.
    pub fn rate(&self, side: RateSide) -> Option<Decimal> {
        let (market, national) = match side {
            RateSide::Sale => (self.sale_rate, self.sale_rate_nb),
            RateSide::Purchase => (self.purchase_rate, self.purchase_rate_nb),
        };
        match market {
            Some(rate) => Some(rate),
            None => national,
        }
    }
}

/// Response body of the exchange rate endpoint for one date.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DayRates {
    pub date: String,
    #[serde(rename = "exchangeRate", default)]
    pub exchange_rate: Vec<RateEntry>,
}
