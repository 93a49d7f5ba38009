//! Error types for privat_rates.

use chrono::NaiveDate;
use thiserror::Error;

use crate::exchange_rate::RateSide;
use crate::fetcher::{MAX_DAYS, MIN_DAYS};

/// Result type alias for privat_rates operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a run.
///
/// A failed request for a single date is not one of these: the fetcher
/// logs it and reports the day as missing.
#[derive(Error, Debug)]
pub enum Error {
    /// Day count outside the supported window.
    #[error("Invalid day count {days}: must be between {} and {}", MIN_DAYS, MAX_DAYS)]
    InvalidArgument {
        /// The rejected day count.
        days: i64,
    },

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Calendar arithmetic left the supported date range.
    #[error("Can't get the date {days} days before {today}")]
    Date {
        /// Reference date.
        today: NaiveDate,
        /// Offset that overflowed.
        days: u64,
    },

    /// A requested currency has neither the market nor the national bank rate.
    #[error("No {side} rate for {currency} on {date}")]
    MissingRate {
        /// Date string as reported by the bank.
        date: String,
        /// Currency code.
        currency: String,
        /// Which side is missing.
        side: RateSide,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
