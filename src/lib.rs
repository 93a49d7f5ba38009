//! Historical PrivatBank exchange rates for the last few days.
//!
//! - [`Fetcher`] requests the days concurrently and keeps them in request order
//! - [`formatter::format_data`] reduces each day to the requested currencies

pub mod config;
pub mod error;
pub mod exchange_rate;
pub mod fetcher;
pub mod formatter;
pub mod payload;

pub use config::Config;
pub use error::{Error, Result};
pub use exchange_rate::{DayRecord, ExchangeRate, RateSide};
pub use fetcher::{API_URL, DateKey, Fetcher, MAX_DAYS, MIN_DAYS};
pub use payload::{DayRates, RateEntry};
