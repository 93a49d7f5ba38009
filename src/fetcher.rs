//! Concurrent download of the bank's daily exchange rates.

use std::fmt;

use chrono::{Days, Local, NaiveDate};
use futures::future::join_all;
use log::{debug, error, info, warn};
use reqwest::{Client, StatusCode};

use crate::error::{Error, Result};
use crate::payload::DayRates;

/// PrivatBank archive endpoint. The date goes into the `date` parameter.
pub const API_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates";

/// Fewest days a fetcher may be configured for.
pub const MIN_DAYS: i64 = 1;
/// Most days a fetcher may be configured for.
pub const MAX_DAYS: i64 = 10;

/// A calendar date as the bank expects and reports it: `dd.mm.yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}

/// The `days` dates before `today`, most recent first. `today` is excluded.
pub fn date_keys(today: NaiveDate, days: u64) -> Result<Vec<DateKey>> {
    (1..=days)
        .map(|i| {
            today
                .checked_sub_days(Days::new(i))
                .map(DateKey)
                .ok_or(Error::Date { today, days: i })
        })
        .collect()
}

/// Fetches raw rates for a fixed number of past days.
#[derive(Debug, Clone)]
pub struct Fetcher {
    days: u64,
    api_url: String,
}

impl Fetcher {
    /// Creates a fetcher for the last `days` days.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless `days` is within
    /// [`MIN_DAYS`]..=[`MAX_DAYS`].
    pub fn new(days: i64) -> Result<Self> {
        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            return Err(Error::InvalidArgument { days });
        }

        Ok(Self {
            days: days.unsigned_abs(),
            api_url: API_URL.to_string(),
        })
    }

    /// Points the fetcher at another endpoint base.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub const fn days(&self) -> u64 {
        self.days
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn url_for(&self, date: DateKey) -> String {
        format!("{}?json&date={}", self.api_url, date)
    }

    /// Fetches the configured number of days before the local current date.
    ///
    /// See [`Fetcher::get_rates_before`].
    pub async fn get_rates_for_last_days(&self) -> Result<Vec<Option<DayRates>>> {
        self.get_rates_before(Local::now().date_naive()).await
    }

    /// Requests every day before `today` concurrently and waits for all of them.
    ///
    /// The i-th element always belongs to the i-th date of [`date_keys`],
    /// whatever order the responses arrive in. A day whose request failed is
    /// `None`; failures never affect the other days.
    ///
    /// # Errors
    ///
    /// Fails only if the dates can't be computed or the HTTP client can't be
    /// built, both before any request is sent.
    pub async fn get_rates_before(&self, today: NaiveDate) -> Result<Vec<Option<DayRates>>> {
        let dates = date_keys(today, self.days)?;
        let client = Client::builder().build()?;

        info!("Fetching rates for {} days before {}", dates.len(), DateKey(today));
        let requests = dates.iter().map(|&date| self.fetch_rates(&client, date));
        let results = join_all(requests).await;

        debug!(
            "Received rates for {} of {} days",
            results.iter().filter(|r| r.is_some()).count(),
            results.len()
        );
        Ok(results)
    }

    async fn fetch_rates(&self, client: &Client, date: DateKey) -> Option<DayRates> {
        let url = self.url_for(date);
        debug!("GET {url}");

        let response = match client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Can't fetch rates for {date}: {e}");
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            warn!("Can't get rates for {date}. Status: {}", response.status());
            return None;
        }

        match response.json::<DayRates>().await {
            Ok(day) => Some(day),
            Err(e) => {
                error!("Can't read rates for {date}: {e}");
                None
            }
        }
    }
}
