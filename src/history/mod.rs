//! Daily historical series via one `/v3/historical` request per day.

use std::time::Duration;

use chrono::{Days, Local, NaiveDate};
use url::Url;

use crate::core::client::DEFAULT_PACING;
use crate::core::models::{DaySkip, RatePoint, RateSeries, SkipKind};
use crate::core::{FxClient, FxError, net, wire};

/// Day offsets a series covers unless overridden. The charting flow always
/// asks for a month.
pub(crate) const DEFAULT_DAYS: u32 = 30;

/// Currency the series is denominated in unless overridden.
pub(crate) const DEFAULT_QUOTE: &str = "USD";

/// A builder for the daily rate history of a single base currency.
///
/// Issues one request per day offset, newest first, strictly sequentially
/// with a fixed pacing interval in between to stay inside the provider's
/// per-second limit. A failed day is recorded and skipped; the series call
/// itself never fails.
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    client: FxClient,
    currency: String,
    quote: String,
    days: u32,
    pacing: Duration,
    as_of: Option<NaiveDate>,
    endpoint_override: Option<Url>,
}

impl SeriesBuilder {
    /// Creates a new `SeriesBuilder` for a given base currency.
    pub fn new(client: &FxClient, currency: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            currency: currency.into(),
            quote: DEFAULT_QUOTE.to_string(),
            days: DEFAULT_DAYS,
            pacing: DEFAULT_PACING,
            as_of: None,
            endpoint_override: None,
        }
    }

    /// Number of day offsets to cover, anchor date included. (Default: 30)
    #[must_use]
    pub const fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Currency the series is denominated in. (Default: `USD`)
    #[must_use]
    pub fn quote(mut self, code: impl Into<String>) -> Self {
        self.quote = code.into();
        self
    }

    /// Minimum interval between consecutive day requests. (Default: 1s)
    ///
    /// The default matches the provider's conservative one-request-per-second
    /// limit; lower it only when the account's plan allows more.
    #[must_use]
    pub const fn pacing(mut self, interval: Duration) -> Self {
        self.pacing = interval;
        self
    }

    /// Pins the anchor date (day offset 0). When unset, the anchor is today
    /// per the host's local clock, matching the display flow.
    #[must_use]
    pub const fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// (For testing) Overrides the historical-rates endpoint for this series.
    #[must_use]
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint_override = Some(url);
        self
    }

    /// Fetches the series and returns the surviving points, newest first.
    pub async fn fetch(self) -> Vec<RatePoint> {
        self.fetch_full().await.points
    }

    /// Fetches the series together with its per-day failure records.
    ///
    /// Infallible by design: every failure becomes a [`DaySkip`] in the
    /// result, and an all-days failure is an empty series, not an error.
    /// The loop always runs all `days` iterations; there is no early exit on
    /// either success or failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(currency = %self.currency, days = self.days))
    )]
    pub async fn fetch_full(self) -> RateSeries {
        let anchor = self.as_of.unwrap_or_else(|| Local::now().date_naive());
        let mut series = RateSeries::default();

        for offset in 0..self.days {
            if offset > 0 {
                tokio::time::sleep(self.pacing).await;
            }

            let Some(date) = anchor.checked_sub_days(Days::new(u64::from(offset))) else {
                // fell off the calendar; nothing to ask the provider for
                series.skipped.push(DaySkip {
                    offset,
                    date: anchor,
                    kind: SkipKind::Data,
                    detail: format!("no calendar date {offset} days before {anchor}"),
                });
                continue;
            };

            match self.rate_for(date).await {
                Ok(rate) => series.points.push(RatePoint { offset, date, rate }),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(offset, %date, error = %e, "skipping day");
                    series.skipped.push(DaySkip {
                        offset,
                        date,
                        kind: if e.is_transport() {
                            SkipKind::Transport
                        } else {
                            SkipKind::Data
                        },
                        detail: e.to_string(),
                    });
                }
            }
        }

        series
    }

    async fn rate_for(&self, date: NaiveDate) -> Result<f64, FxError> {
        if self.currency.is_empty() {
            return Err(FxError::Data("empty base currency code".into()));
        }
        let mut url = self
            .endpoint_override
            .clone()
            .unwrap_or_else(|| self.client.base_historical().clone());
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("apikey", self.client.api_key());
            qp.append_pair("base_currency", &self.currency);
            qp.append_pair("date", &date.format("%Y-%m-%d").to_string());
        }
        let body = net::fetch_text(self.client.http(), url).await?;
        wire::decode_rate(&body, &self.quote)
    }
}
