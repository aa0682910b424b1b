use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// A single observed conversion rate inside a historical series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatePoint {
    /// Days before the anchor date (0 = the anchor itself).
    pub offset: u32,
    /// The calendar date this rate was fetched for.
    pub date: NaiveDate,
    /// Units of the quote currency per one unit of the base currency.
    /// Always `> 0`.
    pub rate: f64,
}

/// Why a day was dropped from a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipKind {
    /// The request never produced a usable body (connection, TLS, timeout,
    /// or a non-success status).
    Transport,
    /// The body arrived but did not contain the expected rate.
    Data,
}

/// Record of a day whose fetch or parse failed inside a series request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySkip {
    /// Days before the anchor date.
    pub offset: u32,
    /// The calendar date the failed request covered.
    pub date: NaiveDate,
    /// Transport or data failure.
    pub kind: SkipKind,
    /// Human-readable failure detail, credential already redacted.
    pub detail: String,
}

/// The result of a historical series request.
///
/// Never an error: failed days are recorded in `skipped` and omitted from
/// `points`. An empty `points` means "no data available" and must be
/// presented as such by the caller, not as a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateSeries {
    /// Surviving daily rates, newest first, offsets strictly increasing.
    pub points: Vec<RatePoint>,
    /// One record per failed day, in request order.
    pub skipped: Vec<DaySkip>,
}

impl RateSeries {
    /// `true` when no day produced a usable rate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of days the request covered, successful or not.
    #[must_use]
    pub fn days_requested(&self) -> usize {
        self.points.len() + self.skipped.len()
    }

    /// Just the rate values, newest first. What a chart plots.
    #[must_use]
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate).collect()
    }
}

/// The full per-currency mapping of one latest-rates response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestTable {
    /// The base currency the rates are expressed against.
    pub base: String,
    /// Provider timestamp of the snapshot, when present.
    pub last_updated_at: Option<String>,
    /// Conversion rates keyed by currency code. Entries without a usable
    /// positive value are dropped.
    pub rates: BTreeMap<String, f64>,
}
