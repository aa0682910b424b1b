use std::future::Future;
use std::pin::Pin;

use crate::core::models::RateSeries;
use crate::core::{FxClient, FxError};

/// A request a display layer issues against the rate-retrieval core.
///
/// This is the seam between UI event handling and the core: widgets, timers
/// and menu state stay on the caller's side, the core only ever sees
/// commands and returns data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FxRequest {
    /// "What is the rate from `from` to `to` right now?"
    ResolveRate {
        /// Base currency code.
        from: String,
        /// Target currency code.
        to: String,
    },
    /// "What were the USD-denominated daily rates for `currency` over the
    /// last `days` days?"
    BuildSeries {
        /// Base currency code.
        currency: String,
        /// Number of day offsets to cover, today included.
        days: u32,
    },
}

/// The payload answering a successful [`FxRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum FxResponse {
    /// Answer to [`FxRequest::ResolveRate`]. Always `> 0`.
    Rate(f64),
    /// Answer to [`FxRequest::BuildSeries`]. May be empty; an empty series
    /// means "no data available", not an error.
    Series(RateSeries),
}

/// Executes display-layer commands against the rate-retrieval core.
///
/// Implemented by [`FxClient`]. The indirection keeps display code
/// compilable against a fake service in tests.
pub trait FxService: Send + Sync {
    /// Runs one command.
    ///
    /// `ResolveRate` maps any underlying transport or data failure to `Err`;
    /// `BuildSeries` always succeeds and reports per-day failures inside the
    /// series payload.
    fn execute<'a>(
        &'a self,
        req: FxRequest,
    ) -> Pin<Box<dyn Future<Output = Result<FxResponse, FxError>> + Send + 'a>>;
}

impl FxService for FxClient {
    fn execute<'a>(
        &'a self,
        req: FxRequest,
    ) -> Pin<Box<dyn Future<Output = Result<FxResponse, FxError>> + Send + 'a>> {
        Box::pin(async move {
            match req {
                FxRequest::ResolveRate { from, to } => {
                    let rate = crate::latest::resolve(self, &from, &to).await?;
                    Ok(FxResponse::Rate(rate))
                }
                FxRequest::BuildSeries { currency, days } => {
                    let series = crate::history::SeriesBuilder::new(self, currency)
                        .days(days)
                        .fetch_full()
                        .await;
                    Ok(FxResponse::Series(series))
                }
            }
        })
    }
}
