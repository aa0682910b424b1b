//! currencyapi-rs: ergonomic currencyapi.com client.
//!
//! Two operations: resolving a single current conversion rate via the
//! `/v3/latest` endpoint, and assembling a daily historical series via one
//! paced `/v3/historical` request per day. The series builder tolerates
//! per-day failures, so one bad day never costs the whole series.
//!
//! ```no_run
//! # async fn run() -> Result<(), currencyapi_rs::FxError> {
//! let client = currencyapi_rs::FxClient::builder()
//!     .api_key(std::env::var("CURRENCYAPI_KEY").expect("key"))
//!     .build()?;
//!
//! let rate = client.resolve_rate("USD", "EUR").await?;
//! println!("1 USD = {rate} EUR");
//!
//! let series = currencyapi_rs::SeriesBuilder::new(&client, "EUR")
//!     .days(30)
//!     .fetch()
//!     .await;
//! println!("{} daily points", series.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod history;
pub mod latest;

pub use crate::core::client::{FxClient, FxClientBuilder};
pub use crate::core::error::FxError;
pub use crate::core::models::{DaySkip, LatestTable, RatePoint, RateSeries, SkipKind};
pub use crate::core::services::{FxRequest, FxResponse, FxService};
pub use history::SeriesBuilder;
pub use latest::LatestBuilder;
