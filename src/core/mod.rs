//! Core components of the `currencyapi-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`FxClient`] and its builder.
//! - The primary [`FxError`] type.
//! - Public data models like [`RatePoint`] and [`RateSeries`].
//! - Internal networking and wire-format decoding shared by both endpoints.

/// The main client (`FxClient`) and its builder.
pub mod client;
/// The primary error type (`FxError`) for the crate.
pub mod error;
/// Public data models shared across API modules.
pub mod models;
/// The command seam between a display layer and the rate-retrieval core.
pub mod services;

pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::FxClient`
pub use client::{FxClient, FxClientBuilder};
pub use error::FxError;
pub use models::{DaySkip, LatestTable, RatePoint, RateSeries, SkipKind};
pub use services::{FxRequest, FxResponse, FxService};
