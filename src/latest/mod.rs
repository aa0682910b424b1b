//! Current conversion rates via the `/v3/latest` endpoint.

use url::Url;

use crate::core::models::LatestTable;
use crate::core::{FxClient, FxError, net, wire};

/* ---------------- Public API ---------------- */

/// Resolves the current conversion rate from `from` to `to`.
///
/// One request, no retries. Idempotent and safe to invoke repeatedly; rates
/// may legitimately differ between calls as the market moves.
///
/// # Errors
///
/// Returns [`FxError::Http`] / [`FxError::Status`] when the request fails on
/// the wire and [`FxError::Data`] when the response does not carry a usable
/// rate for `to` (or either code is empty). The two classes are
/// distinguishable via [`FxError::is_transport`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn resolve(client: &FxClient, from: &str, to: &str) -> Result<f64, FxError> {
    LatestBuilder::new(client, from).rate_to(to).await
}

/// A builder for latest-rates requests against one base currency.
#[derive(Debug, Clone)]
pub struct LatestBuilder {
    client: FxClient,
    base_currency: String,
    endpoint_override: Option<Url>,
}

impl LatestBuilder {
    /// Creates a new `LatestBuilder` for a given base currency.
    pub fn new(client: &FxClient, base_currency: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            base_currency: base_currency.into(),
            endpoint_override: None,
        }
    }

    /// (For testing) Overrides the latest-rates endpoint for this call only.
    #[must_use]
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint_override = Some(url);
        self
    }

    /// Fetches the latest snapshot and extracts one target currency's rate.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`resolve`].
    pub async fn rate_to(self, to: &str) -> Result<f64, FxError> {
        if to.is_empty() {
            return Err(FxError::Data("empty target currency code".into()));
        }
        let body = self.fetch_body().await?;
        wire::decode_rate(&body, to)
    }

    /// Fetches the full per-currency table the provider returns.
    ///
    /// The original display flow only ever reads one entry, but the snapshot
    /// already carries every currency; table access costs no extra request.
    ///
    /// # Errors
    ///
    /// Transport failures and a missing `data` object; individual entries
    /// without a usable value are dropped, not fatal.
    pub async fn fetch_table(self) -> Result<LatestTable, FxError> {
        let base = self.base_currency.clone();
        let body = self.fetch_body().await?;
        let (last_updated_at, rates) = wire::decode_table(&body)?;
        Ok(LatestTable {
            base,
            last_updated_at,
            rates,
        })
    }

    async fn fetch_body(&self) -> Result<String, FxError> {
        if self.base_currency.is_empty() {
            return Err(FxError::Data("empty base currency code".into()));
        }
        let mut url = self
            .endpoint_override
            .clone()
            .unwrap_or_else(|| self.client.base_latest().clone());
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("apikey", self.client.api_key());
            qp.append_pair("base_currency", &self.base_currency);
        }
        net::fetch_text(self.client.http(), url).await
    }
}
