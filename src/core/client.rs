//! Public client surface + builder.
//!
//! The client owns the shared HTTP connection pool, the endpoint bases and
//! the API credential. It is cheap to clone; endpoint modules hold a clone.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::FxError;

/// Latest-rates endpoint. Base currency and credential go in the query.
pub(crate) const DEFAULT_BASE_LATEST: &str = "https://api.currencyapi.com/v3/latest";

/// Historical-rates endpoint. One request covers one calendar date.
pub(crate) const DEFAULT_BASE_HISTORICAL: &str = "https://api.currencyapi.com/v3/historical";

/// Minimum interval between the day requests of one series call. The
/// provider's free tier allows roughly one request per second.
pub(crate) const DEFAULT_PACING: Duration = Duration::from_secs(1);

pub(crate) const USER_AGENT: &str = concat!("currencyapi-rs/", env!("CARGO_PKG_VERSION"));

/// Configured handle to the currencyapi.com API.
///
/// Construct once via [`FxClient::builder`], then clone freely; clones share
/// the underlying connection pool. The credential is immutable for the life
/// of the client and is redacted from `Debug` output.
#[derive(Clone)]
pub struct FxClient {
    http: Client,
    base_latest: Url,
    base_historical: Url,
    api_key: String,
}

impl FxClient {
    /// Create a new builder.
    pub fn builder() -> FxClientBuilder {
        FxClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_latest(&self) -> &Url {
        &self.base_latest
    }
    pub(crate) fn base_historical(&self) -> &Url {
        &self.base_historical
    }
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Resolves the current conversion rate from `from` to `to`.
    ///
    /// Issues one request, no retries. Safe to invoke repeatedly; rates may
    /// legitimately differ between calls as the market moves.
    ///
    /// # Errors
    ///
    /// Transport failures surface as [`FxError::Http`] / [`FxError::Status`],
    /// data-shape failures (including an unknown currency) as
    /// [`FxError::Data`].
    pub async fn resolve_rate(&self, from: &str, to: &str) -> Result<f64, FxError> {
        crate::latest::resolve(self, from, to).await
    }

    /// Converts `amount` units of `from` into `to` at the current rate.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`FxClient::resolve_rate`].
    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, FxError> {
        let rate = self.resolve_rate(from, to).await?;
        Ok(amount * rate)
    }
}

impl fmt::Debug for FxClient {
    // the credential never leaves the struct in full
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FxClient")
            .field("base_latest", &self.base_latest.as_str())
            .field("base_historical", &self.base_historical.as_str())
            .field("api_key", &"***")
            .finish()
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`FxClient`].
#[derive(Default)]
pub struct FxClientBuilder {
    api_key: Option<String>,
    user_agent: Option<String>,
    base_latest: Option<Url>,
    base_historical: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FxClientBuilder {
    /// The provider credential sent with every request. Required.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the latest-rates endpoint (e.g. a mock server in tests).
    #[must_use]
    pub fn base_latest(mut self, url: Url) -> Self {
        self.base_latest = Some(url);
        self
    }

    /// Override the historical-rates endpoint.
    #[must_use]
    pub fn base_historical(mut self, url: Url) -> Self {
        self.base_historical = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// [`FxError::MissingCredential`] when no (or an empty) API key was
    /// provided, [`FxError::Url`] when a default endpoint constant fails to
    /// parse, and [`FxError::Http`] when the underlying HTTP client cannot
    /// be constructed.
    pub fn build(self) -> Result<FxClient, FxError> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or(FxError::MissingCredential)?;

        let base_latest = self.base_latest.unwrap_or(Url::parse(DEFAULT_BASE_LATEST)?);
        let base_historical = self
            .base_historical
            .unwrap_or(Url::parse(DEFAULT_BASE_HISTORICAL)?);

        let mut httpb =
            Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(FxClient {
            http: httpb.build()?,
            base_latest,
            base_historical,
            api_key,
        })
    }
}
