//! Minimal serde mapping of the currencyapi.com response envelope.
//!
//! `/v3/latest` and `/v3/historical` share one shape:
//! `{ "meta": { "last_updated_at": "..." },
//!    "data": { "EUR": { "code": "EUR", "value": 0.92 }, ... } }`

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::core::FxError;

#[derive(Deserialize)]
pub(crate) struct RatesEnvelope {
    #[serde(default)]
    pub(crate) meta: Option<MetaNode>,
    #[serde(default)]
    pub(crate) data: Option<BTreeMap<String, RateNode>>,
}

#[derive(Deserialize)]
pub(crate) struct MetaNode {
    #[serde(default)]
    pub(crate) last_updated_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RateNode {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) value: Option<f64>,
}

/// Decodes one currency's rate out of a response body.
///
/// Pure: no I/O, deterministic for the same body. Anything short of a
/// positive finite `data.<key>.value` is an [`FxError::Data`], so "no rate"
/// can never be confused with a zero or negative rate.
pub(crate) fn decode_rate(body: &str, key: &str) -> Result<f64, FxError> {
    let env: RatesEnvelope =
        serde_json::from_str(body).map_err(|e| FxError::Data(format!("json parse error: {e}")))?;

    let data = env
        .data
        .ok_or_else(|| FxError::Data("missing data".into()))?;
    let node = data
        .get(key)
        .ok_or_else(|| FxError::Data(format!("no rate for currency {key}")))?;

    match node.value {
        Some(v) if v > 0.0 && v.is_finite() => Ok(v),
        Some(v) => Err(FxError::Data(format!(
            "unusable rate {v} for currency {key}"
        ))),
        None => Err(FxError::Data(format!("missing value for currency {key}"))),
    }
}

/// Decodes the whole `data` mapping plus the provider timestamp.
///
/// Entries without a usable positive value are dropped rather than failing
/// the table; only a missing `data` object is an error.
pub(crate) fn decode_table(
    body: &str,
) -> Result<(Option<String>, BTreeMap<String, f64>), FxError> {
    let env: RatesEnvelope =
        serde_json::from_str(body).map_err(|e| FxError::Data(format!("json parse error: {e}")))?;

    let data = env
        .data
        .ok_or_else(|| FxError::Data("missing data".into()))?;
    let rates = data
        .into_iter()
        .filter_map(|(code, node)| match node.value {
            Some(v) if v > 0.0 && v.is_finite() => Some((code, v)),
            _ => None,
        })
        .collect();

    Ok((env.meta.and_then(|m| m.last_updated_at), rates))
}
