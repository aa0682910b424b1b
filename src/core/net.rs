use reqwest::Client;
use url::Url;

use crate::core::FxError;

/// Performs exactly one GET round trip and returns the body as text.
///
/// Non-success statuses become [`FxError::Status`]; the caller decides
/// whether that is fatal (a single-rate lookup) or skippable (one day of a
/// series). No retries happen at this layer.
pub(crate) async fn fetch_text(http: &Client, url: Url) -> Result<String, FxError> {
    let resp = http.get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(FxError::Status {
            status: resp.status().as_u16(),
            url: scrub_credential(&url),
        });
    }
    Ok(resp.text().await?)
}

/// Renders a request URL with the `apikey` query value masked.
///
/// Anything that can end up in an error message or a log line goes through
/// here; the credential must never appear in full outside the client struct.
pub(crate) fn scrub_credential(url: &Url) -> String {
    let mut scrubbed = url.clone();
    {
        let mut qp = scrubbed.query_pairs_mut();
        qp.clear();
        for (k, v) in url.query_pairs() {
            if k == "apikey" {
                qp.append_pair(&k, "***");
            } else {
                qp.append_pair(&k, &v);
            }
        }
    }
    scrubbed.to_string()
}
