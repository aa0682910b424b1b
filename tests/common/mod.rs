#![allow(dead_code)]

use chrono::NaiveDate;
use currencyapi_rs::FxClient;
use httpmock::{Method::GET, Mock, MockServer};
use serde_json::json;
use url::Url;

pub const API_KEY: &str = "test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client whose endpoints both point at the mock server.
pub fn client_for(server: &MockServer) -> FxClient {
    FxClient::builder()
        .api_key(API_KEY)
        .base_latest(Url::parse(&format!("{}/v3/latest", server.base_url())).unwrap())
        .base_historical(Url::parse(&format!("{}/v3/historical", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// A provider-shaped envelope body for the given currency/value pairs.
pub fn rates_body(entries: &[(&str, f64)]) -> String {
    let data: serde_json::Map<String, serde_json::Value> = entries
        .iter()
        .map(|(code, value)| {
            (
                (*code).to_string(),
                json!({ "code": code, "value": value }),
            )
        })
        .collect();
    json!({
        "meta": { "last_updated_at": "2025-06-01T23:59:59Z" },
        "data": data,
    })
    .to_string()
}

pub fn mock_latest<'a>(server: &'a MockServer, base: &str, body: &str) -> Mock<'a> {
    let body = body.to_string();
    let base = base.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/v3/latest")
            .query_param("apikey", API_KEY)
            .query_param("base_currency", base.as_str());
        then.status(200)
            .header("content-type", "application/json")
            .body(body.clone());
    })
}

pub fn mock_latest_status<'a>(server: &'a MockServer, base: &str, status: u16) -> Mock<'a> {
    let base = base.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/v3/latest")
            .query_param("apikey", API_KEY)
            .query_param("base_currency", base.as_str());
        then.status(status).body("oops");
    })
}

pub fn mock_historical_day<'a>(
    server: &'a MockServer,
    base: &str,
    date: NaiveDate,
    body: &str,
) -> Mock<'a> {
    let body = body.to_string();
    let base = base.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/v3/historical")
            .query_param("apikey", API_KEY)
            .query_param("base_currency", base.as_str())
            .query_param("date", date.format("%Y-%m-%d").to_string());
        then.status(200)
            .header("content-type", "application/json")
            .body(body.clone());
    })
}

pub fn mock_historical_day_status<'a>(
    server: &'a MockServer,
    base: &str,
    date: NaiveDate,
    status: u16,
) -> Mock<'a> {
    let base = base.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/v3/historical")
            .query_param("apikey", API_KEY)
            .query_param("base_currency", base.as_str())
            .query_param("date", date.format("%Y-%m-%d").to_string());
        then.status(status).body("oops");
    })
}

/// Fixed anchor so historical URLs are deterministic in offline tests.
pub fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

pub fn day(offset: u32) -> NaiveDate {
    anchor() - chrono::Days::new(u64::from(offset))
}

/// Live tests only run when explicitly asked for: `FX_LIVE=1` plus a real
/// `CURRENCYAPI_KEY` in the environment.
pub fn live_enabled() -> bool {
    std::env::var("FX_LIVE").ok().as_deref() == Some("1")
}

pub fn live_key() -> Option<String> {
    std::env::var("CURRENCYAPI_KEY").ok()
}
