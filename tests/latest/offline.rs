use crate::common;

#[tokio::test]
async fn resolves_a_rate_from_the_snapshot() {
    let server = common::setup_server();
    let body = common::rates_body(&[("EUR", 0.92), ("GBP", 0.79)]);
    let mock = common::mock_latest(&server, "USD", &body);

    let client = common::client_for(&server);
    let rate = client.resolve_rate("USD", "EUR").await.unwrap();

    mock.assert();
    assert_eq!(rate, 0.92);
}

#[tokio::test]
async fn convert_multiplies_by_the_resolved_rate() {
    let server = common::setup_server();
    let body = common::rates_body(&[("EUR", 0.5)]);
    common::mock_latest(&server, "USD", &body);

    let client = common::client_for(&server);
    let converted = client.convert(250.0, "USD", "EUR").await.unwrap();

    assert_eq!(converted, 125.0);
}

#[tokio::test]
async fn repeated_calls_issue_one_request_each() {
    let server = common::setup_server();
    let body = common::rates_body(&[("EUR", 0.92)]);
    let mock = common::mock_latest(&server, "USD", &body);

    let client = common::client_for(&server);
    let first = client.resolve_rate("USD", "EUR").await.unwrap();
    let second = client.resolve_rate("USD", "EUR").await.unwrap();

    mock.assert_hits(2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn fetch_table_returns_every_usable_entry() {
    let server = common::setup_server();
    let body = common::rates_body(&[("EUR", 0.92), ("GBP", 0.79), ("JPY", 157.2)]);
    common::mock_latest(&server, "USD", &body);

    let client = common::client_for(&server);
    let table = currencyapi_rs::LatestBuilder::new(&client, "USD")
        .fetch_table()
        .await
        .unwrap();

    assert_eq!(table.base, "USD");
    assert_eq!(table.rates.len(), 3);
    assert_eq!(table.rates["JPY"], 157.2);
    assert_eq!(table.last_updated_at.as_deref(), Some("2025-06-01T23:59:59Z"));
}
