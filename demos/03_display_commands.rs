//! How a display layer drives the core without knowing about HTTP: it sends
//! commands through `FxService` and renders whatever comes back.

use currencyapi_rs::{FxClient, FxRequest, FxResponse, FxService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("CURRENCYAPI_KEY")
        .expect("set CURRENCYAPI_KEY to a currencyapi.com API key");
    let client = FxClient::builder().api_key(key).build()?;

    // a "convert" button press
    match client
        .execute(FxRequest::ResolveRate {
            from: "USD".into(),
            to: "GBP".into(),
        })
        .await
    {
        Ok(FxResponse::Rate(rate)) => println!("100 USD = {:.2} GBP", 100.0 * rate),
        Ok(other) => println!("unexpected response: {other:?}"),
        // a conversion failure renders as "unavailable", never as a number
        Err(e) => println!("conversion unavailable: {e}"),
    }

    // a chart-currency selection change
    match client
        .execute(FxRequest::BuildSeries {
            currency: "GBP".into(),
            days: 5,
        })
        .await?
    {
        FxResponse::Series(series) if series.is_empty() => {
            println!("no data to chart for GBP");
        }
        FxResponse::Series(series) => {
            println!("charting {} points for GBP", series.points.len());
        }
        other => println!("unexpected response: {other:?}"),
    }

    Ok(())
}
