use currencyapi_rs::{FxClient, SeriesBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("CURRENCYAPI_KEY")
        .expect("set CURRENCYAPI_KEY to a currencyapi.com API key");
    let client = FxClient::builder().api_key(key).build()?;

    // One request per day at the default 1 req/s pacing, so a week takes
    // about six seconds of wall clock.
    println!("fetching 7 days of EUR history...");
    let series = SeriesBuilder::new(&client, "EUR").days(7).fetch_full().await;

    if series.is_empty() {
        // an empty series is "no data available", not an error
        println!("no data available for EUR");
        return Ok(());
    }

    for point in &series.points {
        println!("{}  1 EUR = {} USD", point.date, point.rate);
    }
    for skip in &series.skipped {
        println!("{}  skipped ({:?}): {}", skip.date, skip.kind, skip.detail);
    }

    Ok(())
}
