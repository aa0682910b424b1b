use currencyapi_rs::FxClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("CURRENCYAPI_KEY")
        .expect("set CURRENCYAPI_KEY to a currencyapi.com API key");
    let client = FxClient::builder().api_key(key).build()?;

    let rate = client.resolve_rate("USD", "EUR").await?;
    println!("1 USD = {rate} EUR");

    let converted = client.convert(250.0, "USD", "EUR").await?;
    println!("250 USD = {converted:.2} EUR");

    // The snapshot already carries every currency; the table costs no
    // extra request.
    let table = currencyapi_rs::LatestBuilder::new(&client, "USD")
        .fetch_table()
        .await?;
    println!(
        "{} rates against USD (as of {})",
        table.rates.len(),
        table.last_updated_at.as_deref().unwrap_or("unknown")
    );

    Ok(())
}
