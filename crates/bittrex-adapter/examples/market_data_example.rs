/*
[INPUT]:  Market identifier (e.g., "BTC-LTC")
[OUTPUT]: Public market data (markets, ticker, order book)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new public endpoints
*/

use bittrex_adapter::{ApiOutcome, BittrexClient};

/// Example: Query public market data (no credentials required)
#[tokio::main]
async fn main() {
    println!("=== Bittrex Market Data Example ===\n");

    let client = match BittrexClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let market = "BTC-LTC";

    println!("Querying markets...");
    report(client.get_markets().await);

    println!("\nQuerying ticker for {}...", market);
    report(client.get_ticker(&[("market", market)]).await);

    println!("\nQuerying order book for {}...", market);
    report(client.get_order_book(&[("market", market), ("type", "both")]).await);

    println!("\nQuerying candles for {}...", market);
    report(
        client
            .get_candles(&[("marketName", market), ("tickInterval", "oneMin")])
            .await,
    );

    println!("\n✓ Market data example complete");
}

fn report(result: bittrex_adapter::Result<ApiOutcome>) {
    match result {
        Ok(ApiOutcome::Success(payload)) => println!("✓ Success: {:?}", payload),
        Ok(ApiOutcome::Failure(envelope)) => println!("✗ Upstream failure: {}", envelope.message),
        Err(e) => println!("✗ Transport error: {}", e),
    }
}
