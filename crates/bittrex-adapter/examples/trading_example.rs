/*
[INPUT]:  BITTREX_API_KEY / BITTREX_API_SECRET environment variables
[OUTPUT]: Account balances and open orders via signed requests
[POS]:    Examples - credentialed account queries
[UPDATE]: When adding new credentialed endpoints
*/

use bittrex_adapter::{ApiOutcome, BittrexClient, Credentials};

/// Example: Credentialed account queries (signed requests)
///
/// Requires BITTREX_API_KEY and BITTREX_API_SECRET in the environment.
#[tokio::main]
async fn main() {
    println!("=== Bittrex Trading Example ===\n");

    let (api_key, api_secret) = match (
        std::env::var("BITTREX_API_KEY"),
        std::env::var("BITTREX_API_SECRET"),
    ) {
        (Ok(key), Ok(secret)) => (key, secret),
        _ => {
            eprintln!("Set BITTREX_API_KEY and BITTREX_API_SECRET to run this example");
            return;
        }
    };

    let mut client = match BittrexClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    client.set_credentials(Credentials {
        api_key,
        api_secret,
    });

    println!("Querying balances...");
    report(client.get_balances().await);

    println!("\nQuerying open orders for BTC-LTC...");
    report(client.get_open_orders(&[("market", "BTC-LTC")]).await);

    println!("\nQuerying order history...");
    report(client.get_order_history(None).await);

    println!("\n✓ Trading example complete");
}

fn report(result: bittrex_adapter::Result<ApiOutcome>) {
    match result {
        Ok(ApiOutcome::Success(payload)) => println!("✓ Success: {:?}", payload),
        Ok(ApiOutcome::Failure(envelope)) => println!("✗ Upstream failure: {}", envelope.message),
        Err(e) => println!("✗ Transport error: {}", e),
    }
}
