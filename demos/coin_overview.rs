//! Print global market size and one coin's price.
//!
//! ```sh
//! COINLORE_API_URL=https://api.coinlore.net RUST_LOG=coinlore=debug \
//!     cargo run --example coin_overview -- 90
//! ```

use coinlore::prelude::*;
use tracing_subscriber::EnvFilter;

/// Bitcoin's id on CoinLore.
const DEFAULT_COIN_ID: i64 = 90;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url =
        std::env::var("COINLORE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let coin_id = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<i64>()?,
        None => DEFAULT_COIN_ID,
    };

    let client = CoinloreClient::new(base_url)?;

    let global = client.get_global().await?;
    println!("Global Coins Count: {}", global.coins_count);

    match client.get_coin(coin_id).await {
        Ok(coin) => println!("Coin: {}, Price: {} USD", coin.name, coin.price_usd),
        Err(e) if e.is_not_found() => println!("{}", e),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
