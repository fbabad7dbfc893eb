//! Coin ticker types for the CoinLore REST API.

use serde::{Deserialize, Serialize};

use crate::shared::serde_util::null_as_default;

/// Market data snapshot for a single coin.
///
/// Price, market cap, supply and percent-change figures arrive as strings and
/// are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coin {
    // Basic information
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub rank: i64,

    // Price and market data
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub price_usd: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub market_cap_usd: String,
    /// 24h trading volume
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub volume24: f64,

    // Supply
    /// Circulating supply
    #[serde(rename = "csupply", deserialize_with = "null_as_default::deserialize")]
    pub circulating_supply: String,
    /// Total supply
    #[serde(rename = "tsupply", deserialize_with = "null_as_default::deserialize")]
    pub total_supply: String,
    /// Max supply
    #[serde(rename = "msupply", deserialize_with = "null_as_default::deserialize")]
    pub max_supply: String,

    // Percent changes
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub percent_change_1h: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub percent_change_24h: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub percent_change_7d: String,
}

/// `{"data": [...]}` envelope used by list endpoints.
///
/// A missing or `null` `data` field decodes as an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub data: Vec<T>,
}

/// Response of `GET api/tickers/`.
pub type CoinListResponse = ListResponse<Coin>;

#[cfg(test)]
mod tests {
    use super::*;

    const BITCOIN: &str = r#"{
        "id": "90",
        "symbol": "BTC",
        "name": "Bitcoin",
        "nameid": "bitcoin",
        "rank": 1,
        "price_usd": "67012.35",
        "percent_change_24h": "1.25",
        "percent_change_1h": "-0.12",
        "percent_change_7d": "4.80",
        "price_btc": "1.00",
        "market_cap_usd": "1320456789012.50",
        "volume24": 31234567890.12,
        "volume24a": 29876543210.5,
        "csupply": "19700000.00",
        "tsupply": "19700000",
        "msupply": "21000000"
    }"#;

    #[test]
    fn test_coin_deserialize_full() {
        let coin: Coin = serde_json::from_str(BITCOIN).unwrap();
        assert_eq!(coin.id, "90");
        assert_eq!(coin.symbol, "BTC");
        assert_eq!(coin.rank, 1);
        assert_eq!(coin.price_usd, "67012.35");
        assert_eq!(coin.volume24, 31234567890.12);
        assert_eq!(coin.circulating_supply, "19700000.00");
        assert_eq!(coin.max_supply, "21000000");
        assert_eq!(coin.percent_change_1h, "-0.12");
    }

    #[test]
    fn test_coin_null_supply() {
        let json = r#"{"id": "2", "symbol": "ETH", "msupply": null, "tsupply": ""}"#;
        let coin: Coin = serde_json::from_str(json).unwrap();
        assert_eq!(coin.symbol, "ETH");
        assert_eq!(coin.max_supply, "");
        assert_eq!(coin.total_supply, "");
        assert_eq!(coin.rank, 0);
    }

    #[test]
    fn test_coin_serializes_wire_names() {
        let coin = Coin {
            circulating_supply: "100".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&coin).unwrap();
        assert_eq!(value["csupply"], "100");
        assert!(value.get("circulating_supply").is_none());
    }

    #[test]
    fn test_coin_list_response_keeps_order() {
        let json = r#"{"data": [{"id": "1", "symbol": "BTC"}, {"id": "2", "symbol": "ETH"}], "info": {"coins_num": 2}}"#;
        let response: CoinListResponse = serde_json::from_str(json).unwrap();
        let symbols: Vec<&str> = response.data.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, ["BTC", "ETH"]);
    }

    #[test]
    fn test_coin_list_response_null_or_missing_data() {
        let response: CoinListResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(response.data.is_empty());

        let response: CoinListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
    }
}
