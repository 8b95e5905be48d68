use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sds::analysis::LossAnalyzer;
use sds::solana_tracker::TrackerClient;

pub const SOL: &str = "So11111111111111111111111111111111111111112";
pub const USDC: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
#[allow(dead_code)]
pub const USDT: &str = "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB";

pub const WALLET: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

/// 2024-03-15T12:00:00Z
pub const BASE_TIME_MS: i64 = 1_710_504_000_000;

fn leg(address: &str, amount: f64) -> Value {
    json!({
        "address": address,
        "amount": amount,
        "token": {
            "name": format!("{address} name"),
            "symbol": address.chars().take(4).collect::<String>(),
            "image": format!("https://img.example/{address}.png"),
            "decimals": 6
        }
    })
}

/// Provider-shaped trade JSON.
pub fn trade_json(from: (&str, f64), to: (&str, f64), usd: f64, time: i64) -> Value {
    json!({
        "tx": format!("sig_{time}"),
        "from": leg(from.0, from.1),
        "to": leg(to.0, to.1),
        "price": { "usd": 0.0, "sol": "0" },
        "volume": { "usd": usd, "sol": 0.0 },
        "wallet": WALLET,
        "program": "raydium",
        "time": time
    })
}

#[allow(dead_code)]
pub fn buy_json(mint: &str, qty: f64, usd: f64, time: i64) -> Value {
    trade_json((SOL, 1.0), (mint, qty), usd, time)
}

#[allow(dead_code)]
pub fn sell_json(mint: &str, qty: f64, usd: f64, time: i64) -> Value {
    trade_json((mint, qty), (USDC, usd), usd, time)
}

pub fn page_json(trades: Vec<Value>) -> Value {
    json!({
        "trades": trades,
        "nextCursor": BASE_TIME_MS - 1,
        "hasNextPage": false
    })
}

pub fn trades_path(wallet: &str) -> String {
    format!("/wallet/{wallet}/trades")
}

/// Mount a provider response for `WALLET` on a fresh mock server.
#[allow(dead_code)]
pub async fn mock_provider(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(trades_path(WALLET)))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

#[allow(dead_code)]
pub fn client_for(server: &MockServer, api_key: Option<&str>) -> TrackerClient {
    TrackerClient::with_base_url(reqwest::Client::new(), server.uri(), api_key.map(String::from))
}

#[allow(dead_code)]
pub fn analyzer_for(server: &MockServer) -> LossAnalyzer {
    LossAnalyzer::new(client_for(server, Some("test-key")))
}
