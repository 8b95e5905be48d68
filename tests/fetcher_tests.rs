mod common;

use reqwest::StatusCode;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sds::solana_tracker::{FetchError, TrackerClient, DEFAULT_TRADE_LIMIT};

use common::{buy_json, client_for, mock_provider, page_json, trades_path, BASE_TIME_MS, WALLET};

#[tokio::test]
async fn test_sends_limit_and_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(trades_path(WALLET)))
        .and(query_param("page_size", "300"))
        .and(query_param("limit", "300"))
        .and(header("x-api-key", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![buy_json(
            "MintA",
            10.0,
            5.0,
            BASE_TIME_MS,
        )])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("secret-key"));
    let page = client
        .get_wallet_trades(WALLET, DEFAULT_TRADE_LIMIT)
        .await
        .expect("fetch should succeed");

    assert_eq!(page.trades.len(), 1);
    assert_eq!(page.next_cursor, Some(BASE_TIME_MS - 1));
    assert!(!page.has_next_page);
}

#[tokio::test]
async fn test_anonymous_request_still_sent() {
    let server = mock_provider(ResponseTemplate::new(200).set_body_json(page_json(vec![]))).await;

    let client = client_for(&server, None);
    let page = client.get_wallet_trades(WALLET, 300).await.expect("fetch should succeed");
    assert!(page.trades.is_empty());

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-api-key").is_none());
}

#[tokio::test]
async fn test_oversized_response_is_truncated() {
    let trades = (0..5)
        .map(|i| buy_json("MintB", 1.0, 1.0, BASE_TIME_MS + i))
        .collect();
    let server = mock_provider(ResponseTemplate::new(200).set_body_json(page_json(trades))).await;

    let page = client_for(&server, None)
        .get_wallet_trades(WALLET, 3)
        .await
        .expect("fetch should succeed");

    assert_eq!(page.trades.len(), 3);
    // Provider order is kept.
    assert_eq!(page.trades[0].time, BASE_TIME_MS);
    assert_eq!(page.trades[2].time, BASE_TIME_MS + 2);
}

#[tokio::test]
async fn test_rate_limited() {
    let server = mock_provider(ResponseTemplate::new(429)).await;
    let err = client_for(&server, None).get_wallet_trades(WALLET, 300).await.unwrap_err();
    assert!(matches!(err, FetchError::RateLimited));
}

#[tokio::test]
async fn test_unauthorized() {
    let server = mock_provider(ResponseTemplate::new(401)).await;
    let err = client_for(&server, Some("bad")).get_wallet_trades(WALLET, 300).await.unwrap_err();
    assert!(matches!(err, FetchError::Unauthorized));
}

#[tokio::test]
async fn test_not_found() {
    let server = mock_provider(ResponseTemplate::new(404)).await;
    let err = client_for(&server, None).get_wallet_trades(WALLET, 300).await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound));
}

#[tokio::test]
async fn test_other_status_is_provider_error() {
    let server = mock_provider(ResponseTemplate::new(503)).await;
    let err = client_for(&server, None).get_wallet_trades(WALLET, 300).await.unwrap_err();
    match err {
        FetchError::Provider { status } => assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE),
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server =
        mock_provider(ResponseTemplate::new(200).set_body_string("<html>not json</html>")).await;
    let err = client_for(&server, None).get_wallet_trades(WALLET, 300).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Reserve a port, then release it so nothing is listening there.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .expect("bind ephemeral port");
    let client = TrackerClient::with_base_url(reqwest::Client::new(), format!("http://{addr}"), None);

    let err = client.get_wallet_trades(WALLET, 300).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn test_wallet_cannot_escape_trades_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![])))
        .mount(&server)
        .await;

    client_for(&server, Some("secret-key"))
        .get_wallet_trades("../../tokens/abc?limit=1#", 300)
        .await
        .expect("fetch should succeed");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);

    let url = &requests[0].url;
    let segments: Vec<&str> = url.path_segments().unwrap().collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], "wallet");
    assert_eq!(segments[2], "trades");

    let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        params,
        vec![
            ("page_size".to_string(), "300".to_string()),
            ("limit".to_string(), "300".to_string()),
        ]
    );
}
