//! Execution tests for failed remote calls.

use borsdata::{BorsdataClient, BorsdataError, StockPriceQuery};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, key: &str) -> BorsdataClient {
    BorsdataClient::with_base_url(key, &format!("{}/v1", server.uri())).unwrap()
}

#[tokio::test]
async fn test_invalid_key_is_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/markets"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"message": "Invalid authKey"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server, "bad-key").markets().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(err.is_remote_failure());
    match err {
        BorsdataError::ApiError {
            status_code,
            message,
            body,
        } => {
            assert_eq!(status_code, 401);
            assert_eq!(message, "Invalid authKey");
            assert!(body.contains("Invalid authKey"));
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_keeps_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instruments/3/stockprices"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server, "key")
        .stock_prices(3, StockPriceQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.body(), Some("upstream exploded"));
    assert!(err.to_string().contains("upstream exploded"));
}

#[tokio::test]
async fn test_rate_limit_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sectors"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server, "key").sectors().await.unwrap_err();

    assert!(err.is_rate_limited());
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server, "key").countries().await.unwrap_err();

    assert!(matches!(err, BorsdataError::ParseError { status_code: 200, .. }));
    assert_eq!(err.body(), Some("<html>maintenance</html>"));
}

#[tokio::test]
async fn test_transport_error_hides_key() {
    // Nothing listens on port 9 on localhost
    let client = BorsdataClient::with_base_url("very-secret-key", "http://127.0.0.1:9/v1").unwrap();

    let err = client.markets().await.unwrap_err();

    assert!(matches!(err, BorsdataError::HttpError(_)));
    assert!(!err.to_string().contains("very-secret-key"));
    assert!(!format!("{err:?}").contains("very-secret-key"));
}
