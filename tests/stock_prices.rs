//! Execution tests for the stock price endpoints.

use borsdata::{get_stock_prices, BorsdataClient, List, StockPrice, StockPriceQuery};
use chrono::NaiveDate;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BorsdataClient {
    BorsdataClient::with_base_url("test-key", &format!("{}/v1", server.uri())).unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2009, 4, d).unwrap()
}

#[tokio::test]
async fn test_price_history_with_range() {
    let mock_server = MockServer::start().await;

    // The API lists newest first
    let response = serde_json::json!({
        "instrument": 3,
        "stockPricesList": [
            {"d": "2009-04-24", "h": 52.0, "l": 50.0, "c": 51.5, "o": 50.5, "v": 1200},
            {"d": "2009-04-23", "h": 51.0, "l": 49.0, "c": 50.0, "o": 49.5, "v": 1100},
            {"d": "2009-04-22", "h": 50.0, "l": 48.0, "c": 49.0, "o": 48.5, "v": 1000}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1/instruments/3/stockprices"))
        .and(query_param("authKey", "test-key"))
        .and(query_param("from", "2009-04-22"))
        .and(query_param("to", "2009-04-24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let prices = get_stock_prices(&client, 3, StockPriceQuery::between(day(22), day(24)))
        .await
        .unwrap();

    assert_eq!(prices.len(), 3);
    assert!(prices.iter().all(|p| p.is_within(Some(day(22)), Some(day(24)))));
    assert!(prices.windows(2).all(|w| w[0].date < w[1].date));
    assert_eq!(prices[0].close, 49.0);
}

#[tokio::test]
async fn test_price_history_without_range_sends_no_bounds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instruments/3/stockprices"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"stockPricesList": []})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let prices = StockPrice::list(&client_for(&mock_server), &(3, StockPriceQuery::default()))
        .await
        .unwrap();
    assert!(prices.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert_eq!(query, "authKey=test-key");
}

#[tokio::test]
async fn test_price_history_max_count() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instruments/97/stockprices"))
        .and(query_param("maxCount", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "stockPricesList": [{"d": "2009-04-24", "c": 40.0}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = StockPriceQuery {
        max_count: Some(1),
        ..Default::default()
    };
    let prices = client_for(&mock_server).stock_prices(97, query).await.unwrap();

    assert_eq!(prices.len(), 1);
    assert!(prices[0].volume.is_none());
}

#[tokio::test]
async fn test_unknown_instrument_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instruments/999999/stockprices"))
        .respond_with(ResponseTemplate::new(404).set_body_string(""))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .stock_prices(999_999, StockPriceQuery::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn test_last_prices_for_all_instruments() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instruments/stockprices/last"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "stockPricesList": [
                {"i": 3, "d": "2020-01-31", "c": 210.0},
                {"i": 97, "d": "2020-01-31", "c": 95.5}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let prices = client_for(&mock_server).stock_prices_last().await.unwrap();

    assert_eq!(prices.len(), 2);
    assert_eq!(prices[1].ins_id, Some(97));
}

#[tokio::test]
async fn test_prices_at_date_round_trips_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instruments/stockprices/date"))
        .and(query_param("date", "2009-04-22"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "stockPricesList": [
                {"i": 3, "d": "2009-04-22", "c": 49.0},
                {"i": 97, "d": "2009-04-22", "c": 30.0}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let prices = client_for(&mock_server).stock_prices_at(day(22)).await.unwrap();

    assert_eq!(prices.len(), 2);
    assert!(prices.iter().all(|p| p.date == day(22)));

    let out = serde_json::to_value(&prices[0]).unwrap();
    assert_eq!(out["d"], "2009-04-22");
}
