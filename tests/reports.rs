//! Execution tests for the report endpoints.

use borsdata::{get_reports, BorsdataClient, List, Report, ReportPeriod, ReportQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BorsdataClient {
    BorsdataClient::with_base_url("test-key", &format!("{}/v1", server.uri())).unwrap()
}

async fn mount_reports(server: &MockServer, period: &str, reports: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/instruments/3/reports/{period}")))
        .and(query_param("authKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "instrument": 3,
            "reports": reports
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_quarterly_reports_are_tagged() {
    let mock_server = MockServer::start().await;

    mount_reports(
        &mock_server,
        "quarter",
        serde_json::json!([
            {"year": 2019, "period": 4, "revenues": 7200.0, "report_End_Date": "2019-12-31T00:00:00"},
            {"year": 2019, "period": 3, "revenues": 6900.0, "report_End_Date": "2019-09-30T00:00:00"}
        ]),
    )
    .await;

    let reports = get_reports(&client_for(&mock_server), 3, ReportPeriod::Quarter)
        .await
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.kind == ReportPeriod::Quarter));
    assert_eq!(reports[0].period, 4);
}

#[tokio::test]
async fn test_each_period_kind_hits_its_own_path() {
    let mock_server = MockServer::start().await;

    mount_reports(&mock_server, "year", serde_json::json!([{"year": 2019, "period": 5}])).await;
    mount_reports(&mock_server, "r12", serde_json::json!([{"year": 2020, "period": 1}])).await;
    mount_reports(&mock_server, "quarter", serde_json::json!([{"year": 2020, "period": 1}])).await;

    let client = client_for(&mock_server);

    for period in ReportPeriod::ALL {
        let reports = client.reports(3, period).await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].kind, period);
    }
}

#[tokio::test]
async fn test_reports_max_count() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instruments/3/reports/year"))
        .and(query_param("maxCount", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "reports": [{"year": 2019, "period": 5}, {"year": 2018, "period": 5}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = ReportQuery {
        max_count: Some(2),
        ..ReportQuery::new(ReportPeriod::Year)
    };
    let reports = Report::list(&client_for(&mock_server), &(3, query)).await.unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1].year, 2018);
}

#[tokio::test]
async fn test_missing_reports_key_is_empty() {
    let mock_server = MockServer::start().await;

    mount_reports(&mock_server, "r12", serde_json::Value::Null).await;

    let reports = client_for(&mock_server).reports(3, ReportPeriod::R12).await.unwrap();
    assert!(reports.is_empty());
}
