//! Contract tests for HolidayClient against a wiremock holidays service.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/holidays?api_key&country&year` | `holidays_*` |

use std::time::Duration;

use chrono::NaiveDate;
use hcal_client::{ApiError, HcalClient, HcalConfig, HolidaySource};
use hcal_core::{CountryCode, ScopeKey};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> HcalClient {
    let config = HcalConfig::local_mock(&server.uri(), "test-key").unwrap();
    HcalClient::new(config).unwrap()
}

fn scope(code: &str, year: i32) -> ScopeKey {
    ScopeKey::new(CountryCode::new(code).unwrap(), year)
}

#[tokio::test]
async fn holidays_sends_key_country_and_year() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/holidays"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("country", "IN"))
        .and(query_param("year", "2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"code": 200},
            "response": {"holidays": [
                {
                    "name": "Republic Day",
                    "description": "Republic Day is a national holiday in India",
                    "country": {"id": "in", "name": "India"},
                    "date": {"iso": "2024-01-26T00:00:00", "datetime": {"year": 2024, "month": 1, "day": 26}},
                    "type": ["National"],
                    "locations": "All",
                    "states": "All"
                },
                {
                    "name": "Independence Day",
                    "date": {"iso": "2024-08-15"},
                    "type": ["National holiday"]
                }
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let records = client.holidays().holidays(&scope("in", 2024)).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 1, 26).unwrap());
    assert_eq!(records[0].name, "Republic Day");
    assert_eq!(records[0].local_name, "Republic Day");
    assert_eq!(records[0].types, vec!["National".to_string()]);
    assert_eq!(records[0].country_code.as_str(), "IN");
    assert!(records[0].fixed && records[0].global);
    assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2024, 8, 15).unwrap());
}

#[tokio::test]
async fn holidays_via_source_trait() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/holidays"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"code": 200},
            "response": {"holidays": [
                {"name": "Christmas Day", "date": {"iso": "2025-12-25"}, "type": ["Federal Holiday"]}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let records = client
        .holidays()
        .fetch_holidays(&scope("US", 2025))
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].country_code.as_str(), "US");
}

#[tokio::test]
async fn holidays_empty_array_is_ok_and_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/holidays"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"code": 200},
            "response": {"holidays": []}
        })))
        .mount(&server)
        .await;

    let records = test_client(&server)
        .holidays()
        .holidays(&scope("IN", 2024))
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn holidays_unknown_country_response_array_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/holidays"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"code": 200},
            "response": []
        })))
        .mount(&server)
        .await;

    let records = test_client(&server)
        .holidays()
        .holidays(&scope("ZZ", 2024))
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn holidays_401_is_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/holidays"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"meta":{"code":401,"error_type":"auth failed"}}"#),
        )
        .mount(&server)
        .await;

    let err = test_client(&server)
        .holidays()
        .holidays(&scope("IN", 2024))
        .await
        .unwrap_err();
    match err {
        ApiError::Status { status, body, .. } => {
            assert_eq!(status, 401);
            assert!(body.contains("auth failed"));
        }
        other => panic!("expected Status, got: {other:?}"),
    }
}

#[tokio::test]
async fn holidays_garbage_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/holidays"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .holidays()
        .holidays(&scope("IN", 2024))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }), "got: {err:?}");
}

#[tokio::test]
async fn holidays_unreachable_host_is_transport_error_without_key() {
    let config = HcalConfig::local_mock("http://127.0.0.1:1", "secret-key").unwrap();
    let client = HcalClient::new(config).unwrap();

    let err = client
        .holidays()
        .holidays(&scope("IN", 2024))
        .await
        .unwrap_err();
    assert!(err.is_transport());
    assert!(!err.to_string().contains("secret-key"));
}

#[tokio::test]
async fn holidays_slow_upstream_hits_configured_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/holidays"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"meta": {"code": 200}, "response": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut config = HcalConfig::local_mock(&server.uri(), "test-key").unwrap();
    config.timeout_secs = 1;
    let client = HcalClient::new(config).unwrap();

    let err = client
        .holidays()
        .holidays(&scope("IN", 2024))
        .await
        .unwrap_err();
    match &err {
        ApiError::Http { source, .. } => assert!(source.is_timeout(), "got: {source:?}"),
        other => panic!("expected transport error, got: {other:?}"),
    }
    assert!(err.is_transport());
}
