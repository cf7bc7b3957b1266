//! Contract tests for DirectoryClient against a wiremock directory service.

use hcal_client::{ApiError, CountrySource, HcalClient, HcalConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> HcalClient {
    let config = HcalConfig::local_mock(&server.uri(), "test-key").unwrap();
    HcalClient::new(config).unwrap()
}

#[tokio::test]
async fn available_countries_returns_upstream_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/AvailableCountries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"countryCode": "US", "name": "United States"},
            {"countryCode": "AD", "name": "Andorra"},
            {"countryCode": "bad!", "name": "Nowhere"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let countries = client.directory().list_countries().await.unwrap();

    let codes: Vec<&str> = countries.iter().map(|c| c.country_code.as_str()).collect();
    assert_eq!(codes, vec!["US", "AD"]);
    assert_eq!(countries[1].name, "Andorra");
}

#[tokio::test]
async fn available_countries_does_not_send_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/AvailableCountries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    test_client(&server)
        .directory()
        .available_countries()
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn available_countries_500_is_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/AvailableCountries"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
        .mount(&server)
        .await;

    match test_client(&server).directory().available_countries().await {
        Err(ApiError::Status { status, body, .. }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "down for maintenance");
        }
        other => panic!("expected Status, got: {other:?}"),
    }
}

#[tokio::test]
async fn available_countries_wrong_shape_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/AvailableCountries"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"countries": []})),
        )
        .mount(&server)
        .await;

    let err = test_client(&server)
        .directory()
        .available_countries()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}
