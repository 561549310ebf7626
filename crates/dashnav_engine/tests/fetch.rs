use std::time::Duration;

use dashnav_engine::{FetchError, FetchSettings, PartialFetcher, ReqwestFetcher};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetcher_returns_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/partials/overview"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<div id=\"overview\">ok</div>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(&server.uri(), FetchSettings::default()).expect("client");
    let body = fetcher.fetch("/partials/overview").await.expect("fetch ok");
    assert_eq!(body, "<div id=\"overview\">ok</div>");
}

#[tokio::test]
async fn fetcher_sends_detail_id_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/partials/details"))
        .and(query_param("id", "2024/01/01 12:00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_string("run"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(&server.uri(), FetchSettings::default()).expect("client");
    let body = fetcher
        .fetch("/partials/details?id=2024%2F01%2F01%2012%3A00%3A00")
        .await
        .expect("fetch ok");
    assert_eq!(body, "run");
}

#[tokio::test]
async fn fetcher_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/partials/overview"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(&server.uri(), FetchSettings::default()).expect("client");
    let err = fetcher.fetch("/partials/overview").await.unwrap_err();
    assert_eq!(err, FetchError::HttpStatus(500));
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn fetcher_times_out_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/partials/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(&server.uri(), settings).expect("client");
    let err = fetcher.fetch("/partials/slow").await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout(_)), "{err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn fetcher_reports_network_failure() {
    // Nothing listens on the discard port.
    let fetcher = ReqwestFetcher::new("http://127.0.0.1:9", FetchSettings::default()).expect("client");
    let err = fetcher.fetch("/partials/overview").await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "{err:?}");
}

#[test]
fn fetcher_rejects_invalid_base_url() {
    let err = ReqwestFetcher::new("not a url", FetchSettings::default()).unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)));
}
