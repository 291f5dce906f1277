//! End-to-end tests: a real server on an ephemeral port in front of a mocked
//! OpenWeather upstream.

use std::sync::Arc;

use serde_json::{Value, json};
use skycast_core::OpenWeatherClient;
use skycast_proxy::api;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn spawn_proxy(upstream: &MockServer) -> String {
    let source = Arc::new(OpenWeatherClient::with_base_url(
        "test-key".to_string(),
        upstream.uri(),
    ));
    let app = api::router(source);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{addr}")
}

fn current_fixture() -> Value {
    json!({
        "name": "Seoul",
        "dt": 1_754_625_600,
        "main": { "temp": 29.4, "feels_like": 31.2, "humidity": 62 },
        "weather": [{ "main": "Clear", "description": "맑음", "icon": "01d" }],
        "wind": { "speed": 2.1 }
    })
}

fn forecast_fixture() -> Value {
    json!({
        "city": { "name": "Seoul", "country": "KR" },
        "list": [
            {
                "dt": 1_754_712_000,
                "dt_txt": "2026-08-09 06:00:00",
                "main": { "temp": 27.0, "humidity": 70 },
                "weather": [{ "main": "Rain", "description": "비", "icon": "10d" }]
            },
            {
                "dt": 1_754_722_800,
                "dt_txt": "2026-08-09 09:00:00",
                "main": { "temp": 29.0, "humidity": 65 },
                "weather": [{ "main": "Clear", "description": "맑음", "icon": "01d" }]
            }
        ]
    })
}

#[tokio::test]
async fn city_search_returns_the_combined_bundle() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Seoul"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "kr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_fixture()))
        .expect(1)
        .mount(&upstream)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Seoul"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "kr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_fixture()))
        .expect(1)
        .mount(&upstream)
        .await;

    let proxy = spawn_proxy(&upstream).await;

    let response = reqwest::get(format!("{proxy}/api/weather?city=Seoul&units=metric"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(
        body,
        json!({ "current": current_fixture(), "forecast": forecast_fixture() })
    );
}

#[tokio::test]
async fn missing_location_returns_400_with_no_upstream_calls() {
    let upstream = MockServer::start().await;

    // Any upstream traffic at all is a failure.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let proxy = spawn_proxy(&upstream).await;

    let response = reqwest::get(format!("{proxy}/api/weather"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body, json!({ "error": "City name or coordinates are required" }));
}

#[tokio::test]
async fn one_failing_upstream_fails_the_whole_request() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(&upstream)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_fixture()))
        .mount(&upstream)
        .await;

    let proxy = spawn_proxy(&upstream).await;

    let response = reqwest::get(format!("{proxy}/api/weather?city=Nowhere"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body, json!({ "error": "Weather API Error: city not found" }));
}

#[tokio::test]
async fn coordinate_search_forwards_lat_lon_and_units() {
    let upstream = MockServer::start().await;

    for endpoint in ["/weather", "/forecast"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("lat", "37.5665"))
            .and(query_param("lon", "126.978"))
            .and(query_param("units", "imperial"))
            .respond_with(ResponseTemplate::new(200).set_body_json(if endpoint == "/weather" {
                current_fixture()
            } else {
                forecast_fixture()
            }))
            .expect(1)
            .mount(&upstream)
            .await;
    }

    let proxy = spawn_proxy(&upstream).await;

    let response = reqwest::get(format!(
        "{proxy}/api/weather?lat=37.5665&lon=126.978&units=imperial"
    ))
    .await
    .expect("request succeeds");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn units_default_to_metric_when_omitted() {
    let upstream = MockServer::start().await;

    for endpoint in ["/weather", "/forecast"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(if endpoint == "/weather" {
                current_fixture()
            } else {
                forecast_fixture()
            }))
            .expect(1)
            .mount(&upstream)
            .await;
    }

    let proxy = spawn_proxy(&upstream).await;

    let response = reqwest::get(format!("{proxy}/api/weather?city=Seoul"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 200);
}
