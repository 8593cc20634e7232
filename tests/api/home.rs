use time::OffsetDateTime;

use crate::helpers::{assert_timestamp_between, parse_timestamp, spawn_app};

#[tokio::test]
async fn home_returns_greeting_and_version() {
    let app = spawn_app().await;

    let body = app.get_json("/").await;

    assert_eq!(body["message"], "Hello World!");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body.as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn home_timestamp_is_taken_at_request_time() {
    let app = spawn_app().await;

    let before = OffsetDateTime::now_utc();
    let body = app.get_json("/").await;
    let after = OffsetDateTime::now_utc();

    assert_timestamp_between(parse_timestamp(&body), before, after);
}

#[tokio::test]
async fn every_route_responds_with_json() {
    let app = spawn_app().await;

    for path in ["/", "/health", "/hello/test"] {
        let response = app.get(path).await;
        assert_eq!(
            response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json"),
            "Wrong content type for {}",
            path
        );
    }
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let app = spawn_app().await;

    for path in [
        "/unknown-path",
        "/nonexistent",
        "/health/extra",
        "/health/",
        "/hello/World/",
    ] {
        let response = app.get(path).await;
        assert_eq!(404, response.status().as_u16(), "Path: {}", path);
    }
}

#[tokio::test]
async fn non_get_method_on_a_known_path_returns_404() {
    let app = spawn_app().await;

    let cases = [
        (reqwest::Method::POST, "/"),
        (reqwest::Method::DELETE, "/health"),
        (reqwest::Method::PUT, "/hello/World"),
        (reqwest::Method::PATCH, "/hello/World"),
    ];

    for (method, path) in cases {
        let response = app
            .client
            .request(method.clone(), &format!("{}{}", &app.address, path))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(
            404,
            response.status().as_u16(),
            "{} {} was not treated as unmatched",
            method,
            path
        );
    }
}

#[tokio::test]
async fn head_on_a_known_path_is_served() {
    let app = spawn_app().await;

    let response = app
        .client
        .head(&format!("{}/health", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
}
