use axum::body::Body;
use axum::http::Request;
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use breakwater::{build_security_headers_layer, SecurityConfig};

fn app(config: &SecurityConfig) -> Router {
    Router::new()
        .route("/", get(|| async { "hello" }))
        .layer(build_security_headers_layer(config))
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let app = app(&SecurityConfig::default());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert!(headers
        .get("content-security-policy")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("default-src 'self'"));
}

#[tokio::test]
async fn hsts_follows_request_scheme() {
    let app_https = app(&SecurityConfig::default());
    let response = app_https
        .oneshot(
            Request::builder()
                .uri("https://example.com/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers().get("strict-transport-security").unwrap(),
        "max-age=31536000; includeSubDomains; preload"
    );

    let app_http = app(&SecurityConfig::default());
    let response = app_http
        .oneshot(
            Request::builder()
                .uri("http://example.com/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().get("strict-transport-security").is_none());
}

#[tokio::test]
async fn forwarded_proto_counts_as_secure() {
    let app = app(&SecurityConfig::default());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-forwarded-proto", "https")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().get("strict-transport-security").is_some());
}

#[tokio::test]
async fn disabled_config_leaves_responses_untouched() {
    let app = app(&SecurityConfig::disabled());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.headers().get("x-frame-options").is_none());
    assert!(response.headers().get("content-security-policy").is_none());
}

#[tokio::test]
async fn layer_does_not_alter_the_body() {
    let app = app(&SecurityConfig::default());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"hello");
}

#[tokio::test]
async fn builder_config_flows_through_the_layer() {
    let config = SecurityConfig::builder()
        .same_origin_framing()
        .hsts_max_age(600)
        .hsts_include_subdomains(false)
        .hsts_preload(false)
        .build();
    let app = app(&config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("https://example.com/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-frame-options").unwrap(), "SAMEORIGIN");
    assert_eq!(
        response.headers().get("strict-transport-security").unwrap(),
        "max-age=600"
    );
}
