//! Minimal axum app with security headers applied.
//!
//! Run with: cargo run --example secure_app
//! Then: curl -i http://localhost:8000/

use axum::{routing::get, Router};
use breakwater::{build_security_headers_layer, ReferrerPolicy, SecurityConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = SecurityConfig::builder()
        .same_origin_framing()
        .hsts_max_age(63072000)
        .referrer_policy(ReferrerPolicy::NoReferrer)
        .csp_directive("scriptSrc", ["'self'"])
        .build();

    let app = Router::new()
        .route("/", get(|| async { "secured" }))
        .layer(build_security_headers_layer(&config));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
    tracing::info!("listening on http://0.0.0.0:8000");
    axum::serve(listener, app).await.unwrap();
}
