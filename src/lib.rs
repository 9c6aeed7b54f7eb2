//! Breakwater - declarative HTTP security headers for Axum
//!
//! Breakwater turns one declarative configuration into the full set of
//! browser security headers - Content-Security-Policy, Strict-Transport-
//! Security, X-Frame-Options, Permissions-Policy, Referrer-Policy and the
//! cross-origin isolation policies - and ships them as a Tower layer.
//!
//! # Features
//!
//! - **Merged configuration**: partial overrides resolve against hardened
//!   defaults, field by field, with key-by-key merging for CSP directives
//!   and Permissions-Policy features
//! - **Exact wire grammars**: each header is assembled in its own syntax
//!   (`; `-joined CSP clauses, `, `-joined Permissions-Policy entries, ...)
//! - **Transport-aware HSTS**: Strict-Transport-Security is only ever sent
//!   over secure transport
//! - **Presets**: strict and moderate override catalogs for common postures
//! - **Cookie hardening**: cookie-attribute defaults and secure cookie
//!   construction
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use breakwater::{build_security_headers_layer, SecurityConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = SecurityConfig::builder()
//!         .hsts_max_age(63072000)
//!         .same_origin_framing()
//!         .build();
//!
//!     let app: Router = Router::new()
//!         .route("/", get(|| async { "hello" }))
//!         .layer(build_security_headers_layer(&config));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```
//!
//! The merge and synthesis functions are plain pure functions and can be
//! used without the layer:
//!
//! ```rust
//! use breakwater::{merge_config, synthesize, SecurityConfig, SecurityOverrides};
//!
//! let overrides = SecurityOverrides::from_json(r#"{"hsts": {"max_age": 300}}"#).unwrap();
//! let config = merge_config(&SecurityConfig::default(), &overrides);
//! let headers = synthesize(&config, true);
//! assert!(headers.get("Strict-Transport-Security").unwrap().starts_with("max-age=300"));
//! ```

pub mod config;
pub mod cookies;
mod error;
pub mod headers;
mod nonce;
mod sanitize;
pub mod utils;

// Re-exports for public API
pub use config::presets;
pub use config::{
    merge_config, AllowlistValue, CspConfig, CspDirectives, CspOverrides, DirectiveValue,
    EmbedderPolicy, EmbedderPolicyConfig, ExpectCtConfig, ExpectCtOverrides, HstsConfig,
    HstsOverrides, OpenerPolicy, OpenerPolicyConfig, PermissionsFeatures, PermissionsPolicyConfig,
    PermissionsPolicyOverrides, PolicyOverrides, ReferrerPolicy, ReferrerPolicyConfig,
    ResourcePolicy, ResourcePolicyConfig, SameSitePolicy, SecureCookiesConfig,
    SecureCookiesOverrides, SecurityConfig, SecurityConfigBuilder, SecurityOverrides,
    XContentTypeOptionsConfig, XContentTypeOptionsOverrides, XFrameOptionsConfig,
    XFrameOptionsOverrides, XssMode, XssProtectionConfig, XssProtectionOverrides,
};
pub use cookies::{apply_cookie_defaults, build_secure_cookie, CookieOptions};
pub use error::{BreakwaterError, Result};
pub use headers::{
    build_security_headers_layer, synthesize, SecurityHeaders, SecurityHeadersLayer,
    SecurityHeadersService,
};
pub use nonce::generate_nonce;
pub use sanitize::sanitize_input;
