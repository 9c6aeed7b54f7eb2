use std::sync::Arc;

use axum::body::Body;
use axum::extract::Request;
use axum::http::uri::Scheme;
use axum::http::Response;
use futures::future::BoxFuture;
use tower::Service;

use super::synthesize::synthesize;
use crate::config::SecurityConfig;

/// Build a Tower layer that adds the configured security headers to responses
pub fn build_security_headers_layer(config: &SecurityConfig) -> SecurityHeadersLayer {
    SecurityHeadersLayer {
        config: Arc::new(config.clone()),
    }
}

/// Tower layer that adds security headers
#[derive(Clone)]
pub struct SecurityHeadersLayer {
    config: Arc<SecurityConfig>,
}

impl SecurityHeadersLayer {
    pub fn new(config: SecurityConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl<S> tower::Layer<S> for SecurityHeadersLayer {
    type Service = SecurityHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecurityHeadersService {
            inner,
            config: self.config.clone(),
        }
    }
}

/// Tower service that adds security headers
#[derive(Clone)]
pub struct SecurityHeadersService<S> {
    inner: S,
    config: Arc<SecurityConfig>,
}

impl<S> Service<Request> for SecurityHeadersService<S>
where
    S: Service<Request, Response = Response<Body>> + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let config = self.config.clone();
        let secure_transport = is_secure_transport(&req);
        let fut = self.inner.call(req);

        Box::pin(async move {
            let mut response = fut.await?;
            synthesize(&config, secure_transport).apply(response.headers_mut());
            Ok(response)
        })
    }
}

/// Whether the request arrived over secure transport
///
/// The URI scheme is only present on absolute-form requests; behind a
/// TLS-terminating proxy the x-forwarded-proto header is the signal.
fn is_secure_transport(req: &Request) -> bool {
    if req.uri().scheme() == Some(&Scheme::HTTPS) {
        return true;
    }

    req.headers()
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .map(|proto| proto.eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}
