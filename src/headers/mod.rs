//! Header synthesis and the response middleware.
//!
//! [`synthesize`] turns a merged [`SecurityConfig`](crate::SecurityConfig)
//! plus the request's transport into the final wire-format header set;
//! [`SecurityHeadersLayer`] applies that set to every response of a wrapped
//! service.

mod layer;
mod synthesize;

pub use layer::{build_security_headers_layer, SecurityHeadersLayer, SecurityHeadersService};
pub use synthesize::{synthesize, SecurityHeaders};
