//! Cookie-attribute defaults.
//!
//! Resolves partial cookie options against hardened defaults and builds
//! `cookie` crate cookies carrying the resolved attributes. Whether the
//! process is "production" is an explicit caller decision, not read from
//! the environment.

use cookie::Cookie;
use serde::{Deserialize, Serialize};

use crate::config::{SameSitePolicy, SecureCookiesConfig};

/// Cookie attributes, all optional
///
/// `http_only`, `secure`, and `same_site` have hardened defaults applied by
/// [`apply_cookie_defaults`]; the remaining attributes are only set when
/// supplied.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CookieOptions {
    pub http_only: Option<bool>,
    pub secure: Option<bool>,
    pub same_site: Option<SameSitePolicy>,
    /// Max-Age in seconds
    pub max_age: Option<i64>,
    pub path: Option<String>,
    pub domain: Option<String>,
}

/// Overlay caller-supplied options on the hardened defaults
///
/// Starts from `{http_only: true, secure: is_production, same_site: Strict}`
/// and lets every explicitly supplied field win. The result always has the
/// three defaulted attributes populated.
pub fn apply_cookie_defaults(options: &CookieOptions, is_production: bool) -> CookieOptions {
    CookieOptions {
        http_only: Some(options.http_only.unwrap_or(true)),
        secure: Some(options.secure.unwrap_or(is_production)),
        same_site: Some(options.same_site.unwrap_or(SameSitePolicy::Strict)),
        max_age: options.max_age,
        path: options.path.clone(),
        domain: options.domain.clone(),
    }
}

/// Build a cookie carrying the given attributes
///
/// Attributes left `None` are not set on the cookie; run the options
/// through [`apply_cookie_defaults`] first for the hardened baseline.
pub fn build_secure_cookie(
    name: impl Into<String>,
    value: impl Into<String>,
    options: &CookieOptions,
) -> Cookie<'static> {
    let mut builder = Cookie::build((name.into(), value.into()));

    if let Some(http_only) = options.http_only {
        builder = builder.http_only(http_only);
    }
    if let Some(secure) = options.secure {
        builder = builder.secure(secure);
    }
    if let Some(same_site) = options.same_site {
        builder = builder.same_site(same_site.into());
    }
    if let Some(max_age) = options.max_age {
        builder = builder.max_age(cookie::time::Duration::seconds(max_age));
    }
    if let Some(ref path) = options.path {
        builder = builder.path(path.clone());
    }
    if let Some(ref domain) = options.domain {
        builder = builder.domain(domain.clone());
    }

    builder.build()
}

impl SecureCookiesConfig {
    /// The cookie options this configuration advertises
    pub fn cookie_options(&self) -> CookieOptions {
        CookieOptions {
            http_only: Some(self.http_only),
            secure: Some(self.secure),
            same_site: Some(self.same_site),
            ..Default::default()
        }
    }
}
