use serde::{Deserialize, Serialize};

use super::csp::CspDirectives;
use super::permissions::PermissionsFeatures;
use super::policies::{
    EmbedderPolicy, OpenerPolicy, ReferrerPolicy, ResourcePolicy, SameSitePolicy, XssMode,
};
use crate::error::Result;

/// A partial security configuration
///
/// Every feature and every field is optional; anything left `None` falls
/// back to the corresponding default during [`merge_config`](super::merge_config).
/// An empty override merges to exactly the defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_security_policy: Option<CspOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_frame_options: Option<XFrameOptionsOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_cookies: Option<SecureCookiesOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer_policy: Option<PolicyOverrides<ReferrerPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_policy: Option<PermissionsPolicyOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_content_type_options: Option<XContentTypeOptionsOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xss_protection: Option<XssProtectionOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsts: Option<HstsOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expect_ct: Option<ExpectCtOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_origin_embedder_policy: Option<PolicyOverrides<EmbedderPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_origin_opener_policy: Option<PolicyOverrides<OpenerPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_origin_resource_policy: Option<PolicyOverrides<ResourcePolicy>>,
}

impl SecurityOverrides {
    /// Parse an override document from JSON
    ///
    /// # Errors
    ///
    /// Returns a [`BreakwaterError::Document`](crate::BreakwaterError::Document)
    /// when the document is not valid JSON or does not match the override
    /// shape.
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Serialize this override document to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize this override document to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Partial Content-Security-Policy configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CspOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directives: Option<CspDirectives>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_uri: Option<String>,
}

/// Partial X-Frame-Options configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct XFrameOptionsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}

/// Partial secure-cookie configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SecureCookiesOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_site: Option<SameSitePolicy>,
}

/// Partial configuration for the single-policy features
/// (Referrer-Policy and the three Cross-Origin-* headers)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, bound(deserialize = "P: Deserialize<'de>"))]
pub struct PolicyOverrides<P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<P>,
}

impl<P> Default for PolicyOverrides<P> {
    fn default() -> Self {
        Self {
            enabled: None,
            policy: None,
        }
    }
}

/// Partial Permissions-Policy configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PermissionsPolicyOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<PermissionsFeatures>,
}

/// Partial X-Content-Type-Options configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct XContentTypeOptionsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Partial X-XSS-Protection configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct XssProtectionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<XssMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_uri: Option<String>,
}

/// Partial Strict-Transport-Security configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HstsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_subdomains: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preload: Option<bool>,
}

/// Partial Expect-CT configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ExpectCtOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_uri: Option<String>,
}
