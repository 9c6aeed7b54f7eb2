//! Security header configuration.
//!
//! The data model mirrors the headers it drives: a root [`SecurityConfig`]
//! with one sub-config per feature, each carrying an `enabled` flag plus the
//! feature's own fields. Defaults are strict-but-practical; callers override
//! them through [`SecurityOverrides`], the builder, presets, JSON documents,
//! or environment variables.

mod builder;
mod csp;
mod merge;
mod overrides;
mod permissions;
mod policies;
pub mod presets;

pub use builder::SecurityConfigBuilder;
pub use csp::{CspConfig, CspDirectives, DirectiveValue};
pub use merge::merge_config;
pub use overrides::{
    CspOverrides, ExpectCtOverrides, HstsOverrides, PermissionsPolicyOverrides, PolicyOverrides,
    SecureCookiesOverrides, SecurityOverrides, XContentTypeOptionsOverrides, XFrameOptionsOverrides,
    XssProtectionOverrides,
};
pub use permissions::{AllowlistValue, PermissionsFeatures, PermissionsPolicyConfig};
pub use policies::{
    EmbedderPolicy, OpenerPolicy, ReferrerPolicy, ResourcePolicy, SameSitePolicy, XssMode,
};

pub(crate) use csp::kebab_directive_name;

use serde::{Deserialize, Serialize};

use crate::utils::get_env_with_prefix;

/// Security headers configuration
///
/// A fully-populated configuration: every feature is present with concrete
/// values. Built once (at application startup) and treated as read-only by
/// the header synthesizer on every request.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub content_security_policy: CspConfig,
    pub x_frame_options: XFrameOptionsConfig,
    pub secure_cookies: SecureCookiesConfig,
    pub referrer_policy: ReferrerPolicyConfig,
    pub permissions_policy: PermissionsPolicyConfig,
    pub x_content_type_options: XContentTypeOptionsConfig,
    pub xss_protection: XssProtectionConfig,
    pub hsts: HstsConfig,
    pub expect_ct: ExpectCtConfig,
    pub cross_origin_embedder_policy: EmbedderPolicyConfig,
    pub cross_origin_opener_policy: OpenerPolicyConfig,
    pub cross_origin_resource_policy: ResourcePolicyConfig,
}

impl SecurityConfig {
    /// Create a new SecurityConfig builder
    pub fn builder() -> SecurityConfigBuilder {
        SecurityConfigBuilder::new()
    }

    /// A configuration with every feature switched off
    ///
    /// Useful as a baseline for callers who enable features one by one
    /// instead of narrowing the defaults.
    pub fn disabled() -> Self {
        Self {
            content_security_policy: CspConfig {
                enabled: false,
                ..Default::default()
            },
            x_frame_options: XFrameOptionsConfig {
                enabled: false,
                ..Default::default()
            },
            secure_cookies: SecureCookiesConfig {
                enabled: false,
                ..Default::default()
            },
            referrer_policy: ReferrerPolicyConfig {
                enabled: false,
                ..Default::default()
            },
            permissions_policy: PermissionsPolicyConfig {
                enabled: false,
                ..Default::default()
            },
            x_content_type_options: XContentTypeOptionsConfig { enabled: false },
            xss_protection: XssProtectionConfig {
                enabled: false,
                ..Default::default()
            },
            hsts: HstsConfig {
                enabled: false,
                ..Default::default()
            },
            expect_ct: ExpectCtConfig {
                enabled: false,
                ..Default::default()
            },
            cross_origin_embedder_policy: EmbedderPolicyConfig {
                enabled: false,
                ..Default::default()
            },
            cross_origin_opener_policy: OpenerPolicyConfig {
                enabled: false,
                ..Default::default()
            },
            cross_origin_resource_policy: ResourcePolicyConfig {
                enabled: false,
                ..Default::default()
            },
        }
    }

    /// The strict preset merged over the defaults
    pub fn strict() -> Self {
        merge_config(&Self::default(), &presets::strict())
    }

    /// The moderate preset merged over the defaults
    pub fn moderate() -> Self {
        merge_config(&Self::default(), &presets::moderate())
    }

    /// Apply a partial override on top of this configuration
    pub fn with_overrides(&self, overrides: &SecurityOverrides) -> Self {
        merge_config(self, overrides)
    }

    /// Load security configuration from environment variables
    ///
    /// Unparseable values fall back to the defaults rather than failing.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(enabled) = get_env_with_prefix("CSP_ENABLED") {
            config.content_security_policy.enabled = enabled.parse().unwrap_or(true);
        }

        if let Some(report_only) = get_env_with_prefix("CSP_REPORT_ONLY") {
            config.content_security_policy.report_only = report_only.parse().unwrap_or(false);
        }

        if let Some(report_uri) = get_env_with_prefix("CSP_REPORT_URI") {
            config.content_security_policy.report_uri = Some(report_uri);
        }

        if let Some(option) = get_env_with_prefix("X_FRAME_OPTIONS") {
            match option.to_uppercase().as_str() {
                "DISABLE" | "OFF" => config.x_frame_options.enabled = false,
                _ => config.x_frame_options.option = option,
            }
        }

        if let Some(policy) = get_env_with_prefix("REFERRER_POLICY") {
            match policy.to_lowercase().as_str() {
                "disable" | "off" => config.referrer_policy.enabled = false,
                value => {
                    config.referrer_policy.policy =
                        value.parse().unwrap_or_else(|_| ReferrerPolicy::default());
                }
            }
        }

        if let Some(nosniff) = get_env_with_prefix("NOSNIFF") {
            config.x_content_type_options.enabled = nosniff.parse().unwrap_or(true);
        }

        if let Some(mode) = get_env_with_prefix("XSS_PROTECTION_MODE") {
            config.xss_protection.mode = mode.parse().unwrap_or_else(|_| XssMode::default());
        }

        if let Some(report_uri) = get_env_with_prefix("XSS_PROTECTION_REPORT_URI") {
            config.xss_protection.report_uri = Some(report_uri);
        }

        if let Some(enabled) = get_env_with_prefix("HSTS_ENABLED") {
            config.hsts.enabled = enabled.parse().unwrap_or(true);
        }

        if let Some(max_age) = get_env_with_prefix("HSTS_MAX_AGE") {
            if let Ok(age) = max_age.parse() {
                config.hsts.max_age = age;
            }
        }

        if let Some(include_subdomains) = get_env_with_prefix("HSTS_INCLUDE_SUBDOMAINS") {
            config.hsts.include_subdomains = include_subdomains.parse().unwrap_or(true);
        }

        if let Some(preload) = get_env_with_prefix("HSTS_PRELOAD") {
            config.hsts.preload = preload.parse().unwrap_or(true);
        }

        if let Some(enabled) = get_env_with_prefix("EXPECT_CT_ENABLED") {
            config.expect_ct.enabled = enabled.parse().unwrap_or(false);
        }

        if let Some(max_age) = get_env_with_prefix("EXPECT_CT_MAX_AGE") {
            if let Ok(age) = max_age.parse() {
                config.expect_ct.max_age = age;
            }
        }

        if let Some(enforce) = get_env_with_prefix("EXPECT_CT_ENFORCE") {
            config.expect_ct.enforce = enforce.parse().unwrap_or(false);
        }

        if let Some(same_site) = get_env_with_prefix("SECURE_COOKIES_SAME_SITE") {
            config.secure_cookies.same_site =
                same_site.parse().unwrap_or_else(|_| SameSitePolicy::default());
        }

        // Setting a cross-origin policy via the environment also enables it
        if let Some(policy) = get_env_with_prefix("EMBEDDER_POLICY") {
            if let Ok(parsed) = policy.parse() {
                config.cross_origin_embedder_policy.enabled = true;
                config.cross_origin_embedder_policy.policy = parsed;
            }
        }

        if let Some(policy) = get_env_with_prefix("OPENER_POLICY") {
            if let Ok(parsed) = policy.parse() {
                config.cross_origin_opener_policy.enabled = true;
                config.cross_origin_opener_policy.policy = parsed;
            }
        }

        if let Some(policy) = get_env_with_prefix("RESOURCE_POLICY") {
            if let Ok(parsed) = policy.parse() {
                config.cross_origin_resource_policy.enabled = true;
                config.cross_origin_resource_policy.policy = parsed;
            }
        }

        config
    }
}

/// X-Frame-Options configuration
///
/// The option string is passed through verbatim so custom values such as
/// `ALLOW-FROM` remain expressible.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct XFrameOptionsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_frame_option")]
    pub option: String,
}

impl Default for XFrameOptionsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            option: default_frame_option(),
        }
    }
}

/// Cookie-attribute defaults advertised by the configuration
///
/// This feature emits no header of its own; it drives
/// [`cookie_options`](SecureCookiesConfig::cookie_options) and the
/// cookie-defaults applier.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SecureCookiesConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_enabled")]
    pub http_only: bool,

    #[serde(default = "default_enabled")]
    pub secure: bool,

    #[serde(default)]
    pub same_site: SameSitePolicy,
}

impl Default for SecureCookiesConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            http_only: true,
            secure: true,
            same_site: SameSitePolicy::default(),
        }
    }
}

/// Referrer-Policy configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReferrerPolicyConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub policy: ReferrerPolicy,
}

impl Default for ReferrerPolicyConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            policy: ReferrerPolicy::default(),
        }
    }
}

/// X-Content-Type-Options configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct XContentTypeOptionsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for XContentTypeOptionsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

/// X-XSS-Protection configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct XssProtectionConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub mode: XssMode,

    #[serde(default)]
    pub report_uri: Option<String>,
}

impl Default for XssProtectionConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            mode: XssMode::default(),
            report_uri: None,
        }
    }
}

/// Strict-Transport-Security configuration
///
/// The header is only ever emitted over secure transport, regardless of
/// these settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HstsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// max-age directive in seconds
    #[serde(default = "default_hsts_max_age")]
    pub max_age: u64,

    #[serde(default = "default_enabled")]
    pub include_subdomains: bool,

    #[serde(default = "default_enabled")]
    pub preload: bool,
}

impl Default for HstsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_age: default_hsts_max_age(),
            include_subdomains: true,
            preload: true,
        }
    }
}

/// Expect-CT configuration (deprecated header, disabled by default)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExpectCtConfig {
    #[serde(default)]
    pub enabled: bool,

    /// max-age directive in seconds
    #[serde(default = "default_expect_ct_max_age")]
    pub max_age: u64,

    #[serde(default)]
    pub enforce: bool,

    #[serde(default)]
    pub report_uri: Option<String>,
}

impl Default for ExpectCtConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_age: default_expect_ct_max_age(),
            enforce: false,
            report_uri: None,
        }
    }
}

/// Cross-Origin-Embedder-Policy configuration (disabled by default)
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EmbedderPolicyConfig {
    pub enabled: bool,
    pub policy: EmbedderPolicy,
}

/// Cross-Origin-Opener-Policy configuration (disabled by default)
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OpenerPolicyConfig {
    pub enabled: bool,
    pub policy: OpenerPolicy,
}

/// Cross-Origin-Resource-Policy configuration (disabled by default)
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResourcePolicyConfig {
    pub enabled: bool,
    pub policy: ResourcePolicy,
}

fn default_enabled() -> bool {
    true
}

fn default_frame_option() -> String {
    "DENY".to_string()
}

fn default_hsts_max_age() -> u64 {
    31536000 // 1 year
}

fn default_expect_ct_max_age() -> u64 {
    86400 // 24 hours
}
