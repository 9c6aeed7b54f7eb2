//! Configuration merging.
//!
//! Combines a fully-populated default configuration with a partial override,
//! feature by feature. Scalar fields shallow-override; the two nested
//! mappings (CSP directives and Permissions-Policy features) merge one level
//! deeper, key by key. Merging is pure and total: it never fails, and an
//! empty override yields the defaults unchanged.

use super::csp::{CspConfig, CspDirectives};
use super::overrides::{
    CspOverrides, ExpectCtOverrides, HstsOverrides, PermissionsPolicyOverrides, PolicyOverrides,
    SecureCookiesOverrides, SecurityOverrides, XContentTypeOptionsOverrides,
    XFrameOptionsOverrides, XssProtectionOverrides,
};
use super::permissions::{PermissionsFeatures, PermissionsPolicyConfig};
use super::{
    EmbedderPolicyConfig, ExpectCtConfig, HstsConfig, OpenerPolicyConfig, ReferrerPolicyConfig,
    ResourcePolicyConfig, SecureCookiesConfig, SecurityConfig, XContentTypeOptionsConfig,
    XFrameOptionsConfig, XssProtectionConfig,
};

/// Merge a partial override on top of a default configuration
///
/// Each feature is resolved independently: a feature absent from the
/// override is taken from the defaults verbatim, and within a supplied
/// feature every absent field retains its default. The `enabled` flag is
/// never inferred from the presence of other fields.
pub fn merge_config(defaults: &SecurityConfig, overrides: &SecurityOverrides) -> SecurityConfig {
    SecurityConfig {
        content_security_policy: merge_csp(
            &defaults.content_security_policy,
            overrides.content_security_policy.as_ref(),
        ),
        x_frame_options: merge_x_frame_options(
            &defaults.x_frame_options,
            overrides.x_frame_options.as_ref(),
        ),
        secure_cookies: merge_secure_cookies(
            &defaults.secure_cookies,
            overrides.secure_cookies.as_ref(),
        ),
        referrer_policy: merge_referrer_policy(
            &defaults.referrer_policy,
            overrides.referrer_policy.as_ref(),
        ),
        permissions_policy: merge_permissions_policy(
            &defaults.permissions_policy,
            overrides.permissions_policy.as_ref(),
        ),
        x_content_type_options: merge_x_content_type_options(
            &defaults.x_content_type_options,
            overrides.x_content_type_options.as_ref(),
        ),
        xss_protection: merge_xss_protection(
            &defaults.xss_protection,
            overrides.xss_protection.as_ref(),
        ),
        hsts: merge_hsts(&defaults.hsts, overrides.hsts.as_ref()),
        expect_ct: merge_expect_ct(&defaults.expect_ct, overrides.expect_ct.as_ref()),
        cross_origin_embedder_policy: merge_embedder_policy(
            &defaults.cross_origin_embedder_policy,
            overrides.cross_origin_embedder_policy.as_ref(),
        ),
        cross_origin_opener_policy: merge_opener_policy(
            &defaults.cross_origin_opener_policy,
            overrides.cross_origin_opener_policy.as_ref(),
        ),
        cross_origin_resource_policy: merge_resource_policy(
            &defaults.cross_origin_resource_policy,
            overrides.cross_origin_resource_policy.as_ref(),
        ),
    }
}

fn merge_csp(base: &CspConfig, overrides: Option<&CspOverrides>) -> CspConfig {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    CspConfig {
        enabled: overrides.enabled.unwrap_or(base.enabled),
        directives: merge_directives(&base.directives, overrides.directives.as_ref()),
        report_only: overrides.report_only.unwrap_or(base.report_only),
        report_uri: overrides
            .report_uri
            .clone()
            .or_else(|| base.report_uri.clone()),
    }
}

/// Key-by-key union of directive maps; the override wins on collision.
/// Existing keys keep their base position, new keys append in override order.
fn merge_directives(base: &CspDirectives, overrides: Option<&CspDirectives>) -> CspDirectives {
    let mut merged = base.clone();
    if let Some(overrides) = overrides {
        for (name, value) in overrides.iter() {
            merged.insert(name, value.clone());
        }
    }
    merged
}

fn merge_x_frame_options(
    base: &XFrameOptionsConfig,
    overrides: Option<&XFrameOptionsOverrides>,
) -> XFrameOptionsConfig {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    XFrameOptionsConfig {
        enabled: overrides.enabled.unwrap_or(base.enabled),
        option: overrides.option.clone().unwrap_or_else(|| base.option.clone()),
    }
}

fn merge_secure_cookies(
    base: &SecureCookiesConfig,
    overrides: Option<&SecureCookiesOverrides>,
) -> SecureCookiesConfig {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    SecureCookiesConfig {
        enabled: overrides.enabled.unwrap_or(base.enabled),
        http_only: overrides.http_only.unwrap_or(base.http_only),
        secure: overrides.secure.unwrap_or(base.secure),
        same_site: overrides.same_site.unwrap_or(base.same_site),
    }
}

fn merge_referrer_policy(
    base: &ReferrerPolicyConfig,
    overrides: Option<&PolicyOverrides<super::ReferrerPolicy>>,
) -> ReferrerPolicyConfig {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    ReferrerPolicyConfig {
        enabled: overrides.enabled.unwrap_or(base.enabled),
        policy: overrides.policy.unwrap_or(base.policy),
    }
}

fn merge_permissions_policy(
    base: &PermissionsPolicyConfig,
    overrides: Option<&PermissionsPolicyOverrides>,
) -> PermissionsPolicyConfig {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    PermissionsPolicyConfig {
        enabled: overrides.enabled.unwrap_or(base.enabled),
        features: merge_features(&base.features, overrides.features.as_ref()),
    }
}

fn merge_features(
    base: &PermissionsFeatures,
    overrides: Option<&PermissionsFeatures>,
) -> PermissionsFeatures {
    let mut merged = base.clone();
    if let Some(overrides) = overrides {
        for (name, value) in overrides.iter() {
            merged.insert(name, value.clone());
        }
    }
    merged
}

fn merge_x_content_type_options(
    base: &XContentTypeOptionsConfig,
    overrides: Option<&XContentTypeOptionsOverrides>,
) -> XContentTypeOptionsConfig {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    XContentTypeOptionsConfig {
        enabled: overrides.enabled.unwrap_or(base.enabled),
    }
}

fn merge_xss_protection(
    base: &XssProtectionConfig,
    overrides: Option<&XssProtectionOverrides>,
) -> XssProtectionConfig {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    XssProtectionConfig {
        enabled: overrides.enabled.unwrap_or(base.enabled),
        mode: overrides.mode.unwrap_or(base.mode),
        report_uri: overrides
            .report_uri
            .clone()
            .or_else(|| base.report_uri.clone()),
    }
}

fn merge_hsts(base: &HstsConfig, overrides: Option<&HstsOverrides>) -> HstsConfig {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    HstsConfig {
        enabled: overrides.enabled.unwrap_or(base.enabled),
        max_age: overrides.max_age.unwrap_or(base.max_age),
        include_subdomains: overrides.include_subdomains.unwrap_or(base.include_subdomains),
        preload: overrides.preload.unwrap_or(base.preload),
    }
}

fn merge_expect_ct(base: &ExpectCtConfig, overrides: Option<&ExpectCtOverrides>) -> ExpectCtConfig {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    ExpectCtConfig {
        enabled: overrides.enabled.unwrap_or(base.enabled),
        max_age: overrides.max_age.unwrap_or(base.max_age),
        enforce: overrides.enforce.unwrap_or(base.enforce),
        report_uri: overrides
            .report_uri
            .clone()
            .or_else(|| base.report_uri.clone()),
    }
}

fn merge_embedder_policy(
    base: &EmbedderPolicyConfig,
    overrides: Option<&PolicyOverrides<super::EmbedderPolicy>>,
) -> EmbedderPolicyConfig {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    EmbedderPolicyConfig {
        enabled: overrides.enabled.unwrap_or(base.enabled),
        policy: overrides.policy.unwrap_or(base.policy),
    }
}

fn merge_opener_policy(
    base: &OpenerPolicyConfig,
    overrides: Option<&PolicyOverrides<super::OpenerPolicy>>,
) -> OpenerPolicyConfig {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    OpenerPolicyConfig {
        enabled: overrides.enabled.unwrap_or(base.enabled),
        policy: overrides.policy.unwrap_or(base.policy),
    }
}

fn merge_resource_policy(
    base: &ResourcePolicyConfig,
    overrides: Option<&PolicyOverrides<super::ResourcePolicy>>,
) -> ResourcePolicyConfig {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    ResourcePolicyConfig {
        enabled: overrides.enabled.unwrap_or(base.enabled),
        policy: overrides.policy.unwrap_or(base.policy),
    }
}
