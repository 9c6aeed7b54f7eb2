//! Preset override catalogs for common deployment postures.
//!
//! Presets are ordinary [`SecurityOverrides`] documents fed to the same
//! merge engine as caller-supplied configuration; anything a preset leaves
//! out keeps its default.

use super::csp::{CspDirectives, DirectiveValue};
use super::overrides::{
    CspOverrides, HstsOverrides, PolicyOverrides, SecurityOverrides, XContentTypeOptionsOverrides,
    XFrameOptionsOverrides,
};
use super::policies::ReferrerPolicy;

/// Locked-down policy: no inline script or style, framing denied outright
pub fn strict() -> SecurityOverrides {
    SecurityOverrides {
        content_security_policy: Some(CspOverrides {
            enabled: Some(true),
            directives: Some(CspDirectives::from_iter([
                ("defaultSrc", DirectiveValue::sources(["'self'"])),
                ("scriptSrc", DirectiveValue::sources(["'self'"])),
                ("styleSrc", DirectiveValue::sources(["'self'"])),
                ("imgSrc", DirectiveValue::sources(["'self'", "data:"])),
                ("connectSrc", DirectiveValue::sources(["'self'"])),
                ("fontSrc", DirectiveValue::sources(["'self'"])),
                ("objectSrc", DirectiveValue::sources(["'none'"])),
                ("mediaSrc", DirectiveValue::sources(["'none'"])),
                ("frameSrc", DirectiveValue::sources(["'none'"])),
                ("frameAncestors", DirectiveValue::sources(["'none'"])),
                ("baseUri", DirectiveValue::sources(["'self'"])),
                ("upgradeInsecureRequests", DirectiveValue::Switch(true)),
            ])),
            ..Default::default()
        }),
        x_frame_options: Some(XFrameOptionsOverrides {
            enabled: Some(true),
            option: Some("DENY".to_string()),
        }),
        hsts: Some(HstsOverrides {
            enabled: Some(true),
            max_age: Some(31536000),
            include_subdomains: Some(true),
            preload: Some(true),
        }),
        x_content_type_options: Some(XContentTypeOptionsOverrides {
            enabled: Some(true),
        }),
        referrer_policy: Some(PolicyOverrides {
            enabled: Some(true),
            policy: Some(ReferrerPolicy::StrictOriginWhenCrossOrigin),
        }),
        ..Default::default()
    }
}

/// Practical policy: inline script and style tolerated, same-origin framing
pub fn moderate() -> SecurityOverrides {
    SecurityOverrides {
        content_security_policy: Some(CspOverrides {
            enabled: Some(true),
            directives: Some(CspDirectives::from_iter([
                ("defaultSrc", DirectiveValue::sources(["'self'"])),
                ("scriptSrc", DirectiveValue::sources(["'self'", "'unsafe-inline'"])),
                ("styleSrc", DirectiveValue::sources(["'self'", "'unsafe-inline'"])),
                ("imgSrc", DirectiveValue::sources(["'self'", "data:", "https:"])),
                ("connectSrc", DirectiveValue::sources(["'self'"])),
                ("fontSrc", DirectiveValue::sources(["'self'", "https:", "data:"])),
                ("objectSrc", DirectiveValue::sources(["'none'"])),
                ("upgradeInsecureRequests", DirectiveValue::Switch(true)),
            ])),
            ..Default::default()
        }),
        x_frame_options: Some(XFrameOptionsOverrides {
            enabled: Some(true),
            option: Some("SAMEORIGIN".to_string()),
        }),
        hsts: Some(HstsOverrides {
            enabled: Some(true),
            max_age: Some(31536000),
            ..Default::default()
        }),
        x_content_type_options: Some(XContentTypeOptionsOverrides {
            enabled: Some(true),
        }),
        referrer_policy: Some(PolicyOverrides {
            enabled: Some(true),
            policy: Some(ReferrerPolicy::StrictOriginWhenCrossOrigin),
        }),
        ..Default::default()
    }
}
