use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::config::{
    kebab_directive_name, AllowlistValue, DirectiveValue, SecurityConfig, XssMode,
};

/// An ordered set of synthesized header name/value pairs
///
/// Order is the synthesizer's stable emission order; it carries no HTTP
/// meaning but keeps output deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SecurityHeaders {
    entries: Vec<(&'static str, String)>,
}

impl SecurityHeaders {
    fn push(&mut self, name: &'static str, value: String) {
        self.entries.push((name, value));
    }

    /// Look up a header value by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the set into an HTTP header map
    ///
    /// Values the HTTP layer rejects are skipped rather than raised;
    /// omitting one header is safer than failing the whole response.
    pub fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in &self.entries {
            let Ok(header_name) = HeaderName::from_bytes(name.as_bytes()) else {
                continue;
            };
            if let Ok(header_value) = HeaderValue::from_str(value) {
                headers.insert(header_name, header_value);
            } else {
                tracing::debug!(header = name, "skipping unencodable header value");
            }
        }
    }
}

impl IntoIterator for SecurityHeaders {
    type Item = (&'static str, String);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Serialize a merged configuration into its header set
///
/// Pure function of `(config, secure_transport)`: no feature's absence or
/// malformation fails synthesis; headers whose preconditions are unmet are
/// simply omitted. `secure_transport` gates HSTS only — the header is never
/// sent over plain HTTP regardless of configuration.
pub fn synthesize(config: &SecurityConfig, secure_transport: bool) -> SecurityHeaders {
    let mut headers = SecurityHeaders::default();

    // Content-Security-Policy
    let csp = &config.content_security_policy;
    if csp.enabled {
        let mut clauses: Vec<String> = Vec::new();
        for (name, value) in csp.directives.iter() {
            match (name, value) {
                ("upgradeInsecureRequests", DirectiveValue::Switch(true)) => {
                    clauses.push("upgrade-insecure-requests".to_string());
                }
                ("blockAllMixedContent", DirectiveValue::Switch(true)) => {
                    clauses.push("block-all-mixed-content".to_string());
                }
                (_, DirectiveValue::Sources(sources)) if !sources.is_empty() => {
                    clauses.push(format!("{} {}", kebab_directive_name(name), sources.join(" ")));
                }
                // Empty lists and switched-off directives emit nothing
                _ => {}
            }
        }
        if !clauses.is_empty() {
            let header_name = if csp.report_only {
                "Content-Security-Policy-Report-Only"
            } else {
                "Content-Security-Policy"
            };
            headers.push(header_name, clauses.join("; "));
        }
    }

    // X-Frame-Options: the option string passes through verbatim
    if config.x_frame_options.enabled && !config.x_frame_options.option.is_empty() {
        headers.push("X-Frame-Options", config.x_frame_options.option.clone());
    }

    // Referrer-Policy
    if config.referrer_policy.enabled {
        headers.push("Referrer-Policy", config.referrer_policy.policy.as_str().to_string());
    }

    // Permissions-Policy
    if config.permissions_policy.enabled && !config.permissions_policy.features.is_empty() {
        let value = config
            .permissions_policy
            .features
            .iter()
            .map(|(name, value)| match value {
                AllowlistValue::List(tokens) => format!("{}=({})", name, tokens.join(" ")),
                AllowlistValue::Single(token) => format!("{}={}", name, token),
            })
            .collect::<Vec<_>>()
            .join(", ");
        if !value.is_empty() {
            headers.push("Permissions-Policy", value);
        }
    }

    // X-Content-Type-Options
    if config.x_content_type_options.enabled {
        headers.push("X-Content-Type-Options", "nosniff".to_string());
    }

    // X-XSS-Protection
    if config.xss_protection.enabled {
        let mut value = String::from("1");
        match config.xss_protection.mode {
            XssMode::Block => value.push_str("; mode=block"),
            XssMode::Report => {
                if let Some(ref uri) = config.xss_protection.report_uri {
                    value.push_str("; report=");
                    value.push_str(uri);
                }
            }
        }
        headers.push("X-XSS-Protection", value);
    }

    // Strict-Transport-Security: only ever over secure transport
    if config.hsts.enabled {
        if secure_transport {
            let mut value = format!("max-age={}", config.hsts.max_age);
            if config.hsts.include_subdomains {
                value.push_str("; includeSubDomains");
            }
            if config.hsts.preload {
                value.push_str("; preload");
            }
            headers.push("Strict-Transport-Security", value);
        } else {
            tracing::debug!("suppressing Strict-Transport-Security over insecure transport");
        }
    }

    // Expect-CT: comma-separated, unlike HSTS
    if config.expect_ct.enabled {
        let mut value = format!("max-age={}", config.expect_ct.max_age);
        if config.expect_ct.enforce {
            value.push_str(", enforce");
        }
        if let Some(ref uri) = config.expect_ct.report_uri {
            value.push_str(&format!(", report-uri=\"{}\"", uri));
        }
        headers.push("Expect-CT", value);
    }

    // Cross-origin isolation policies
    if config.cross_origin_embedder_policy.enabled {
        headers.push(
            "Cross-Origin-Embedder-Policy",
            config.cross_origin_embedder_policy.policy.as_str().to_string(),
        );
    }

    if config.cross_origin_opener_policy.enabled {
        headers.push(
            "Cross-Origin-Opener-Policy",
            config.cross_origin_opener_policy.policy.as_str().to_string(),
        );
    }

    if config.cross_origin_resource_policy.enabled {
        headers.push(
            "Cross-Origin-Resource-Policy",
            config.cross_origin_resource_policy.policy.as_str().to_string(),
        );
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CspDirectives, SecurityConfig};

    #[test]
    fn test_default_config_over_https() {
        let headers = synthesize(&SecurityConfig::default(), true);

        let csp = headers.get("Content-Security-Policy").unwrap();
        assert!(csp.starts_with("default-src 'self'; "));
        assert!(csp.ends_with("upgrade-insecure-requests"));
        assert_eq!(headers.get("X-Frame-Options"), Some("DENY"));
        assert_eq!(headers.get("Referrer-Policy"), Some("strict-origin-when-cross-origin"));
        assert_eq!(headers.get("X-Content-Type-Options"), Some("nosniff"));
        assert_eq!(headers.get("X-XSS-Protection"), Some("1; mode=block"));
        assert_eq!(
            headers.get("Strict-Transport-Security"),
            Some("max-age=31536000; includeSubDomains; preload")
        );
        // Disabled-by-default features stay silent
        assert!(!headers.contains("Expect-CT"));
        assert!(!headers.contains("Cross-Origin-Embedder-Policy"));
    }

    #[test]
    fn test_disabled_config_emits_nothing() {
        let headers = synthesize(&SecurityConfig::disabled(), true);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_kebab_serialization_of_directives() {
        let mut config = SecurityConfig::disabled();
        config.content_security_policy.enabled = true;
        config.content_security_policy.directives = CspDirectives::from_iter([
            ("frameAncestors", DirectiveValue::sources(["'none'"])),
            ("defaultSrc", DirectiveValue::sources(["'self'"])),
        ]);

        let headers = synthesize(&config, false);
        assert_eq!(
            headers.get("Content-Security-Policy"),
            Some("frame-ancestors 'none'; default-src 'self'")
        );
    }

    #[test]
    fn test_empty_directives_suppress_csp_entirely() {
        let mut config = SecurityConfig::disabled();
        config.content_security_policy.enabled = true;
        config.content_security_policy.directives = CspDirectives::from_iter([
            ("scriptSrc", DirectiveValue::Sources(vec![])),
            ("upgradeInsecureRequests", DirectiveValue::Switch(false)),
        ]);

        let headers = synthesize(&config, true);
        assert!(!headers.contains("Content-Security-Policy"));
        assert!(!headers.contains("Content-Security-Policy-Report-Only"));
    }

    #[test]
    fn test_report_only_exclusivity() {
        let mut config = SecurityConfig::default();
        config.content_security_policy.report_only = true;

        let headers = synthesize(&config, true);
        assert!(headers.contains("Content-Security-Policy-Report-Only"));
        assert!(!headers.contains("Content-Security-Policy"));
    }

    #[test]
    fn test_hsts_transport_gating() {
        let mut config = SecurityConfig::disabled();
        config.hsts.enabled = true;
        config.hsts.max_age = 100;
        config.hsts.include_subdomains = false;
        config.hsts.preload = false;

        let insecure = synthesize(&config, false);
        assert!(!insecure.contains("Strict-Transport-Security"));

        let secure = synthesize(&config, true);
        assert_eq!(secure.get("Strict-Transport-Security"), Some("max-age=100"));
    }

    #[test]
    fn test_xss_report_mode() {
        let mut config = SecurityConfig::disabled();
        config.xss_protection.enabled = true;
        config.xss_protection.mode = XssMode::Report;
        config.xss_protection.report_uri = Some("https://example.com/xss".to_string());

        let headers = synthesize(&config, true);
        assert_eq!(
            headers.get("X-XSS-Protection"),
            Some("1; report=https://example.com/xss")
        );
    }

    #[test]
    fn test_xss_report_mode_without_uri_is_bare() {
        let mut config = SecurityConfig::disabled();
        config.xss_protection.enabled = true;
        config.xss_protection.mode = XssMode::Report;

        let headers = synthesize(&config, true);
        assert_eq!(headers.get("X-XSS-Protection"), Some("1"));
    }

    #[test]
    fn test_expect_ct_comma_grammar() {
        let mut config = SecurityConfig::disabled();
        config.expect_ct.enabled = true;
        config.expect_ct.max_age = 86400;
        config.expect_ct.enforce = true;
        config.expect_ct.report_uri = Some("https://example.com/ct".to_string());

        let headers = synthesize(&config, true);
        assert_eq!(
            headers.get("Expect-CT"),
            Some("max-age=86400, enforce, report-uri=\"https://example.com/ct\"")
        );
    }

    #[test]
    fn test_permissions_policy_mixed_values() {
        let mut config = SecurityConfig::disabled();
        config.permissions_policy.enabled = true;
        config.permissions_policy.features = crate::config::PermissionsFeatures::from_iter([
            ("camera", AllowlistValue::Single("'none'".to_string())),
            ("fullscreen", AllowlistValue::list(["'self'", "https://x.com"])),
        ]);

        let headers = synthesize(&config, true);
        assert_eq!(
            headers.get("Permissions-Policy"),
            Some("camera='none', fullscreen=('self' https://x.com)")
        );
    }

    #[test]
    fn test_empty_frame_option_is_omitted() {
        let mut config = SecurityConfig::disabled();
        config.x_frame_options.enabled = true;
        config.x_frame_options.option = String::new();

        let headers = synthesize(&config, true);
        assert!(!headers.contains("X-Frame-Options"));
    }

    #[test]
    fn test_custom_frame_option_passes_through() {
        let mut config = SecurityConfig::disabled();
        config.x_frame_options.enabled = true;
        config.x_frame_options.option = "ALLOW-FROM https://parent.example.com".to_string();

        let headers = synthesize(&config, true);
        assert_eq!(
            headers.get("X-Frame-Options"),
            Some("ALLOW-FROM https://parent.example.com")
        );
    }

    #[test]
    fn test_emission_order_is_stable() {
        let headers = synthesize(&SecurityConfig::default(), true);
        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "Content-Security-Policy",
                "X-Frame-Options",
                "Referrer-Policy",
                "Permissions-Policy",
                "X-Content-Type-Options",
                "X-XSS-Protection",
                "Strict-Transport-Security",
            ]
        );
    }

    #[test]
    fn test_apply_writes_header_map() {
        let headers = synthesize(&SecurityConfig::default(), true);
        let mut map = HeaderMap::new();
        headers.apply(&mut map);

        assert_eq!(map.get("x-frame-options").unwrap(), "DENY");
        assert_eq!(map.len(), headers.len());
    }

    #[test]
    fn test_apply_skips_unencodable_values() {
        let mut config = SecurityConfig::disabled();
        config.x_frame_options.enabled = true;
        config.x_frame_options.option = "DENY\r\nInjected: yes".to_string();

        let headers = synthesize(&config, true);
        let mut map = HeaderMap::new();
        headers.apply(&mut map);
        assert!(map.get("x-frame-options").is_none());
    }
}
