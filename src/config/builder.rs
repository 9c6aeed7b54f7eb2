use super::csp::DirectiveValue;
use super::permissions::AllowlistValue;
use super::policies::{
    EmbedderPolicy, OpenerPolicy, ReferrerPolicy, ResourcePolicy, SameSitePolicy, XssMode,
};
use super::SecurityConfig;

/// Builder for SecurityConfig
#[must_use = "builder does nothing until you call build()"]
pub struct SecurityConfigBuilder {
    config: SecurityConfig,
}

impl SecurityConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SecurityConfig::default(),
        }
    }

    /// Start from the all-off baseline instead of the defaults
    pub fn from_disabled() -> Self {
        Self {
            config: SecurityConfig::disabled(),
        }
    }

    // Content-Security-Policy

    pub fn csp_enabled(mut self, enabled: bool) -> Self {
        self.config.content_security_policy.enabled = enabled;
        self
    }

    /// Set or replace a source-list directive (canonical camelCase name)
    pub fn csp_directive<I, S>(mut self, name: impl Into<String>, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .content_security_policy
            .directives
            .insert(name, DirectiveValue::sources(sources));
        self
    }

    /// Set or replace a valueless switch directive such as
    /// `upgradeInsecureRequests`
    pub fn csp_switch(mut self, name: impl Into<String>, on: bool) -> Self {
        self.config
            .content_security_policy
            .directives
            .insert(name, DirectiveValue::Switch(on));
        self
    }

    pub fn csp_report_only(mut self, report_only: bool) -> Self {
        self.config.content_security_policy.report_only = report_only;
        self
    }

    pub fn csp_report_uri(mut self, uri: impl Into<String>) -> Self {
        self.config.content_security_policy.report_uri = Some(uri.into());
        self
    }

    // X-Frame-Options

    pub fn deny_framing(mut self) -> Self {
        self.config.x_frame_options.enabled = true;
        self.config.x_frame_options.option = "DENY".to_string();
        self
    }

    pub fn same_origin_framing(mut self) -> Self {
        self.config.x_frame_options.enabled = true;
        self.config.x_frame_options.option = "SAMEORIGIN".to_string();
        self
    }

    /// Pass an arbitrary X-Frame-Options value through verbatim
    pub fn frame_option(mut self, option: impl Into<String>) -> Self {
        self.config.x_frame_options.enabled = true;
        self.config.x_frame_options.option = option.into();
        self
    }

    pub fn allow_framing(mut self) -> Self {
        self.config.x_frame_options.enabled = false;
        self
    }

    // Secure cookies

    pub fn secure_cookies(mut self, http_only: bool, secure: bool, same_site: SameSitePolicy) -> Self {
        self.config.secure_cookies.enabled = true;
        self.config.secure_cookies.http_only = http_only;
        self.config.secure_cookies.secure = secure;
        self.config.secure_cookies.same_site = same_site;
        self
    }

    // Referrer-Policy

    pub fn referrer_policy(mut self, policy: ReferrerPolicy) -> Self {
        self.config.referrer_policy.enabled = true;
        self.config.referrer_policy.policy = policy;
        self
    }

    pub fn referrer_policy_enabled(mut self, enabled: bool) -> Self {
        self.config.referrer_policy.enabled = enabled;
        self
    }

    // Permissions-Policy

    pub fn permissions_feature(
        mut self,
        name: impl Into<String>,
        value: impl Into<AllowlistValue>,
    ) -> Self {
        self.config.permissions_policy.features.insert(name, value);
        self
    }

    pub fn permissions_policy_enabled(mut self, enabled: bool) -> Self {
        self.config.permissions_policy.enabled = enabled;
        self
    }

    // X-Content-Type-Options

    pub fn nosniff(mut self, enabled: bool) -> Self {
        self.config.x_content_type_options.enabled = enabled;
        self
    }

    // X-XSS-Protection

    pub fn xss_protection(mut self, enabled: bool) -> Self {
        self.config.xss_protection.enabled = enabled;
        self
    }

    pub fn xss_protection_mode(mut self, mode: XssMode) -> Self {
        self.config.xss_protection.mode = mode;
        self
    }

    pub fn xss_report_uri(mut self, uri: impl Into<String>) -> Self {
        self.config.xss_protection.report_uri = Some(uri.into());
        self
    }

    // Strict-Transport-Security

    pub fn hsts_enabled(mut self, enabled: bool) -> Self {
        self.config.hsts.enabled = enabled;
        self
    }

    pub fn hsts_max_age(mut self, seconds: u64) -> Self {
        self.config.hsts.max_age = seconds;
        self
    }

    pub fn hsts_include_subdomains(mut self, include: bool) -> Self {
        self.config.hsts.include_subdomains = include;
        self
    }

    pub fn hsts_preload(mut self, preload: bool) -> Self {
        self.config.hsts.preload = preload;
        self
    }

    // Expect-CT

    pub fn expect_ct(mut self, max_age: u64, enforce: bool) -> Self {
        self.config.expect_ct.enabled = true;
        self.config.expect_ct.max_age = max_age;
        self.config.expect_ct.enforce = enforce;
        self
    }

    pub fn expect_ct_report_uri(mut self, uri: impl Into<String>) -> Self {
        self.config.expect_ct.report_uri = Some(uri.into());
        self
    }

    // Cross-origin isolation policies

    pub fn embedder_policy(mut self, policy: EmbedderPolicy) -> Self {
        self.config.cross_origin_embedder_policy.enabled = true;
        self.config.cross_origin_embedder_policy.policy = policy;
        self
    }

    pub fn opener_policy(mut self, policy: OpenerPolicy) -> Self {
        self.config.cross_origin_opener_policy.enabled = true;
        self.config.cross_origin_opener_policy.policy = policy;
        self
    }

    pub fn resource_policy(mut self, policy: ResourcePolicy) -> Self {
        self.config.cross_origin_resource_policy.enabled = true;
        self.config.cross_origin_resource_policy.policy = policy;
        self
    }

    pub fn build(self) -> SecurityConfig {
        self.config
    }
}

impl Default for SecurityConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SecurityConfig::builder().build();
        assert_eq!(config, SecurityConfig::default());
    }

    #[test]
    fn test_builder_framing_helpers() {
        let config = SecurityConfig::builder().same_origin_framing().build();
        assert_eq!(config.x_frame_options.option, "SAMEORIGIN");

        let config = SecurityConfig::builder().allow_framing().build();
        assert!(!config.x_frame_options.enabled);

        let config = SecurityConfig::builder()
            .frame_option("ALLOW-FROM https://parent.example.com")
            .build();
        assert_eq!(config.x_frame_options.option, "ALLOW-FROM https://parent.example.com");
    }

    #[test]
    fn test_builder_hsts() {
        let config = SecurityConfig::builder()
            .hsts_max_age(63072000) // 2 years
            .hsts_preload(false)
            .build();
        assert_eq!(config.hsts.max_age, 63072000);
        assert!(!config.hsts.preload);
        assert!(config.hsts.include_subdomains);
    }

    #[test]
    fn test_builder_csp_directives() {
        let config = SecurityConfig::builder()
            .csp_directive("scriptSrc", ["'self'", "https://cdn.example.com"])
            .csp_switch("blockAllMixedContent", true)
            .csp_report_only(true)
            .build();

        assert_eq!(
            config.content_security_policy.directives.get("scriptSrc"),
            Some(&DirectiveValue::sources(["'self'", "https://cdn.example.com"]))
        );
        assert_eq!(
            config.content_security_policy.directives.get("blockAllMixedContent"),
            Some(&DirectiveValue::Switch(true))
        );
        assert!(config.content_security_policy.report_only);
    }

    #[test]
    fn test_builder_from_disabled() {
        let config = SecurityConfigBuilder::from_disabled()
            .hsts_enabled(true)
            .hsts_max_age(300)
            .build();
        assert!(config.hsts.enabled);
        assert_eq!(config.hsts.max_age, 300);
        assert!(!config.content_security_policy.enabled);
        assert!(!config.x_frame_options.enabled);
    }

    #[test]
    fn test_builder_cross_origin_policies() {
        let config = SecurityConfig::builder()
            .embedder_policy(EmbedderPolicy::RequireCorp)
            .opener_policy(OpenerPolicy::SameOrigin)
            .resource_policy(ResourcePolicy::SameOrigin)
            .build();

        assert!(config.cross_origin_embedder_policy.enabled);
        assert_eq!(config.cross_origin_embedder_policy.policy, EmbedderPolicy::RequireCorp);
        assert!(config.cross_origin_opener_policy.enabled);
        assert!(config.cross_origin_resource_policy.enabled);
    }
}
