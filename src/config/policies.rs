use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BreakwaterError;

/// Referrer-Policy header value
///
/// The eight policy tokens defined by the W3C Referrer Policy specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferrerPolicy {
    /// No referrer information is sent
    NoReferrer,
    /// Full referrer to same-security destinations, nothing on downgrade
    NoReferrerWhenDowngrade,
    /// Send origin only
    Origin,
    /// Full referrer for same-origin, origin only for cross-origin
    OriginWhenCrossOrigin,
    /// Only send referrer for same-origin requests
    SameOrigin,
    /// Origin only, nothing on downgrade
    StrictOrigin,
    /// Full referrer for same-origin, origin for cross-origin, nothing on downgrade
    StrictOriginWhenCrossOrigin,
    /// Send full referrer (not recommended)
    UnsafeUrl,
}

impl ReferrerPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoReferrer => "no-referrer",
            Self::NoReferrerWhenDowngrade => "no-referrer-when-downgrade",
            Self::Origin => "origin",
            Self::OriginWhenCrossOrigin => "origin-when-cross-origin",
            Self::SameOrigin => "same-origin",
            Self::StrictOrigin => "strict-origin",
            Self::StrictOriginWhenCrossOrigin => "strict-origin-when-cross-origin",
            Self::UnsafeUrl => "unsafe-url",
        }
    }
}

impl Default for ReferrerPolicy {
    fn default() -> Self {
        Self::StrictOriginWhenCrossOrigin
    }
}

impl FromStr for ReferrerPolicy {
    type Err = BreakwaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no-referrer" => Ok(Self::NoReferrer),
            "no-referrer-when-downgrade" => Ok(Self::NoReferrerWhenDowngrade),
            "origin" => Ok(Self::Origin),
            "origin-when-cross-origin" => Ok(Self::OriginWhenCrossOrigin),
            "same-origin" => Ok(Self::SameOrigin),
            "strict-origin" => Ok(Self::StrictOrigin),
            "strict-origin-when-cross-origin" => Ok(Self::StrictOriginWhenCrossOrigin),
            "unsafe-url" => Ok(Self::UnsafeUrl),
            other => Err(BreakwaterError::unknown_token("referrer policy", other)),
        }
    }
}

/// SameSite cookie attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SameSitePolicy {
    Strict,
    Lax,
    None,
}

impl SameSitePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

impl Default for SameSitePolicy {
    fn default() -> Self {
        Self::Strict
    }
}

impl FromStr for SameSitePolicy {
    type Err = BreakwaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lax" => Ok(Self::Lax),
            "none" => Ok(Self::None),
            other => Err(BreakwaterError::unknown_token("SameSite", other)),
        }
    }
}

impl From<SameSitePolicy> for cookie::SameSite {
    fn from(policy: SameSitePolicy) -> Self {
        match policy {
            SameSitePolicy::Strict => cookie::SameSite::Strict,
            SameSitePolicy::Lax => cookie::SameSite::Lax,
            SameSitePolicy::None => cookie::SameSite::None,
        }
    }
}

/// X-XSS-Protection filter mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum XssMode {
    /// Block the page when an attack is detected
    Block,
    /// Report the violation to a collection endpoint instead of blocking
    Report,
}

impl Default for XssMode {
    fn default() -> Self {
        Self::Block
    }
}

impl FromStr for XssMode {
    type Err = BreakwaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "block" => Ok(Self::Block),
            "report" => Ok(Self::Report),
            other => Err(BreakwaterError::unknown_token("XSS protection mode", other)),
        }
    }
}

/// Cross-Origin-Embedder-Policy header value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmbedderPolicy {
    UnsafeNone,
    RequireCorp,
}

impl EmbedderPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsafeNone => "unsafe-none",
            Self::RequireCorp => "require-corp",
        }
    }
}

impl Default for EmbedderPolicy {
    fn default() -> Self {
        Self::UnsafeNone
    }
}

impl FromStr for EmbedderPolicy {
    type Err = BreakwaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unsafe-none" => Ok(Self::UnsafeNone),
            "require-corp" => Ok(Self::RequireCorp),
            other => Err(BreakwaterError::unknown_token("embedder policy", other)),
        }
    }
}

/// Cross-Origin-Opener-Policy header value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenerPolicy {
    UnsafeNone,
    SameOriginAllowPopups,
    SameOrigin,
}

impl OpenerPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsafeNone => "unsafe-none",
            Self::SameOriginAllowPopups => "same-origin-allow-popups",
            Self::SameOrigin => "same-origin",
        }
    }
}

impl Default for OpenerPolicy {
    fn default() -> Self {
        Self::SameOriginAllowPopups
    }
}

impl FromStr for OpenerPolicy {
    type Err = BreakwaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unsafe-none" => Ok(Self::UnsafeNone),
            "same-origin-allow-popups" => Ok(Self::SameOriginAllowPopups),
            "same-origin" => Ok(Self::SameOrigin),
            other => Err(BreakwaterError::unknown_token("opener policy", other)),
        }
    }
}

/// Cross-Origin-Resource-Policy header value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourcePolicy {
    SameSite,
    SameOrigin,
    CrossOrigin,
}

impl ResourcePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SameSite => "same-site",
            Self::SameOrigin => "same-origin",
            Self::CrossOrigin => "cross-origin",
        }
    }
}

impl Default for ResourcePolicy {
    fn default() -> Self {
        Self::SameSite
    }
}

impl FromStr for ResourcePolicy {
    type Err = BreakwaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "same-site" => Ok(Self::SameSite),
            "same-origin" => Ok(Self::SameOrigin),
            "cross-origin" => Ok(Self::CrossOrigin),
            other => Err(BreakwaterError::unknown_token("resource policy", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referrer_policy_tokens() {
        assert_eq!(ReferrerPolicy::NoReferrer.as_str(), "no-referrer");
        assert_eq!(
            ReferrerPolicy::StrictOriginWhenCrossOrigin.as_str(),
            "strict-origin-when-cross-origin"
        );
        assert_eq!(ReferrerPolicy::UnsafeUrl.as_str(), "unsafe-url");
    }

    #[test]
    fn test_referrer_policy_round_trip() {
        for policy in [
            ReferrerPolicy::NoReferrer,
            ReferrerPolicy::NoReferrerWhenDowngrade,
            ReferrerPolicy::Origin,
            ReferrerPolicy::OriginWhenCrossOrigin,
            ReferrerPolicy::SameOrigin,
            ReferrerPolicy::StrictOrigin,
            ReferrerPolicy::StrictOriginWhenCrossOrigin,
            ReferrerPolicy::UnsafeUrl,
        ] {
            assert_eq!(policy.as_str().parse::<ReferrerPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_referrer_policy_serde_kebab() {
        let json = serde_json::to_string(&ReferrerPolicy::StrictOriginWhenCrossOrigin).unwrap();
        assert_eq!(json, "\"strict-origin-when-cross-origin\"");
        let parsed: ReferrerPolicy = serde_json::from_str("\"no-referrer\"").unwrap();
        assert_eq!(parsed, ReferrerPolicy::NoReferrer);
    }

    #[test]
    fn test_unknown_referrer_policy_rejected() {
        let err = "sideways-origin".parse::<ReferrerPolicy>().unwrap_err();
        assert!(err.to_string().contains("sideways-origin"));
    }

    #[test]
    fn test_same_site_conversion() {
        assert_eq!(
            cookie::SameSite::from(SameSitePolicy::Strict),
            cookie::SameSite::Strict
        );
        assert_eq!(
            cookie::SameSite::from(SameSitePolicy::None),
            cookie::SameSite::None
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            ReferrerPolicy::default(),
            ReferrerPolicy::StrictOriginWhenCrossOrigin
        );
        assert_eq!(SameSitePolicy::default(), SameSitePolicy::Strict);
        assert_eq!(XssMode::default(), XssMode::Block);
        assert_eq!(EmbedderPolicy::default(), EmbedderPolicy::UnsafeNone);
        assert_eq!(OpenerPolicy::default(), OpenerPolicy::SameOriginAllowPopups);
        assert_eq!(ResourcePolicy::default(), ResourcePolicy::SameSite);
    }

    #[test]
    fn test_cross_origin_policy_tokens() {
        assert_eq!(EmbedderPolicy::RequireCorp.as_str(), "require-corp");
        assert_eq!(
            OpenerPolicy::SameOriginAllowPopups.as_str(),
            "same-origin-allow-popups"
        );
        assert_eq!(ResourcePolicy::CrossOrigin.as_str(), "cross-origin");
    }
}
