use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Content-Security-Policy configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CspConfig {
    /// Whether the CSP header is emitted at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Directive list, in insertion order
    #[serde(default)]
    pub directives: CspDirectives,

    /// Emit Content-Security-Policy-Report-Only instead of the enforcing header
    #[serde(default)]
    pub report_only: bool,

    /// Violation report endpoint
    #[serde(default)]
    pub report_uri: Option<String>,
}

impl Default for CspConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            directives: CspDirectives::baseline(),
            report_only: false,
            report_uri: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// The value of a single CSP directive
///
/// Most directives carry an ordered source list. `upgradeInsecureRequests`
/// and `blockAllMixedContent` are valueless switches.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DirectiveValue {
    Sources(Vec<String>),
    Switch(bool),
}

impl DirectiveValue {
    pub fn sources<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sources(values.into_iter().map(Into::into).collect())
    }
}

impl From<bool> for DirectiveValue {
    fn from(on: bool) -> Self {
        Self::Switch(on)
    }
}

impl From<Vec<String>> for DirectiveValue {
    fn from(values: Vec<String>) -> Self {
        Self::Sources(values)
    }
}

/// Insertion-ordered mapping of CSP directive names to values
///
/// Keys are the canonical camelCase directive names (`scriptSrc`,
/// `frameAncestors`, ...); the kebab-case wire form is produced only at
/// header-serialization time. Inserting an existing key replaces its value
/// in place without changing its position; new keys append.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CspDirectives {
    entries: Vec<(String, DirectiveValue)>,
}

impl CspDirectives {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default directive set applied when the caller supplies none
    pub fn baseline() -> Self {
        let mut directives = Self::new();
        directives.insert("defaultSrc", DirectiveValue::sources(["'self'"]));
        directives.insert("scriptSrc", DirectiveValue::sources(["'self'", "'unsafe-inline'"]));
        directives.insert("styleSrc", DirectiveValue::sources(["'self'", "'unsafe-inline'"]));
        directives.insert("imgSrc", DirectiveValue::sources(["'self'", "data:", "https:"]));
        directives.insert("connectSrc", DirectiveValue::sources(["'self'"]));
        directives.insert("fontSrc", DirectiveValue::sources(["'self'", "https:", "data:"]));
        directives.insert("objectSrc", DirectiveValue::sources(["'none'"]));
        directives.insert("mediaSrc", DirectiveValue::sources(["'self'"]));
        directives.insert("frameSrc", DirectiveValue::sources(["'none'"]));
        directives.insert("childSrc", DirectiveValue::sources(["'self'"]));
        directives.insert("workerSrc", DirectiveValue::sources(["'self'"]));
        directives.insert("manifestSrc", DirectiveValue::sources(["'self'"]));
        directives.insert("formAction", DirectiveValue::sources(["'self'"]));
        directives.insert("frameAncestors", DirectiveValue::sources(["'none'"]));
        directives.insert("baseUri", DirectiveValue::sources(["'self'"]));
        directives.insert("upgradeInsecureRequests", DirectiveValue::Switch(true));
        directives
    }

    /// Insert or replace a directive, preserving insertion order for
    /// existing keys
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<DirectiveValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&DirectiveValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectiveValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CspDirectives
where
    K: Into<String>,
    V: Into<DirectiveValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut directives = Self::new();
        for (name, value) in iter {
            directives.insert(name, value);
        }
        directives
    }
}

impl Serialize for CspDirectives {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CspDirectives {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DirectivesVisitor;

        impl<'de> Visitor<'de> for DirectivesVisitor {
            type Value = CspDirectives;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of CSP directive names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut directives = CspDirectives::new();
                while let Some((name, value)) = access.next_entry::<String, DirectiveValue>()? {
                    directives.insert(name, value);
                }
                Ok(directives)
            }
        }

        deserializer.deserialize_map(DirectivesVisitor)
    }
}

/// Transpose a camelCase directive name to its kebab-case wire form
///
/// Total over all current and future directive names: every ASCII uppercase
/// letter becomes `-` plus its lowercase form.
pub(crate) fn kebab_directive_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
