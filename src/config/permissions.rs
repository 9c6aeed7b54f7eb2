use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Permissions-Policy configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PermissionsPolicyConfig {
    /// Whether the Permissions-Policy header is emitted
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Feature allowlist, in insertion order
    #[serde(default)]
    pub features: PermissionsFeatures,
}

impl Default for PermissionsPolicyConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            features: PermissionsFeatures::baseline(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// The allowlist for a single Permissions-Policy feature
///
/// A feature value is either a single token (`"'none'"`) or an ordered list
/// of tokens rendered as a parenthesized group.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AllowlistValue {
    Single(String),
    List(Vec<String>),
}

impl AllowlistValue {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for AllowlistValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for AllowlistValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for AllowlistValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// Insertion-ordered mapping of Permissions-Policy feature names to allowlists
///
/// Same ordering contract as `CspDirectives`: replacing an existing feature
/// keeps its position, new features append.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PermissionsFeatures {
    entries: Vec<(String, AllowlistValue)>,
}

impl PermissionsFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default deny-all feature set
    pub fn baseline() -> Self {
        let mut features = Self::new();
        for feature in [
            "camera",
            "microphone",
            "geolocation",
            "payment",
            "usb",
            "vr",
            "magnetometer",
            "gyroscope",
            "speaker",
            "vibrate",
        ] {
            features.insert(feature, AllowlistValue::Single("'none'".to_string()));
        }
        features
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AllowlistValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AllowlistValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AllowlistValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PermissionsFeatures
where
    K: Into<String>,
    V: Into<AllowlistValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut features = Self::new();
        for (name, value) in iter {
            features.insert(name, value);
        }
        features
    }
}

impl Serialize for PermissionsFeatures {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PermissionsFeatures {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FeaturesVisitor;

        impl<'de> Visitor<'de> for FeaturesVisitor {
            type Value = PermissionsFeatures;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of Permissions-Policy feature names to allowlists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut features = PermissionsFeatures::new();
                while let Some((name, value)) = access.next_entry::<String, AllowlistValue>()? {
                    features.insert(name, value);
                }
                Ok(features)
            }
        }

        deserializer.deserialize_map(FeaturesVisitor)
    }
}
