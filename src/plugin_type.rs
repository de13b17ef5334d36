//! The plugin-type value model and its parsing entry points
//!
//! A plugin type identifies a loadable component: either a bare registered
//! name resolved through the default source mechanism, or a fully qualified
//! maven-style artifact coordinate. Config values arrive in one of two
//! shapes, a bare string or a string-to-string mapping, so parsing exposes
//! one entry point per shape rather than dispatching on runtime type.
//!
//! Values are immutable once constructed and compare structurally.

use std::collections::HashMap;
use std::fmt;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ConfigError;

const SOURCE_KEY: &str = "source";

/// Source mechanism discriminant, queryable on any plugin type without
/// matching on the variant payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginSource {
    Default,
    Maven,
}

impl PluginSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginSource::Default => "default",
            PluginSource::Maven => "maven",
        }
    }
}

impl fmt::Display for PluginSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plugin identified by its registered short name, to be resolved through
/// the default source mechanism
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefaultPluginType {
    name: String,
}

impl DefaultPluginType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DefaultPluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A plugin identified by maven-style artifact coordinates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenPluginType {
    name: String,
    group: String,
    version: String,
    classifier: Option<String>,
}

impl MavenPluginType {
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        version: impl Into<String>,
        classifier: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            version: version.into(),
            classifier,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// Canonical `maven:<group>:<name>:<version>[:<classifier>]` form
    pub fn full_name(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "maven:{}:{}:{}:{}",
                self.group, self.name, self.version, classifier
            ),
            None => format!("maven:{}:{}:{}", self.group, self.name, self.version),
        }
    }
}

impl fmt::Display for MavenPluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// The resolved identity of a loadable plugin
///
/// A closed sum over the two supported source mechanisms. Callers choosing a
/// loading strategy branch on [`PluginType::source`] or match exhaustively on
/// the variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PluginType {
    Default(DefaultPluginType),
    Maven(MavenPluginType),
}

impl PluginType {
    /// Parse a bare-string config value
    ///
    /// Always yields the default-source variant; the string content is
    /// accepted verbatim, with no validation.
    pub fn from_string(name: &str) -> Self {
        PluginType::Default(DefaultPluginType::new(name))
    }

    /// Parse a structured-mapping config value
    ///
    /// Dispatches on the `"source"` key: absent or `"default"` selects the
    /// default-source variant, `"maven"` the maven variant. Keys beyond the
    /// ones each source requires are ignored.
    pub fn from_mapping(mapping: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let source = mapping
            .get(SOURCE_KEY)
            .map(String::as_str)
            .unwrap_or("default");

        match source {
            "default" => {
                let name = require_field(mapping, "name", "default")?;
                Ok(PluginType::Default(DefaultPluginType::new(name)))
            }
            "maven" => {
                let name = require_field(mapping, "name", "maven")?;
                let group = require_field(mapping, "group", "maven")?;
                let version = require_field(mapping, "version", "maven")?;
                let classifier = mapping.get("classifier").cloned();
                Ok(PluginType::Maven(MavenPluginType::new(
                    name, group, version, classifier,
                )))
            }
            other => Err(ConfigError::UnknownSourceType(other.to_string())),
        }
    }

    pub fn source(&self) -> PluginSource {
        match self {
            PluginType::Default(_) => PluginSource::Default,
            PluginType::Maven(_) => PluginSource::Maven,
        }
    }

    /// The plugin's registered short name, regardless of source
    pub fn name(&self) -> &str {
        match self {
            PluginType::Default(default) => default.name(),
            PluginType::Maven(maven) => maven.name(),
        }
    }
}

impl From<DefaultPluginType> for PluginType {
    fn from(default: DefaultPluginType) -> Self {
        PluginType::Default(default)
    }
}

impl From<MavenPluginType> for PluginType {
    fn from(maven: MavenPluginType) -> Self {
        PluginType::Maven(maven)
    }
}

fn require_field<'a>(
    mapping: &'a HashMap<String, String>,
    field: &'static str,
    source: &'static str,
) -> Result<&'a str, ConfigError> {
    mapping
        .get(field)
        .map(String::as_str)
        .ok_or(ConfigError::MissingField { field, source })
}

/// Serializes back into the shape it was parsed from: default types as the
/// bare name string, maven types as a tagged mapping.
impl Serialize for PluginType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PluginType::Default(default) => serializer.serialize_str(default.name()),
            PluginType::Maven(maven) => {
                let entries = if maven.classifier().is_some() { 5 } else { 4 };
                let mut map = serializer.serialize_map(Some(entries))?;
                map.serialize_entry(SOURCE_KEY, PluginSource::Maven.as_str())?;
                map.serialize_entry("name", maven.name())?;
                map.serialize_entry("group", maven.group())?;
                map.serialize_entry("version", maven.version())?;
                if let Some(classifier) = maven.classifier() {
                    map.serialize_entry("classifier", classifier)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PluginType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPluginType {
            Name(String),
            Mapping(HashMap<String, String>),
        }

        match RawPluginType::deserialize(deserializer)? {
            RawPluginType::Name(name) => Ok(PluginType::from_string(&name)),
            RawPluginType::Mapping(mapping) => {
                PluginType::from_mapping(&mapping).map_err(D::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_string_is_default_source() {
        let plugin_type = PluginType::from_string("a");
        assert_eq!(plugin_type.source(), PluginSource::Default);
        assert_eq!(plugin_type.name(), "a");
        assert_eq!(plugin_type, plugin_type.clone());
        assert_eq!(plugin_type, PluginType::from_string("a"));
        assert_ne!(plugin_type, PluginType::from_string("b"));
    }

    #[test]
    fn test_from_string_accepts_anything() {
        assert_eq!(PluginType::from_string("").name(), "");
        assert_eq!(PluginType::from_string("with spaces").name(), "with spaces");
        assert_eq!(PluginType::from_string("a:b:c").name(), "a:b:c");
    }

    #[test]
    fn test_mapping_default_source() {
        let parsed =
            PluginType::from_mapping(&mapping(&[("source", "default"), ("name", "c")])).unwrap();
        assert_eq!(parsed.source(), PluginSource::Default);
        assert_eq!(parsed, PluginType::from_string("c"));
        assert_ne!(parsed, PluginType::from_string("d"));
    }

    #[test]
    fn test_mapping_source_absent_means_default() {
        let parsed = PluginType::from_mapping(&mapping(&[("name", "c")])).unwrap();
        assert_eq!(parsed, PluginType::from_string("c"));
    }

    #[test]
    fn test_mapping_ignores_extra_keys() {
        let parsed =
            PluginType::from_mapping(&mapping(&[("name", "c"), ("comment", "ignored")])).unwrap();
        assert_eq!(parsed, PluginType::from_string("c"));
    }

    #[test]
    fn test_mapping_maven_source() {
        let parsed = PluginType::from_mapping(&mapping(&[
            ("source", "maven"),
            ("name", "e"),
            ("group", "org.embulk.foobar"),
            ("version", "0.1.2"),
        ]))
        .unwrap();

        assert_eq!(parsed.source(), PluginSource::Maven);
        let PluginType::Maven(maven) = &parsed else {
            panic!("expected maven variant");
        };
        assert_eq!(maven.name(), "e");
        assert_eq!(maven.group(), "org.embulk.foobar");
        assert_eq!(maven.version(), "0.1.2");
        assert_eq!(maven.classifier(), None);
        assert_eq!(maven.full_name(), "maven:org.embulk.foobar:e:0.1.2");
        assert_eq!(parsed, parsed.clone());
    }

    #[test]
    fn test_mapping_maven_source_with_classifier() {
        let parsed = PluginType::from_mapping(&mapping(&[
            ("source", "maven"),
            ("name", "e"),
            ("group", "org.embulk.foobar"),
            ("version", "0.1.2"),
            ("classifier", "bar"),
        ]))
        .unwrap();

        let PluginType::Maven(maven) = &parsed else {
            panic!("expected maven variant");
        };
        assert_eq!(maven.classifier(), Some("bar"));
        assert_eq!(maven.full_name(), "maven:org.embulk.foobar:e:0.1.2:bar");
    }

    #[test]
    fn test_mapping_unknown_source_fails() {
        let err = PluginType::from_mapping(&mapping(&[("source", "git"), ("name", "x")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSourceType(ref s) if s == "git"));
    }

    #[test]
    fn test_mapping_missing_required_field_fails() {
        let err = PluginType::from_mapping(&mapping(&[("source", "default")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: "name",
                source: "default"
            }
        ));

        let err = PluginType::from_mapping(&mapping(&[("source", "maven"), ("name", "e")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: "group",
                source: "maven"
            }
        ));
    }

    #[test]
    fn test_maven_structural_equality() {
        let a = MavenPluginType::new("e", "org.example", "1.0.0", None);
        let b = MavenPluginType::new("e", "org.example", "1.0.0", None);
        let c = MavenPluginType::new("e", "org.example", "1.0.0", Some("alpha".to_string()));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, MavenPluginType::new("e", "org.example", "1.0.1", None));
    }

    #[test]
    fn test_display() {
        assert_eq!(PluginType::from_string("csv").name(), "csv");
        assert_eq!(DefaultPluginType::new("csv").to_string(), "csv");
        assert_eq!(
            MavenPluginType::new("csv", "org.example", "1.2.3", None).to_string(),
            "maven:org.example:csv:1.2.3"
        );
        assert_eq!(PluginSource::Maven.to_string(), "maven");
    }

    #[test]
    fn test_deserialize_bare_string() {
        let parsed: PluginType = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(parsed, PluginType::from_string("csv"));
    }

    #[test]
    fn test_deserialize_mapping() {
        let parsed: PluginType = serde_json::from_str(
            r#"{"source": "maven", "name": "csv", "group": "org.example", "version": "1.2.3"}"#,
        )
        .unwrap();
        let expected = PluginType::Maven(MavenPluginType::new("csv", "org.example", "1.2.3", None));
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_deserialize_invalid_mapping_fails() {
        let result: Result<PluginType, _> =
            serde_json::from_str(r#"{"source": "maven", "name": "csv"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let default = PluginType::from_string("csv");
        assert_eq!(serde_json::to_string(&default).unwrap(), "\"csv\"");

        let maven = PluginType::Maven(MavenPluginType::new(
            "csv",
            "org.example",
            "1.2.3",
            Some("alpha".to_string()),
        ));
        let json = serde_json::to_string(&maven).unwrap();
        let back: PluginType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, maven);
    }
}
