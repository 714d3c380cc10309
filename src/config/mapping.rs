//! Mapping from the YAML document to a [`Configuration`].
//!
//! Syntax errors are fatal. Everything after that is recovered locally:
//! unknown rule entries are dropped, invalid filter values are treated as
//! unset, and a document of the wrong shape yields the default
//! configuration. Each recovery is logged at `warn`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::core::{Configuration, ExtensionStrategy, CURRENT_VERSION};
use crate::core::{MemberKind, Visibility};
use crate::errors::{ReorderError, Result};
use crate::ordering::{MethodClass, OrderingRule};

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    version: Option<Value>,
    #[serde(default)]
    ordering: Option<Value>,
    #[serde(default)]
    extensions: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawOrdering {
    #[serde(default)]
    members: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawExtensions {
    #[serde(default)]
    strategy: Option<Value>,
    #[serde(default)]
    respect_boundaries: Option<Value>,
}

/// Parse configuration file contents.
pub fn parse_config(contents: &str) -> Result<Configuration> {
    let document: Value = serde_yaml::from_str(contents)
        .map_err(|e| ReorderError::config(format!("Invalid YAML: {}", e)))?;

    if document.is_null() {
        return Ok(Configuration::default());
    }

    let raw: RawConfig = match serde_yaml::from_value(document) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("Configuration has an unexpected shape ({}); using defaults", e);
            return Ok(Configuration::default());
        }
    };

    Ok(map_raw(raw))
}

fn map_raw(raw: RawConfig) -> Configuration {
    let ordering: RawOrdering = section(raw.ordering, "ordering");
    let rules = ordering
        .members
        .map(|entries| entries.iter().filter_map(map_rule).collect())
        .unwrap_or_default();

    let extensions: RawExtensions = section(raw.extensions, "extensions");
    let extension_strategy = match extensions.strategy.as_ref().filter(|v| !v.is_null()) {
        None => ExtensionStrategy::default(),
        Some(value) => value
            .as_str()
            .and_then(ExtensionStrategy::from_identifier)
            .unwrap_or_else(|| {
                tracing::warn!("Unknown extension strategy {:?}; using 'separate'", value);
                ExtensionStrategy::default()
            }),
    };

    Configuration {
        version: version(raw.version.as_ref()),
        ordering_rules: Vec::new(),
        extension_strategy,
        respect_extension_boundaries: scalar_bool(
            extensions.respect_boundaries.as_ref(),
            "extensions.respect_boundaries",
        )
        .unwrap_or(true),
    }
    .with_rules(rules)
}

/// Deserialize one top-level section, falling back to its default.
fn section<T: DeserializeOwned + Default>(value: Option<Value>, name: &str) -> T {
    match value.filter(|v| !v.is_null()) {
        None => T::default(),
        Some(value) => serde_yaml::from_value(value).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed '{}' section ({})", name, e);
            T::default()
        }),
    }
}

fn version(value: Option<&Value>) -> u32 {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return CURRENT_VERSION;
    };
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or_else(|| {
            tracing::warn!("Ignoring invalid version {:?}", value);
            CURRENT_VERSION
        })
}

fn scalar_bool(value: Option<&Value>, key: &str) -> Option<bool> {
    let value = value.filter(|v| !v.is_null())?;
    let parsed = value.as_bool();
    if parsed.is_none() {
        tracing::warn!("Ignoring non-boolean '{}' value {:?}", key, value);
    }
    parsed
}

/// Map one `ordering.members` entry; `None` drops it.
fn map_rule(entry: &Value) -> Option<OrderingRule> {
    match entry {
        Value::String(name) => match MemberKind::from_identifier(name) {
            Some(kind) => Some(OrderingRule::Simple(kind)),
            None => {
                tracing::warn!("Dropping unknown member kind '{}'", name);
                None
            }
        },
        Value::Mapping(map) if map.len() == 1 => {
            let (key, filters) = map.iter().next()?;
            match key.as_str() {
                Some("property") => Some(OrderingRule::Property {
                    annotated: bool_filter(filters, "annotated"),
                    visibility: visibility_filter(filters),
                }),
                Some("method") => Some(OrderingRule::Method {
                    kind: method_filter(filters),
                    visibility: visibility_filter(filters),
                }),
                _ => {
                    tracing::warn!("Dropping unknown ordering rule {:?}", key);
                    None
                }
            }
        }
        other => {
            tracing::warn!("Dropping unsupported ordering entry {:?}", other);
            None
        }
    }
}

fn filter<'a>(filters: &'a Value, key: &str) -> Option<&'a Value> {
    filters
        .as_mapping()
        .and_then(|m: &Mapping| m.get(key))
        .filter(|v| !v.is_null())
}

fn bool_filter(filters: &Value, key: &str) -> Option<bool> {
    scalar_bool(filter(filters, key), key)
}

fn visibility_filter(filters: &Value) -> Option<Visibility> {
    let value = filter(filters, "visibility")?;
    let parsed = value.as_str().and_then(Visibility::from_keyword);
    if parsed.is_none() {
        tracing::warn!("Ignoring invalid visibility filter {:?}", value);
    }
    parsed
}

fn method_filter(filters: &Value) -> Option<MethodClass> {
    let value = filter(filters, "kind")?;
    let parsed = value.as_str().and_then(MethodClass::from_identifier);
    if parsed.is_none() {
        tracing::warn!("Ignoring invalid method kind filter {:?}", value);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_full_document() {
        let config = parse_config(indoc! {"
            version: 1
            ordering:
              members:
                - type_alias
                - property:
                    annotated: true
                    visibility: public
                - method:
                    kind: static
                - instance_method
            extensions:
              strategy: merge
              respect_boundaries: false
        "})
        .unwrap();

        assert_eq!(
            config.ordering_rules,
            vec![
                OrderingRule::Simple(MemberKind::TypeAlias),
                OrderingRule::Property {
                    annotated: Some(true),
                    visibility: Some(Visibility::Public),
                },
                OrderingRule::Method {
                    kind: Some(MethodClass::Static),
                    visibility: None,
                },
                OrderingRule::Simple(MemberKind::InstanceMethod),
            ]
        );
        assert_eq!(config.extension_strategy, ExtensionStrategy::Merge);
        assert!(!config.respect_extension_boundaries);
    }

    #[test]
    fn test_unknown_entries_are_dropped() {
        let config = parse_config(indoc! {"
            ordering:
              members:
                - initializer
                - enum_case
                - closure:
                    kind: static
                - 42
                - deinitializer
        "})
        .unwrap();
        assert_eq!(
            config.ordering_rules,
            vec![
                OrderingRule::Simple(MemberKind::Initializer),
                OrderingRule::Simple(MemberKind::Deinitializer),
            ]
        );
    }

    #[test]
    fn test_invalid_filters_are_unset() {
        let config = parse_config(indoc! {"
            ordering:
              members:
                - property:
                    annotated: sometimes
                    visibility: secret
                - method:
                    kind: lazy
                - method:
        "})
        .unwrap();
        assert_eq!(
            config.ordering_rules,
            vec![
                OrderingRule::Property {
                    annotated: None,
                    visibility: None,
                },
                OrderingRule::Method {
                    kind: None,
                    visibility: None,
                },
                OrderingRule::Method {
                    kind: None,
                    visibility: None,
                },
            ]
        );
    }

    #[test]
    fn test_wrong_typed_scalars_keep_valid_rules() {
        let config = parse_config(indoc! {"
            version: \"1\"
            ordering:
              members:
                - deinitializer
                - initializer
            extensions:
              strategy: 7
              respect_boundaries: yes-please
        "})
        .unwrap();
        assert_eq!(
            config.ordering_rules,
            vec![
                OrderingRule::Simple(MemberKind::Deinitializer),
                OrderingRule::Simple(MemberKind::Initializer),
            ]
        );
        assert_eq!(config.version, CURRENT_VERSION);
        assert_eq!(config.extension_strategy, ExtensionStrategy::default());
        assert!(config.respect_extension_boundaries);
    }

    #[test]
    fn test_malformed_section_keeps_the_others() {
        let config = parse_config(indoc! {"
            ordering:
              members: initializer
            extensions:
              respect_boundaries: false
        "})
        .unwrap();
        assert_eq!(config.ordering_rules, OrderingRule::default_rules());
        assert!(!config.respect_extension_boundaries);

        let config = parse_config(indoc! {"
            ordering:
              members:
                - deinitializer
            extensions: merge
        "})
        .unwrap();
        assert_eq!(
            config.ordering_rules,
            vec![OrderingRule::Simple(MemberKind::Deinitializer)]
        );
        assert_eq!(config.extension_strategy, ExtensionStrategy::default());
    }

    #[test]
    fn test_empty_document_and_empty_rules_use_defaults() {
        assert_eq!(parse_config("").unwrap(), Configuration::default());
        let config = parse_config("ordering:\n  members: []\n").unwrap();
        assert_eq!(config.ordering_rules, OrderingRule::default_rules());
    }

    #[test]
    fn test_wrong_shape_uses_defaults() {
        let config = parse_config("- just\n- a list\n").unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_syntax_error_is_fatal() {
        let err = parse_config("ordering: [unclosed\n").unwrap_err();
        assert_eq!(err.category(), "Config");
    }
}
