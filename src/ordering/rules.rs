//! Ordering rules and their match predicate.

use crate::core::{MemberDeclaration, MemberKind, Visibility};
use serde::Serialize;
use std::fmt;

/// Method filter of a [`OrderingRule::Method`] rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodClass {
    Static,
    Instance,
}

impl MethodClass {
    pub fn from_identifier(ident: &str) -> Option<Self> {
        match ident.trim().to_ascii_lowercase().as_str() {
            "static" | "type" | "class" => Some(MethodClass::Static),
            "instance" => Some(MethodClass::Instance),
            _ => None,
        }
    }

    fn of(kind: MemberKind) -> Option<Self> {
        match kind {
            MemberKind::TypeMethod => Some(MethodClass::Static),
            MemberKind::InstanceMethod => Some(MethodClass::Instance),
            _ => None,
        }
    }
}

/// One entry of the ordering policy. Rules are evaluated in list order and
/// the first match wins.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingRule {
    Simple(MemberKind),
    Property {
        annotated: Option<bool>,
        visibility: Option<Visibility>,
    },
    Method {
        kind: Option<MethodClass>,
        visibility: Option<Visibility>,
    },
}

impl OrderingRule {
    pub fn matches(&self, member: &MemberDeclaration) -> bool {
        match self {
            OrderingRule::Simple(kind) => member.kind == *kind,
            OrderingRule::Property {
                annotated,
                visibility,
            } => {
                member.kind.is_property()
                    && annotated.is_none_or(|a| member.is_annotated == a)
                    && visibility.is_none_or(|v| member.visibility == v)
            }
            OrderingRule::Method { kind, visibility } => {
                let Some(class) = MethodClass::of(member.kind) else {
                    return false;
                };
                kind.is_none_or(|k| class == k)
                    && visibility.is_none_or(|v| member.visibility == v)
            }
        }
    }

    /// One `Simple` rule per member kind, in enumeration order.
    pub fn default_rules() -> Vec<OrderingRule> {
        MemberKind::ALL
            .iter()
            .copied()
            .map(OrderingRule::Simple)
            .collect()
    }
}

impl fmt::Display for OrderingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingRule::Simple(kind) => write!(f, "{}", kind.identifier()),
            OrderingRule::Property {
                annotated,
                visibility,
            } => {
                write!(f, "property")?;
                write_filters(
                    f,
                    &[
                        annotated.map(|a| format!("annotated: {}", a)),
                        visibility.map(|v| format!("visibility: {}", v)),
                    ],
                )
            }
            OrderingRule::Method { kind, visibility } => {
                write!(f, "method")?;
                write_filters(
                    f,
                    &[
                        kind.map(|k| match k {
                            MethodClass::Static => "kind: static".to_string(),
                            MethodClass::Instance => "kind: instance".to_string(),
                        }),
                        visibility.map(|v| format!("visibility: {}", v)),
                    ],
                )
            }
        }
    }
}

fn write_filters(f: &mut fmt::Formatter<'_>, filters: &[Option<String>]) -> fmt::Result {
    let set: Vec<&str> = filters.iter().flatten().map(String::as_str).collect();
    if set.is_empty() {
        Ok(())
    } else {
        write!(f, "({})", set.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(kind: MemberKind) -> MemberDeclaration {
        MemberDeclaration::new("m", kind, 1)
    }

    #[test]
    fn test_simple_rule_matches_kind_only() {
        let rule = OrderingRule::Simple(MemberKind::Initializer);
        assert!(rule.matches(&member(MemberKind::Initializer)));
        assert!(!rule.matches(&member(MemberKind::Deinitializer)));
    }

    #[test]
    fn test_property_rule_without_filters_matches_both_property_kinds() {
        let rule = OrderingRule::Property {
            annotated: None,
            visibility: None,
        };
        assert!(rule.matches(&member(MemberKind::TypeProperty)));
        assert!(rule.matches(&member(MemberKind::InstanceProperty)));
        assert!(!rule.matches(&member(MemberKind::InstanceMethod)));
    }

    #[test]
    fn test_property_rule_filters() {
        let rule = OrderingRule::Property {
            annotated: Some(true),
            visibility: Some(Visibility::Public),
        };
        let annotated_public = member(MemberKind::InstanceProperty)
            .annotated(true)
            .with_visibility(Visibility::Public);
        let plain_public = member(MemberKind::InstanceProperty).with_visibility(Visibility::Public);
        let annotated_private = member(MemberKind::InstanceProperty)
            .annotated(true)
            .with_visibility(Visibility::Private);

        assert!(rule.matches(&annotated_public));
        assert!(!rule.matches(&plain_public));
        assert!(!rule.matches(&annotated_private));
    }

    #[test]
    fn test_method_rule_kind_filter() {
        let statics = OrderingRule::Method {
            kind: Some(MethodClass::Static),
            visibility: None,
        };
        let instances = OrderingRule::Method {
            kind: Some(MethodClass::Instance),
            visibility: None,
        };
        assert!(statics.matches(&member(MemberKind::TypeMethod)));
        assert!(!statics.matches(&member(MemberKind::InstanceMethod)));
        assert!(instances.matches(&member(MemberKind::InstanceMethod)));
        assert!(!instances.matches(&member(MemberKind::TypeProperty)));
    }

    #[test]
    fn test_method_rule_visibility_filter() {
        let rule = OrderingRule::Method {
            kind: None,
            visibility: Some(Visibility::Private),
        };
        assert!(rule.matches(&member(MemberKind::TypeMethod).with_visibility(Visibility::Private)));
        assert!(!rule.matches(&member(MemberKind::InstanceMethod)));
    }

    #[test]
    fn test_default_rules_cover_every_kind_in_order() {
        let rules = OrderingRule::default_rules();
        assert_eq!(rules.len(), MemberKind::ALL.len());
        assert_eq!(rules[0], OrderingRule::Simple(MemberKind::TypeAlias));
        assert_eq!(rules[9], OrderingRule::Simple(MemberKind::Deinitializer));
    }

    #[test]
    fn test_display() {
        let rule = OrderingRule::Method {
            kind: Some(MethodClass::Static),
            visibility: Some(Visibility::Public),
        };
        assert_eq!(rule.to_string(), "method(kind: static, visibility: public)");
        assert_eq!(
            OrderingRule::Property {
                annotated: None,
                visibility: None
            }
            .to_string(),
            "property"
        );
    }
}
