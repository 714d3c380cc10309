//! Per-form extraction of member metadata from tree-sitter nodes.

use crate::core::{MemberDeclaration, MemberKind, TypeKind, Visibility};
use crate::syntax::{node_line, node_text};
use tree_sitter::Node;

/// Modifier information gathered from a declaration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Modifiers {
    pub keywords: Vec<String>,
    pub attribute_count: usize,
}

impl Modifiers {
    /// First access keyword found; `internal` when there is none.
    pub fn visibility(&self) -> Visibility {
        self.keywords
            .iter()
            .find_map(|k| Visibility::from_keyword(k))
            .unwrap_or_default()
    }

    pub fn is_type_level(&self) -> bool {
        self.keywords.iter().any(|k| k == "static" || k == "class")
    }

    pub fn is_annotated(&self) -> bool {
        self.attribute_count > 0
    }
}

/// Collect modifiers and attributes attached to a declaration node.
pub fn modifiers_of(node: &Node, source: &str) -> Modifiers {
    let mut modifiers = Modifiers::default();
    let mut cursor = node.walk();

    for child in node.children(&mut cursor) {
        match child.kind() {
            "modifiers" => {
                let mut inner = child.walk();
                for modifier in child.named_children(&mut inner) {
                    if modifier.kind() == "attribute" {
                        modifiers.attribute_count += 1;
                    } else {
                        collect_keywords(&modifier, source, &mut modifiers.keywords);
                    }
                }
            }
            "attribute" => modifiers.attribute_count += 1,
            "static" | "class" if !child.is_named() => {
                modifiers.keywords.push(child.kind().to_string());
            }
            _ => {}
        }
    }

    modifiers
}

fn collect_keywords(modifier: &Node, source: &str, keywords: &mut Vec<String>) {
    // A modifier node is either a keyword leaf or a wrapper around one
    // (`visibility_modifier` -> `private(set)`).
    keywords.push(node_text(modifier, source).trim().to_string());
}

/// Keyword that introduces a type-like declaration (`class`, `struct`,
/// `enum`, `actor`, `extension`, `protocol`).
pub fn declaration_keyword<'a>(node: &Node, source: &'a str) -> Option<&'a str> {
    if node.kind() == "protocol_declaration" {
        return Some("protocol");
    }
    if node.kind() != "class_declaration" {
        return None;
    }
    if let Some(kind) = node.child_by_field_name("declaration_kind") {
        return Some(node_text(&kind, source));
    }
    let mut cursor = node.walk();
    let keyword = node
        .children(&mut cursor)
        .filter(|c| !c.is_named())
        .map(|c| node_text(&c, source))
        .find(|t| matches!(*t, "class" | "struct" | "enum" | "actor" | "extension"));
    keyword
}

/// Type kind of a reorderable declaration; `None` for extensions and
/// non-type nodes.
pub fn type_kind_of(node: &Node, source: &str) -> Option<TypeKind> {
    declaration_keyword(node, source).and_then(TypeKind::from_keyword)
}

/// Declared name of a node with a `name` field, falling back to the first
/// identifier child.
pub fn declared_name(node: &Node, source: &str) -> Option<String> {
    if let Some(name) = node.child_by_field_name("name") {
        return Some(node_text(&name, source).trim().to_string());
    }
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|c| matches!(c.kind(), "simple_identifier" | "type_identifier"))
        .map(|c| node_text(&c, source).trim().to_string());
    found
}

/// Classify one body entry. Property declarations yield one declaration per
/// binding; unrecognised forms yield nothing.
pub fn classify_entry(node: &Node, source: &str) -> Vec<MemberDeclaration> {
    let line = node_line(node);
    let modifiers = modifiers_of(node, source);
    let member = |name: String, kind: MemberKind| {
        MemberDeclaration::new(name, kind, line)
            .with_visibility(modifiers.visibility())
            .annotated(modifiers.is_annotated())
    };

    match node.kind() {
        "property_declaration" | "protocol_property_declaration" => {
            let kind = if modifiers.is_type_level() {
                MemberKind::TypeProperty
            } else {
                MemberKind::InstanceProperty
            };
            binding_names(node, source)
                .into_iter()
                .map(|(name, binding_line)| {
                    let mut declaration = member(name, kind);
                    declaration.line = binding_line;
                    declaration
                })
                .collect()
        }
        "init_declaration" => vec![member("init".to_string(), MemberKind::Initializer)],
        "deinit_declaration" => vec![member("deinit".to_string(), MemberKind::Deinitializer)
            .with_visibility(Visibility::Internal)],
        "function_declaration" | "protocol_function_declaration" => {
            let kind = if modifiers.is_type_level() {
                MemberKind::TypeMethod
            } else {
                MemberKind::InstanceMethod
            };
            declared_name(node, source)
                .map(|name| vec![member(name, kind)])
                .unwrap_or_default()
        }
        "subscript_declaration" => vec![member("subscript".to_string(), MemberKind::Subscript)],
        "typealias_declaration" => declared_name(node, source)
            .map(|name| vec![member(name, MemberKind::TypeAlias)])
            .unwrap_or_default(),
        "associatedtype_declaration" => declared_name(node, source)
            .map(|name| {
                vec![member(name, MemberKind::AssociatedType).with_visibility(Visibility::Internal)]
            })
            .unwrap_or_default(),
        "class_declaration" | "protocol_declaration" => match type_kind_of(node, source) {
            Some(_) => declared_name(node, source)
                .map(|name| vec![member(name, MemberKind::NestedType)])
                .unwrap_or_default(),
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Names and lines of each binding in a property declaration.
fn binding_names(node: &Node, source: &str) -> Vec<(String, usize)> {
    let mut cursor = node.walk();
    let mut names: Vec<(String, usize)> = node
        .children_by_field_name("name", &mut cursor)
        .map(|n| (node_text(&n, source).trim().to_string(), node_line(&n)))
        .collect();

    if names.is_empty() {
        let mut cursor = node.walk();
        names = node
            .named_children(&mut cursor)
            .filter(|c| c.kind() == "pattern")
            .map(|n| (node_text(&n, source).trim().to_string(), node_line(&n)))
            .collect();
    }

    names.retain(|(name, _)| !name.is_empty());
    names
}
