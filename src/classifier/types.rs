//! Discovery of reorderable type declarations.
//!
//! The walk is depth-first over the whole tree. Nesting depth is threaded
//! through the recursion as a parameter, so the walk holds no mutable state
//! besides its output.

use super::extract::{declared_name, type_kind_of};
use crate::core::{SwiftAst, TypeDeclaration};
use crate::syntax::member_list::body_of;
use crate::syntax::{node_line, MemberList};
use tree_sitter::Node;

/// A type declaration node together with its summary.
#[derive(Debug, Clone)]
pub struct TypeNode<'tree> {
    pub node: Node<'tree>,
    pub declaration: TypeDeclaration,
}

impl<'tree> TypeNode<'tree> {
    pub fn member_list(&self, source: &str) -> Option<MemberList<'tree>> {
        body_of(&self.node).and_then(|body| MemberList::from_body(body, source))
    }
}

/// Every class, struct, enum, actor and protocol declaration in the file,
/// outer declarations before the ones they contain.
///
/// Extensions are walked through but not reported: their bodies keep the
/// order the author chose.
pub fn discover_types(ast: &SwiftAst) -> Vec<TypeNode<'_>> {
    let mut found = Vec::new();
    visit(ast.tree.root_node(), &ast.source, 0, &mut found);
    found
}

fn visit<'tree>(node: Node<'tree>, source: &str, depth: usize, found: &mut Vec<TypeNode<'tree>>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match type_node(child, source, depth) {
            Some(type_node) => {
                found.push(type_node);
                visit(child, source, depth + 1, found);
            }
            None => visit(child, source, depth, found),
        }
    }
}

fn type_node<'tree>(node: Node<'tree>, source: &str, depth: usize) -> Option<TypeNode<'tree>> {
    let kind = type_kind_of(&node, source)?;
    let name = declared_name(&node, source)?;
    Some(TypeNode {
        node,
        declaration: TypeDeclaration {
            name,
            kind,
            line: node_line(&node),
            depth,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TypeKind;
    use crate::syntax::parse_source;
    use std::path::Path;

    #[test]
    fn test_discovers_all_type_kinds() {
        let source = r#"
class A {}
struct B {}
enum C { case x }
actor D {}
protocol E {}
"#;
        let ast = parse_source(source, Path::new("Types.swift")).unwrap();
        let kinds: Vec<TypeKind> = discover_types(&ast)
            .iter()
            .map(|t| t.declaration.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TypeKind::Class,
                TypeKind::Struct,
                TypeKind::Enum,
                TypeKind::Actor,
                TypeKind::Protocol
            ]
        );
    }

    #[test]
    fn test_nested_depths_and_lines() {
        let source = "struct Outer {\n    enum Middle {\n        class Inner {}\n    }\n}\n";
        let ast = parse_source(source, Path::new("Nested.swift")).unwrap();
        let types = discover_types(&ast);
        let summary: Vec<(&str, usize, usize)> = types
            .iter()
            .map(|t| {
                (
                    t.declaration.name.as_str(),
                    t.declaration.depth,
                    t.declaration.line,
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![("Outer", 0, 1), ("Middle", 1, 2), ("Inner", 2, 3)]
        );
    }

    #[test]
    fn test_extensions_are_walked_but_not_reported() {
        let source = "extension Foo {\n    struct Helper {}\n    func f() {}\n}\n";
        let ast = parse_source(source, Path::new("Ext.swift")).unwrap();
        let types = discover_types(&ast);
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].declaration.name, "Helper");
        assert_eq!(types[0].declaration.depth, 0);
    }
}
