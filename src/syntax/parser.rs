//! Tree-sitter parser integration for Swift
//!
//! Provides parsing using the tree-sitter Swift grammar.

use crate::core::{ParseId, SwiftAst};
use crate::errors::{ReorderError, Result};
use std::path::Path;
use tree_sitter::{Language as TsLanguage, Node, Parser, Tree};

fn get_language() -> TsLanguage {
    tree_sitter_swift::LANGUAGE.into()
}

/// Parse Swift source code into a tree-sitter AST.
///
/// A tree that contains error or missing nodes is rejected: rewriting
/// around a misparsed region could move text that is not a member.
pub fn parse_source(content: &str, path: &Path) -> Result<SwiftAst> {
    let mut parser = Parser::new();
    let language = get_language();

    parser.set_language(&language).map_err(|e| {
        ReorderError::parse(format!("Failed to set tree-sitter language: {}", e)).with_path(path)
    })?;

    let tree = parser.parse(content, None).ok_or_else(|| {
        ReorderError::parse("Failed to parse source code").with_path(path)
    })?;

    if has_parse_errors(&tree) {
        let line = first_error_line(&tree.root_node()).unwrap_or(1);
        return Err(ReorderError::parse_with_context(
            "Source contains syntax the Swift grammar could not parse",
            path,
            line,
        ));
    }

    Ok(SwiftAst {
        tree,
        source: content.to_string(),
        path: path.to_path_buf(),
        parse_id: ParseId::next(),
    })
}

/// Check if a parse tree has errors
pub fn has_parse_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

fn first_error_line(node: &Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node_line(node));
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.iter().find_map(first_error_line)
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    let start = node.start_byte();
    let end = node.end_byte();
    &source[start..end]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}
