// Shared helpers for swiftorder integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use swiftorder::classifier::{classify_file, DeclarationBuilder};
use swiftorder::{parse_source, reorder_source, MemberDeclaration, OrderingRule};

pub const TEST_PATH: &str = "Test.swift";

/// Rewrite `source` with the default rules.
pub fn reorder(source: &str) -> String {
    reorder_with(source, &OrderingRule::default_rules())
}

pub fn reorder_with(source: &str, rules: &[OrderingRule]) -> String {
    reorder_source(source, Path::new(TEST_PATH), rules).expect("source should parse")
}

/// Classified members of the named type, in source order.
pub fn members_of(source: &str, type_name: &str) -> Vec<MemberDeclaration> {
    let ast = parse_source(source, Path::new(TEST_PATH)).expect("source should parse");
    classify_file(&ast, &DeclarationBuilder)
        .into_iter()
        .find(|t| t.declaration.name == type_name)
        .map(|t| t.members)
        .unwrap_or_default()
}

pub fn member_names(source: &str, type_name: &str) -> Vec<String> {
    members_of(source, type_name)
        .into_iter()
        .map(|m| m.name)
        .collect()
}

/// Write a Swift file below `dir`, creating parent directories.
pub fn write_swift(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, content).expect("write fixture");
    path
}
