use super::{Classified, MemberDeclaration};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one parse of one source text.
///
/// Handles from different parses never compare equal, even when the
/// underlying tree-sitter node ids happen to coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ParseId(u64);

impl ParseId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ParseId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A parsed Swift source file.
#[derive(Clone, Debug)]
pub struct SwiftAst {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: PathBuf,
    pub parse_id: ParseId,
}

/// Opaque reference to one entry of a type body in one parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MemberHandle {
    pub parse: ParseId,
    pub node_id: usize,
    pub start_byte: usize,
    pub end_byte: usize,
}

/// A classified member paired with the concrete node it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxMemberDeclaration {
    pub declaration: MemberDeclaration,
    pub handle: MemberHandle,
}

impl SyntaxMemberDeclaration {
    /// Identity comparison: same parse, same node, same binding.
    pub fn is_same_member(&self, other: &SyntaxMemberDeclaration) -> bool {
        self.handle == other.handle && self.declaration.name == other.declaration.name
    }
}

impl Classified for SyntaxMemberDeclaration {
    fn declaration(&self) -> &MemberDeclaration {
        &self.declaration
    }
}
