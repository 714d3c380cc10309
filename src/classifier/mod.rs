//! Member classification for Swift type bodies.
//!
//! One traversal serves every output shape: callers pick a
//! [`MemberBuilder`] that turns the extracted [`MemberInfo`] into whatever
//! they need, plain [`MemberDeclaration`]s for reporting or
//! [`SyntaxMemberDeclaration`]s for rewriting.
//!
//! Only depth-0 entries of a body are classified. A nested type is recorded
//! as a single `NestedType` member; its own body is classified separately
//! when that type is visited as a container.
//!
//! Entries inside a `#if` block are left unclassified, so they keep their
//! slot and nothing moves across a directive.

pub mod extract;
pub mod types;

use crate::core::{
    MemberDeclaration, MemberHandle, SwiftAst, SyntaxMemberDeclaration, TypeDeclaration,
};
use crate::syntax::{MemberEntry, MemberList};

pub use extract::{classify_entry, type_kind_of};
pub use types::{discover_types, TypeNode};

/// Everything the classifier knows about one member.
#[derive(Debug, Clone)]
pub struct MemberInfo<'a> {
    pub declaration: &'a MemberDeclaration,
    pub handle: MemberHandle,
    /// Position of the entry in its body.
    pub entry_index: usize,
}

/// Strategy turning a classified member into an output value.
pub trait MemberBuilder {
    type Output;

    fn build(&self, info: &MemberInfo<'_>) -> Self::Output;
}

/// Builds plain declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationBuilder;

impl MemberBuilder for DeclarationBuilder {
    type Output = MemberDeclaration;

    fn build(&self, info: &MemberInfo<'_>) -> MemberDeclaration {
        info.declaration.clone()
    }
}

/// Builds declarations paired with their concrete node handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxDeclarationBuilder;

impl MemberBuilder for SyntaxDeclarationBuilder {
    type Output = SyntaxMemberDeclaration;

    fn build(&self, info: &MemberInfo<'_>) -> SyntaxMemberDeclaration {
        SyntaxMemberDeclaration {
            declaration: info.declaration.clone(),
            handle: info.handle,
        }
    }
}

/// Classify the members of one body in source order.
pub fn classify_members<B: MemberBuilder>(
    ast: &SwiftAst,
    list: &MemberList<'_>,
    builder: &B,
) -> Vec<B::Output> {
    let mut out = Vec::new();
    for (entry_index, entry) in list.entries.iter().enumerate() {
        if entry.conditional {
            continue;
        }
        visit_entry(ast, entry, entry_index, builder, &mut out);
    }
    out
}

fn visit_entry<B: MemberBuilder>(
    ast: &SwiftAst,
    entry: &MemberEntry<'_>,
    entry_index: usize,
    builder: &B,
    out: &mut Vec<B::Output>,
) {
    let handle = entry.handle(ast.parse_id);
    for declaration in classify_entry(&entry.node, &ast.source) {
        let info = MemberInfo {
            declaration: &declaration,
            handle,
            entry_index,
        };
        out.push(builder.build(&info));
    }
}

/// Indices of the body entries the classifier recognises.
pub fn classified_entry_indices(ast: &SwiftAst, list: &MemberList<'_>) -> Vec<usize> {
    list.entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            !entry.conditional && !classify_entry(&entry.node, &ast.source).is_empty()
        })
        .map(|(i, _)| i)
        .collect()
}

/// A type declaration with its classified members.
#[derive(Debug, Clone)]
pub struct ClassifiedType<M> {
    pub declaration: TypeDeclaration,
    pub members: Vec<M>,
}

/// Classify every type declaration in a file.
pub fn classify_file<B: MemberBuilder>(
    ast: &SwiftAst,
    builder: &B,
) -> Vec<ClassifiedType<B::Output>> {
    discover_types(ast)
        .into_iter()
        .map(|type_node| {
            let members = type_node
                .member_list(&ast.source)
                .map(|list| classify_members(ast, &list, builder))
                .unwrap_or_default();
            ClassifiedType {
                declaration: type_node.declaration,
                members,
            }
        })
        .collect()
}
