//! Per-type rewrite plans.
//!
//! A plan pairs the members of one type in source order with the order the
//! rules ask for. Every target member is correlated back to its original
//! position, so the rewriter only ever permutes existing source text.

use serde::Serialize;

use crate::classifier::{classify_file, SyntaxDeclarationBuilder};
use crate::core::{
    MemberDeclaration, MemberHandle, SwiftAst, SyntaxMemberDeclaration, TypeDeclaration, TypeKind,
};
use crate::ordering::{reorder, OrderingRule};

/// Reordering plan for one type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRewritePlan {
    pub type_name: String,
    pub type_kind: TypeKind,
    pub declaration_line: usize,
    pub original_members: Vec<SyntaxMemberDeclaration>,
    /// Target order, each member paired with its index in `original_members`.
    pub reordered_members: Vec<(SyntaxMemberDeclaration, usize)>,
}

/// Serializable summary of a plan for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub type_name: String,
    pub type_kind: TypeKind,
    pub line: usize,
    pub original: Vec<String>,
    pub reordered: Vec<String>,
}

impl TypeRewritePlan {
    /// True when the target order differs from source order.
    ///
    /// Compares member identity, not just kinds: two members of the same
    /// kind split by a visibility or annotation rule still count.
    pub fn needs_rewriting(&self) -> bool {
        self.reordered_members
            .iter()
            .enumerate()
            .any(|(position, (_, original))| position != *original)
    }

    /// True when the sequence of member kinds changes.
    pub fn kind_sequence_changed(&self) -> bool {
        let before = self.original_members.iter().map(|m| m.declaration.kind);
        let after = self.reordered_members.iter().map(|(m, _)| m.declaration.kind);
        !before.eq(after)
    }

    /// Entry handles in source order, one per entry.
    pub fn original_handles(&self) -> Vec<MemberHandle> {
        distinct_handles(self.original_members.iter())
    }

    /// Entry handles in target order, one per entry.
    pub fn reordered_handles(&self) -> Vec<MemberHandle> {
        distinct_handles(self.reordered_members.iter().map(|(m, _)| m))
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            type_name: self.type_name.clone(),
            type_kind: self.type_kind,
            line: self.declaration_line,
            original: self
                .original_members
                .iter()
                .map(|m| m.declaration.name.clone())
                .collect(),
            reordered: self
                .reordered_members
                .iter()
                .map(|(m, _)| m.declaration.name.clone())
                .collect(),
        }
    }
}

fn distinct_handles<'a>(
    members: impl Iterator<Item = &'a SyntaxMemberDeclaration>,
) -> Vec<MemberHandle> {
    let mut handles: Vec<MemberHandle> = Vec::new();
    for member in members {
        if !handles.contains(&member.handle) {
            handles.push(member.handle);
        }
    }
    handles
}

/// Plan one type: run the rules, then correlate the target order back to
/// the original members.
pub fn plan_type(
    rules: &[OrderingRule],
    declaration: &TypeDeclaration,
    members: Vec<SyntaxMemberDeclaration>,
) -> TypeRewritePlan {
    let target = reorder(rules, members.clone());
    let mut correlator = Correlator::new(&members);
    let mut reordered = Vec::with_capacity(target.len());

    for item in target {
        match correlator
            .take_identical(&item)
            .or_else(|| correlator.take_by_location(&item.declaration))
        {
            Some(index) => reordered.push((item, index)),
            None => drop_unmatched(declaration, &item.declaration),
        }
    }

    let unclaimed = correlator.unconsumed();
    finish(declaration, members, reordered, unclaimed)
}

/// Plan one type from an externally computed target order.
///
/// Target items carry no handles, so they are correlated by line, name
/// and kind only.
pub fn plan_from_target(
    declaration: &TypeDeclaration,
    members: Vec<SyntaxMemberDeclaration>,
    target: &[MemberDeclaration],
) -> TypeRewritePlan {
    let mut correlator = Correlator::new(&members);
    let mut reordered = Vec::with_capacity(target.len());

    for item in target {
        match correlator.take_by_location(item) {
            Some(index) => reordered.push((members[index].clone(), index)),
            None => drop_unmatched(declaration, item),
        }
    }

    let unclaimed = correlator.unconsumed();
    finish(declaration, members, reordered, unclaimed)
}

/// Plan every type declared in a file.
pub fn plan_file(ast: &SwiftAst, rules: &[OrderingRule]) -> Vec<TypeRewritePlan> {
    classify_file(ast, &SyntaxDeclarationBuilder)
        .into_iter()
        .map(|classified| plan_type(rules, &classified.declaration, classified.members))
        .collect()
}

fn drop_unmatched(declaration: &TypeDeclaration, member: &MemberDeclaration) {
    tracing::warn!(
        "Dropping '{}' ({}) from the plan for {} '{}': no original member at line {}",
        member.name,
        member.kind,
        declaration.kind,
        declaration.name,
        member.line
    );
}

fn finish(
    declaration: &TypeDeclaration,
    members: Vec<SyntaxMemberDeclaration>,
    mut reordered: Vec<(SyntaxMemberDeclaration, usize)>,
    unclaimed: Vec<usize>,
) -> TypeRewritePlan {
    // Unclaimed originals keep their relative order at the end so the plan
    // stays a permutation and no source text is lost.
    for index in unclaimed {
        reordered.push((members[index].clone(), index));
    }

    TypeRewritePlan {
        type_name: declaration.name.clone(),
        type_kind: declaration.kind,
        declaration_line: declaration.line,
        original_members: members,
        reordered_members: reordered,
    }
}

/// Tracks which original members have been claimed by a target item.
/// Among several candidates the first unconsumed one wins.
struct Correlator<'a> {
    members: &'a [SyntaxMemberDeclaration],
    consumed: Vec<bool>,
}

impl<'a> Correlator<'a> {
    fn new(members: &'a [SyntaxMemberDeclaration]) -> Self {
        Self {
            members,
            consumed: vec![false; members.len()],
        }
    }

    fn take_identical(&mut self, item: &SyntaxMemberDeclaration) -> Option<usize> {
        self.take_first(|member| member.is_same_member(item))
    }

    fn take_by_location(&mut self, item: &MemberDeclaration) -> Option<usize> {
        self.take_first(|member| same_location(&member.declaration, item))
    }

    fn take_first(&mut self, predicate: impl Fn(&SyntaxMemberDeclaration) -> bool) -> Option<usize> {
        let index = self
            .members
            .iter()
            .enumerate()
            .position(|(i, member)| !self.consumed[i] && predicate(member))?;
        self.consumed[index] = true;
        Some(index)
    }

    fn unconsumed(&self) -> Vec<usize> {
        self.consumed
            .iter()
            .enumerate()
            .filter(|(_, consumed)| !**consumed)
            .map(|(i, _)| i)
            .collect()
    }
}

fn same_location(a: &MemberDeclaration, b: &MemberDeclaration) -> bool {
    a.line == b.line && a.name == b.name && a.kind == b.kind
}
