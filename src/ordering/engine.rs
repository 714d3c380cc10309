//! Stable bucket sort of classified members.
//!
//! Each member lands in the bucket of the first rule it matches; members no
//! rule matches share one trailing bucket. Sorting is stable, so members of
//! one bucket keep their declaration order.

use super::rules::OrderingRule;
use crate::core::{Classified, MemberDeclaration};

/// Index of the first matching rule, or `rules.len()` when none match.
pub fn bucket_of(rules: &[OrderingRule], member: &MemberDeclaration) -> usize {
    rules
        .iter()
        .position(|rule| rule.matches(member))
        .unwrap_or(rules.len())
}

/// Reorder members by rule bucket. The output is a permutation of the input.
pub fn reorder<T: Classified>(rules: &[OrderingRule], members: Vec<T>) -> Vec<T> {
    let mut keyed: Vec<(usize, T)> = members
        .into_iter()
        .map(|member| (bucket_of(rules, member.declaration()), member))
        .collect();
    // `sort_by_key` is stable.
    keyed.sort_by_key(|(bucket, _)| *bucket);
    keyed.into_iter().map(|(_, member)| member).collect()
}

/// Convenience wrapper for plain declarations.
pub fn reorder_declarations(
    rules: &[OrderingRule],
    members: &[MemberDeclaration],
) -> Vec<MemberDeclaration> {
    reorder(rules, members.to_vec())
}
