//! Applies rewrite plans to the concrete source.
//!
//! Only the text between the braces of a planned body changes. Everything
//! else, including the text of unplanned bodies, is emitted byte-for-byte.
//! Nested bodies are rendered with their own plans while the enclosing
//! entry is being emitted, so one pass handles every depth.

use std::collections::HashMap;
use std::ops::Range;

use super::plan::TypeRewritePlan;
use crate::classifier::{classified_entry_indices, discover_types, TypeNode};
use crate::core::{MemberHandle, SwiftAst};
use crate::syntax::MemberList;

/// How a plan was matched to a type node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Every classified entry carries the same handle as the plan.
    Identity,
    /// Only the number of classified entries agrees. Two same-named types
    /// declared on one line with equal member counts can be confused.
    Count,
}

/// A piece of a reordered body.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Source(Range<usize>),
    /// Ends a `//` comment that would otherwise swallow the text after it.
    LineBreak(&'static str),
}

/// A body whose entries are emitted in a new order.
#[derive(Debug, Clone)]
struct BodyRewrite {
    open_end: usize,
    close_start: usize,
    /// Output order of the body text.
    segments: Vec<Segment>,
}

/// Rewrites every type body that has a plan needing changes.
#[derive(Debug)]
pub struct StructuralRewriter<'p> {
    plans: HashMap<(String, usize), Vec<&'p TypeRewritePlan>>,
}

impl<'p> StructuralRewriter<'p> {
    pub fn new(plans: &'p [TypeRewritePlan]) -> Self {
        let mut by_location: HashMap<(String, usize), Vec<&'p TypeRewritePlan>> = HashMap::new();
        for plan in plans {
            by_location
                .entry((plan.type_name.clone(), plan.declaration_line))
                .or_default()
                .push(plan);
        }
        Self {
            plans: by_location,
        }
    }

    /// Render the file with every planned body reordered.
    pub fn rewrite(&self, ast: &SwiftAst) -> String {
        let mut rewrites: Vec<BodyRewrite> = discover_types(ast)
            .iter()
            .filter_map(|type_node| self.rewrite_body(ast, type_node))
            .collect();
        rewrites.sort_by_key(|r| r.open_end);

        let mut out = String::with_capacity(ast.source.len());
        render_span(&ast.source, 0..ast.source.len(), &rewrites, &mut out);
        out
    }

    /// Find the plan for a type node.
    pub fn match_plan(
        &self,
        ast: &SwiftAst,
        type_node: &TypeNode<'_>,
        list: &MemberList<'_>,
    ) -> Option<(&'p TypeRewritePlan, MatchTier)> {
        let key = (type_node.declaration.name.clone(), type_node.declaration.line);
        let candidates = self.plans.get(&key)?;
        let handles: Vec<MemberHandle> = classified_entry_indices(ast, list)
            .into_iter()
            .map(|i| list.entries[i].handle(ast.parse_id))
            .collect();

        if let Some(plan) = candidates
            .iter()
            .copied()
            .find(|plan| plan.original_handles() == handles)
        {
            return Some((plan, MatchTier::Identity));
        }

        let plan = candidates
            .iter()
            .copied()
            .find(|plan| plan.original_handles().len() == handles.len())?;
        tracing::warn!(
            "Matched plan for {} '{}' at line {} by member count only",
            type_node.declaration.kind,
            type_node.declaration.name,
            type_node.declaration.line
        );
        Some((plan, MatchTier::Count))
    }

    fn rewrite_body(&self, ast: &SwiftAst, type_node: &TypeNode<'_>) -> Option<BodyRewrite> {
        let list = type_node.member_list(&ast.source)?;
        let (plan, _) = self.match_plan(ast, type_node, &list)?;
        if !plan.needs_rewriting() {
            return None;
        }

        let order = entry_order(ast, &list, plan)?;
        tracing::debug!(
            "Reordering {} '{}' at line {}",
            plan.type_kind,
            plan.type_name,
            plan.declaration_line
        );
        Some(BodyRewrite {
            open_end: list.open_end,
            close_start: list.close_start,
            segments: segments(&ast.source, &list, &order),
        })
    }
}

/// New entry order for a body: classified entries permuted among their own
/// slots, unclassified entries left where they are.
fn entry_order(ast: &SwiftAst, list: &MemberList<'_>, plan: &TypeRewritePlan) -> Option<Vec<usize>> {
    let classified = classified_entry_indices(ast, list);
    let original = plan.original_handles();

    let mut permuted = Vec::with_capacity(classified.len());
    for handle in plan.reordered_handles() {
        let position = original.iter().position(|h| *h == handle)?;
        permuted.push(*classified.get(position)?);
    }
    if permuted.len() != classified.len() {
        tracing::warn!(
            "Plan for '{}' covers {} of {} entries; leaving the body unchanged",
            plan.type_name,
            permuted.len(),
            classified.len()
        );
        return None;
    }

    let mut next = permuted.into_iter();
    let mut order = Vec::with_capacity(list.len());
    for slot in 0..list.len() {
        if classified.contains(&slot) {
            order.push(next.next()?);
        } else {
            order.push(slot);
        }
    }
    Some(order)
}

/// Output segments of a reordered body.
///
/// Attached comments travel with their entry. Spacing mostly does too,
/// except around the first slot: the entry placed there takes the original
/// first spacing, and the entry that used to be first takes the original
/// second spacing.
///
/// An entry ending in a `//` comment is followed by a line break unless the
/// text placed after it already starts a new line.
fn segments(source: &str, list: &MemberList<'_>, order: &[usize]) -> Vec<Segment> {
    let entries = &list.entries;
    let mut ranges = Vec::with_capacity(order.len() * 3 + 1);
    let mut comment_ends = Vec::new();

    for (slot, &index) in order.iter().enumerate() {
        let entry = &entries[index];
        let spacing = match (slot, index) {
            (0, _) => entries[0].spacing(),
            (_, 0) => entries[1].spacing(),
            _ => entry.spacing(),
        };
        ranges.push(spacing);
        ranges.push(entry.attached());
        ranges.push(entry.span());
        if entry.ends_in_line_comment {
            comment_ends.push(ranges.len() - 1);
        }
    }
    ranges.push(list.tail());

    let line_ending = if source.contains("\r\n") { "\r\n" } else { "\n" };
    let mut segments = Vec::with_capacity(ranges.len() + comment_ends.len());
    for (i, range) in ranges.iter().enumerate() {
        segments.push(Segment::Source(range.clone()));
        if comment_ends.contains(&i) && !starts_new_line(source, &ranges[i + 1..]) {
            segments.push(Segment::LineBreak(line_ending));
        }
    }
    segments
}

/// Whether the text of `ranges` begins with a line break, ignoring spaces
/// and tabs. Running out of text counts as no: the closing brace follows.
fn starts_new_line(source: &str, ranges: &[Range<usize>]) -> bool {
    ranges
        .iter()
        .flat_map(|range| source[range.clone()].chars())
        .find(|c| !matches!(c, ' ' | '\t'))
        .is_some_and(|c| matches!(c, '\n' | '\r'))
}

/// Emit `span` of the source, substituting reordered bodies.
fn render_span(source: &str, span: Range<usize>, rewrites: &[BodyRewrite], out: &mut String) {
    let mut position = span.start;
    let first = rewrites.partition_point(|r| r.open_end < span.start);

    for rewrite in &rewrites[first..] {
        if rewrite.open_end > span.end {
            break;
        }
        // Bodies nested in one already emitted were rendered through its segments.
        if rewrite.open_end < position || rewrite.close_start > span.end {
            continue;
        }
        out.push_str(&source[position..rewrite.open_end]);
        for segment in &rewrite.segments {
            match segment {
                Segment::Source(range) => render_span(source, range.clone(), rewrites, out),
                Segment::LineBreak(line_ending) => out.push_str(line_ending),
            }
        }
        position = rewrite.close_start;
    }

    out.push_str(&source[position..span.end]);
}
