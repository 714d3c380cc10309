//! A type body viewed as an ordered list of member entries.
//!
//! Every named, non-comment child of a body between its braces is an entry.
//! The bytes between two entries are the *leading trivia* of the second one:
//! blank lines, indentation, stray semicolons and comments. Trivia is split
//! in two parts:
//!
//! - *spacing*: everything before the first leading comment
//! - *attached*: from the first leading comment up to the entry itself
//!
//! A comment that starts on the line where an entry ends is trailing trivia
//! of that entry and is folded into its span.
//!
//! Compiler directives (`#if`, `#else`, `#endif`) are entries of their own.
//! Entries between an `#if` and its `#endif` are marked `conditional`.

use crate::core::{MemberHandle, ParseId};
use std::ops::Range;
use tree_sitter::Node;

/// One member entry of a type body.
#[derive(Clone, Copy, Debug)]
pub struct MemberEntry<'tree> {
    pub node: Node<'tree>,
    /// Start of the entry's leading trivia.
    pub trivia_start: usize,
    /// Start of the first leading comment, if any.
    pub comment_start: Option<usize>,
    pub start_byte: usize,
    /// End of the entry including same-line trailing comments.
    pub end_byte: usize,
    /// Inside a `#if` block of this body.
    pub conditional: bool,
    /// The span ends in a `//` comment, so the next text must start a line.
    pub ends_in_line_comment: bool,
}

impl<'tree> MemberEntry<'tree> {
    pub fn handle(&self, parse: ParseId) -> MemberHandle {
        MemberHandle {
            parse,
            node_id: self.node.id(),
            start_byte: self.start_byte,
            end_byte: self.end_byte,
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.start_byte..self.end_byte
    }

    pub fn spacing(&self) -> Range<usize> {
        self.trivia_start..self.comment_start.unwrap_or(self.start_byte)
    }

    pub fn attached(&self) -> Range<usize> {
        self.comment_start.unwrap_or(self.start_byte)..self.start_byte
    }
}

/// The entries of one type body, in source order.
#[derive(Clone, Debug)]
pub struct MemberList<'tree> {
    /// Byte offset just past the opening brace.
    pub open_end: usize,
    /// Byte offset of the closing brace.
    pub close_start: usize,
    pub entries: Vec<MemberEntry<'tree>>,
}

impl<'tree> MemberList<'tree> {
    /// Build the entry list of a body node (`class_body`, `enum_class_body`
    /// or `protocol_body`). Returns `None` when the braces are missing.
    pub fn from_body(body: Node<'tree>, source: &str) -> Option<Self> {
        let mut cursor = body.walk();
        let children: Vec<Node<'tree>> = body.children(&mut cursor).collect();

        let open_end = children.iter().find(|c| c.kind() == "{")?.end_byte();
        let close_start = children.iter().rev().find(|c| c.kind() == "}")?.start_byte();
        if close_start < open_end {
            return None;
        }

        let nodes: Vec<Node<'tree>> = children
            .into_iter()
            .filter(|c| c.is_named() && !is_comment(c))
            .filter(|c| c.start_byte() >= open_end && c.end_byte() <= close_start)
            .collect();

        let mut entries = Vec::with_capacity(nodes.len());
        // Comments on the brace line belong to the block, not the first entry.
        let mut previous_end = open_end;
        let first_start = nodes.first().map_or(close_start, |n| n.start_byte());
        let (mut search_from, _) = extend_same_line(source, open_end, first_start);
        let mut open_conditionals = 0usize;

        for (i, node) in nodes.iter().enumerate() {
            let start_byte = node.start_byte();
            let directive = directive_keyword(node, source);
            if directive == Some("#endif") {
                open_conditionals = open_conditionals.saturating_sub(1);
            }
            let limit = nodes.get(i + 1).map_or(close_start, |n| n.start_byte());
            let (end_byte, ends_in_line_comment) =
                extend_same_line(source, node.end_byte(), limit);

            entries.push(MemberEntry {
                node: *node,
                trivia_start: previous_end,
                comment_start: source[search_from..start_byte]
                    .find('/')
                    .map(|offset| search_from + offset),
                start_byte,
                end_byte,
                conditional: open_conditionals > 0,
                ends_in_line_comment,
            });

            if directive == Some("#if") {
                open_conditionals += 1;
            }
            previous_end = end_byte;
            search_from = end_byte;
        }

        Some(Self {
            open_end,
            close_start,
            entries,
        })
    }

    /// Text between the last entry and the closing brace.
    pub fn tail(&self) -> Range<usize> {
        let start = self.entries.last().map(|e| e.end_byte).unwrap_or(self.open_end);
        start..self.close_start
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extend `from` over comments that start on the same line, never past
/// `limit`. Only whitespace, semicolons and comments can occur in between.
/// The flag is set when the extension stops at the end of a `//` comment.
fn extend_same_line(source: &str, from: usize, limit: usize) -> (usize, bool) {
    let mut end = from;
    loop {
        let rest = &source[end..limit];
        let skipped = rest.len() - rest.trim_start_matches([' ', '\t', ';']).len();
        let after = &rest[skipped..];
        if after.starts_with("//") {
            let line_len = after.find(['\r', '\n']).unwrap_or(after.len());
            return (end + skipped + line_len, true);
        }
        if after.starts_with("/*") {
            match after.find("*/") {
                Some(close) => end += skipped + close + 2,
                None => return (end, false),
            }
            continue;
        }
        return (end, false);
    }
}

/// Leading keyword of a compiler directive entry, e.g. `#if` or `#endif`.
fn directive_keyword<'a>(node: &Node, source: &'a str) -> Option<&'a str> {
    if node.kind() != "directive" {
        return None;
    }
    let text = source[node.start_byte()..node.end_byte()].trim_start();
    let end = text
        .char_indices()
        .skip(1)
        .find(|(_, c)| !c.is_alphanumeric())
        .map_or(text.len(), |(i, _)| i);
    Some(&text[..end])
}

pub fn is_comment(node: &Node) -> bool {
    matches!(node.kind(), "comment" | "multiline_comment")
}

/// Locate the body node of a type declaration.
pub fn body_of<'tree>(declaration: &Node<'tree>) -> Option<Node<'tree>> {
    declaration.child_by_field_name("body").or_else(|| {
        let mut cursor = declaration.walk();
        let found = declaration
            .named_children(&mut cursor)
            .find(|c| matches!(c.kind(), "class_body" | "enum_class_body" | "protocol_body"));
        found
    })
}
