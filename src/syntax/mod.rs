//! Tree-sitter integration for Swift sources.
//!
//! `parser` turns source text into a [`SwiftAst`](crate::core::SwiftAst);
//! `member_list` views a type body as an ordered list of member entries with
//! their leading trivia, which both the classifier and the rewriter share.

pub mod member_list;
pub mod parser;

pub use member_list::{MemberEntry, MemberList};
pub use parser::{has_parse_errors, node_line, node_text, parse_source};
