//! Reorders the members of Swift type declarations according to a
//! configurable ordering policy, preserving comments and formatting.

pub mod batch;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;
pub mod ordering;
pub mod output;
pub mod pipeline;
pub mod rewrite;
pub mod syntax;

// Re-export commonly used types
pub use crate::config::Configuration;
pub use crate::core::{MemberDeclaration, MemberKind, SwiftAst, TypeDeclaration, TypeKind, Visibility};
pub use crate::errors::{ReorderError, Result};
pub use crate::ordering::{reorder, reorder_declarations, MethodClass, OrderingRule};
pub use crate::rewrite::{plan_file, reorder_source, StructuralRewriter, TypeRewritePlan};
pub use crate::syntax::parse_source;
