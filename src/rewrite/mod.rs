//! Rewrite planning and structural rewriting of type bodies.

pub mod plan;
pub mod rewriter;

pub use plan::{plan_file, plan_from_target, plan_type, PlanSummary, TypeRewritePlan};
pub use rewriter::{MatchTier, StructuralRewriter};

use std::path::Path;

use crate::errors::Result;
use crate::ordering::OrderingRule;
use crate::syntax::parse_source;

/// Parse, plan and rewrite one source text.
pub fn reorder_source(source: &str, path: &Path, rules: &[OrderingRule]) -> Result<String> {
    let ast = parse_source(source, path)?;
    let plans = plan_file(&ast, rules);
    Ok(StructuralRewriter::new(&plans).rewrite(&ast))
}
