//! Data structures flowing through the per-file pipelines.
//!
//! Each stage consumes the value produced by the previous one:
//! 1. `FileTask` → read → `SourceFile`
//! 2. parse → `ParsedFile`
//! 3. fix: plan → `PlannedFile`, rewrite → `RewrittenFile`
//! 4. check: classify → `ClassifiedFile`, report → `FileReport`

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::classifier::ClassifiedType;
use crate::config::Configuration;
use crate::core::{MemberDeclaration, SwiftAst, TypeKind};
use crate::rewrite::{PlanSummary, TypeRewritePlan};

/// One file to process with the configuration that applies to it.
#[derive(Clone, Debug)]
pub struct FileTask {
    pub path: PathBuf,
    pub config: Arc<Configuration>,
}

impl FileTask {
    pub fn new(path: impl Into<PathBuf>, config: Arc<Configuration>) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub source: String,
    pub config: Arc<Configuration>,
}

#[derive(Clone, Debug)]
pub struct ParsedFile {
    pub ast: SwiftAst,
    pub config: Arc<Configuration>,
}

#[derive(Clone, Debug)]
pub struct PlannedFile {
    pub ast: SwiftAst,
    pub plans: Vec<TypeRewritePlan>,
}

/// Outcome of the fix pipeline for one file.
#[derive(Clone, Debug, Serialize)]
pub struct RewrittenFile {
    pub path: PathBuf,
    #[serde(skip)]
    pub original: String,
    #[serde(skip)]
    pub rewritten: String,
    /// Types whose members were reordered.
    pub reordered_types: Vec<PlanSummary>,
    pub written: bool,
}

impl RewrittenFile {
    pub fn changed(&self) -> bool {
        self.original != self.rewritten
    }
}

#[derive(Clone, Debug)]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub types: Vec<ClassifiedType<MemberDeclaration>>,
    pub config: Arc<Configuration>,
}

/// Current and expected member order of one type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeReport {
    pub type_name: String,
    pub type_kind: TypeKind,
    pub line: usize,
    pub current: Vec<String>,
    pub expected: Vec<String>,
    pub needs_reordering: bool,
}

/// Outcome of the check pipeline for one file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub types: Vec<TypeReport>,
}

impl FileReport {
    pub fn needs_reordering(&self) -> bool {
        self.types.iter().any(|t| t.needs_reordering)
    }

    /// Only the types that are out of order.
    pub fn unordered_types(&self) -> impl Iterator<Item = &TypeReport> {
        self.types.iter().filter(|t| t.needs_reordering)
    }
}
