//! Stages of the check pipeline: classify, then compare against the rules.

use crate::classifier::{classify_file, DeclarationBuilder};
use crate::pipeline::data::{ClassifiedFile, FileReport, ParsedFile, TypeReport};
use crate::pipeline::stage::Stage;
use crate::ordering::reorder_declarations;

pub struct ClassifyStage;

impl Stage for ClassifyStage {
    type Input = ParsedFile;
    type Output = ClassifiedFile;
    type Error = std::convert::Infallible;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let types = classify_file(&input.ast, &DeclarationBuilder);
        Ok(ClassifiedFile {
            path: input.ast.path,
            types,
            config: input.config,
        })
    }

    fn name(&self) -> &str {
        "Classify"
    }
}

/// Compare each type's members with the order the rules ask for.
pub struct ReportStage;

impl Stage for ReportStage {
    type Input = ClassifiedFile;
    type Output = FileReport;
    type Error = std::convert::Infallible;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let rules = input.config.rules();
        let types = input
            .types
            .into_iter()
            .map(|classified| {
                let expected = reorder_declarations(rules, &classified.members);
                let needs_reordering = expected != classified.members;
                TypeReport {
                    type_name: classified.declaration.name,
                    type_kind: classified.declaration.kind,
                    line: classified.declaration.line,
                    current: classified.members.into_iter().map(|m| m.name).collect(),
                    expected: expected.into_iter().map(|m| m.name).collect(),
                    needs_reordering,
                }
            })
            .collect();

        Ok(FileReport {
            path: input.path,
            types,
        })
    }

    fn name(&self) -> &str {
        "Report"
    }
}
