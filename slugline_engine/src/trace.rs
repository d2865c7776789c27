//! Stage-by-stage record of a slugify run, for debugging surprising output.

use std::fmt;

use serde::Serialize;
use slugline_data::SlugOptions;

use crate::pipeline::run_pipeline;

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Replace,
    Deburr,
    Normalize,
    Decamelize,
    Lowercase,
    Filter,
    Collapse,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Replace => "replace",
            Stage::Deburr => "deburr",
            Stage::Normalize => "normalize",
            Stage::Decamelize => "decamelize",
            Stage::Lowercase => "lowercase",
            Stage::Filter => "filter",
            Stage::Collapse => "collapse",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageOutput {
    pub stage: Stage,
    pub output: String,
}

/// Every intermediate string produced while slugifying `input`.
///
/// Optional stages that were switched off do not appear in `stages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugTrace {
    pub input: String,
    pub stages: Vec<StageOutput>,
    pub slug: String,
}

impl SlugTrace {
    pub fn output_of(&self, stage: Stage) -> Option<&str> {
        self.stages.iter().find(|s| s.stage == stage).map(|s| s.output.as_str())
    }
}

/// Slugify `input` and keep each stage's output.
pub fn slugify_traced(input: &str, options: &SlugOptions) -> SlugTrace {
    let mut stages = Vec::new();
    let slug = run_pipeline(input, options, |stage, output| {
        stages.push(StageOutput {
            stage,
            output: output.to_string(),
        });
    });
    SlugTrace {
        input: input.to_string(),
        stages,
        slug,
    }
}
