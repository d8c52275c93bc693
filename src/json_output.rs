//! JSON output format for analysis results

use serde::Serialize;

use crate::search::{FlipStep, FragilityAssessment, FragilityVerdict};
use crate::significance::{SignificanceTest, SIGNIFICANCE_LEVEL};
use crate::table::ContingencyTable;

/// Top-level record emitted by `--format json`
#[derive(Debug, Clone, Serialize)]
pub struct JsonAnalysis {
    /// Input table
    pub table: ContingencyTable,
    /// Two-sided p-value of the input table
    pub p_value: f64,
    /// Test that produced the p-value
    pub test: SignificanceTest,
    /// Whether the input table is significant at the fixed 0.05 level
    pub significant: bool,
    /// The fixed threshold the verdict is measured against
    pub significance_level: f64,
    /// Number of outcome reassignments performed by the search
    pub fragility_index: u64,
    /// How the search terminated
    pub verdict: FragilityVerdict,
    /// Table the search stopped on
    pub final_table: ContingencyTable,
    /// P-value of the final table
    pub final_p_value: f64,
    /// Per-flip trajectory (only with --steps)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<FlipStep>>,
}

impl JsonAnalysis {
    pub fn from_assessment(assessment: &FragilityAssessment, include_steps: bool) -> Self {
        Self {
            table: assessment.initial_table,
            p_value: assessment.initial_p,
            test: assessment.initial_test,
            significant: assessment.initial_p < SIGNIFICANCE_LEVEL,
            significance_level: SIGNIFICANCE_LEVEL,
            fragility_index: assessment.index,
            verdict: assessment.verdict,
            final_table: assessment.final_table,
            final_p_value: assessment.final_p,
            steps: include_steps.then(|| assessment.steps.clone()),
        }
    }
}
