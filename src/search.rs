//! Greedy fragility-index search
//!
//! The fragility index of a significant table is the number of single-outcome
//! reassignments ("flips") it takes before the p-value reaches the 0.05
//! threshold. Each step flips one non-event to an event in whichever group
//! currently has fewer (or equally many) events, which raises that group's
//! event rate and narrows the gap between the two proportions.
//!
//! The search is a deterministic greedy walk, not a proof of global
//! minimality; it matches the conventional clinical fragility-index
//! procedure. One boundary behavior is deliberately kept from that
//! procedure: when the donor cell (`b` or `d`) runs dry while the table is
//! still significant, the count of flips made so far is returned even though
//! non-significance was never reached. [`assess_fragility`] reports that
//! outcome as [`FragilityVerdict::DonorExhausted`] so callers can tell the
//! two terminal conditions apart; [`compute_fragility_index`] returns the
//! bare count either way.

use crate::significance::{compute_p_value, p_value, SignificanceTest, SIGNIFICANCE_LEVEL};
use crate::table::ContingencyTable;
use serde::Serialize;

/// Which group donated the flipped outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipGroup {
    Group1,
    Group2,
}

impl FlipGroup {
    pub fn label(self) -> &'static str {
        match self {
            Self::Group1 => "Group 1",
            Self::Group2 => "Group 2",
        }
    }
}

/// One reassignment step in the search trajectory
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FlipStep {
    /// Group whose non-event became an event
    pub group: FlipGroup,
    /// Table after the flip
    pub table: ContingencyTable,
    /// P-value of the flipped table
    pub p_value: f64,
}

/// Terminal condition of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FragilityVerdict {
    /// The initial p-value was already >= 0.05; nothing to flip
    AlreadyNonSignificant,
    /// Significance was lost after `flips` reassignments
    Fragile { flips: u64 },
    /// The donor cell ran dry with the table still significant; `flips`
    /// counts the reassignments made before the search had to stop
    DonorExhausted { flips: u64 },
}

/// Full result of a fragility search
#[derive(Debug, Clone, Serialize)]
pub struct FragilityAssessment {
    pub initial_table: ContingencyTable,
    pub initial_p: f64,
    /// Test that decided the initial p-value
    pub initial_test: SignificanceTest,
    /// Table the search stopped on (equals `initial_table` for index 0)
    pub final_table: ContingencyTable,
    pub final_p: f64,
    /// The fragility index: number of flips performed
    pub index: u64,
    pub verdict: FragilityVerdict,
    /// Per-flip trajectory, in order
    pub steps: Vec<FlipStep>,
}

impl FragilityAssessment {
    /// Human-readable report for the text output format
    pub fn to_report_string(&self, include_steps: bool) -> String {
        let mut report = String::new();

        match self.verdict {
            FragilityVerdict::AlreadyNonSignificant => {
                report.push_str("✅ NOT SIGNIFICANT\n\n");
            }
            FragilityVerdict::Fragile { flips } => {
                report.push_str(&format!(
                    "❌ SIGNIFICANT (lost after {} reassignment{})\n\n",
                    flips,
                    if flips == 1 { "" } else { "s" }
                ));
            }
            FragilityVerdict::DonorExhausted { flips } => {
                report.push_str(&format!(
                    "⚠️  SIGNIFICANT (donor cell exhausted after {} reassignment{}, \
                     significance never lost)\n\n",
                    flips,
                    if flips == 1 { "" } else { "s" }
                ));
            }
        }

        report.push_str(&format!("Table (a,b,c,d): {}\n", self.initial_table));
        report.push_str(&format!(
            "P-value: {:.4} ({})\n",
            self.initial_p,
            self.initial_test.name()
        ));
        report.push_str(&format!("Significance level: {SIGNIFICANCE_LEVEL}\n"));
        report.push_str(&format!("Fragility index: {}\n", self.index));
        if self.index > 0 {
            report.push_str(&format!(
                "Final table: {} (p={:.4})\n",
                self.final_table, self.final_p
            ));
        }

        if include_steps && !self.steps.is_empty() {
            report.push_str("\n🔁 Flips:\n");
            for (i, step) in self.steps.iter().enumerate() {
                report.push_str(&format!(
                    "  {}. {}: {} -> p={:.4}\n",
                    i + 1,
                    step.group.label(),
                    step.table,
                    step.p_value
                ));
            }
        }

        report
    }
}

/// Fragility index from bare cell counts.
///
/// Direct rendition of the conventional greedy procedure: flip toward the
/// group with fewer (or equal) events, stop when p >= 0.05 or the donor cell
/// is empty, and return the flip count, including the partial count in the
/// exhausted case.
pub fn compute_fragility_index(mut a: u64, mut b: u64, mut c: u64, mut d: u64) -> u64 {
    let mut flips = 0;
    let mut p = compute_p_value(a, b, c, d);
    if p >= SIGNIFICANCE_LEVEL {
        return 0;
    }
    while p < SIGNIFICANCE_LEVEL {
        if a <= c {
            if b == 0 {
                break;
            }
            a += 1;
            b -= 1;
        } else {
            if d == 0 {
                break;
            }
            c += 1;
            d -= 1;
        }
        flips += 1;
        p = compute_p_value(a, b, c, d);
    }
    flips
}

/// Fragility search with the full trajectory and an explicit verdict.
///
/// The index it reports is always identical to [`compute_fragility_index`]
/// on the same four counts.
pub fn assess_fragility(table: ContingencyTable) -> FragilityAssessment {
    let initial_p = p_value(table);
    let initial_test = SignificanceTest::select(table);

    let mut current = table;
    let mut p = initial_p;
    let mut flips = 0u64;
    let mut steps = Vec::new();
    let mut exhausted = false;

    if initial_p < SIGNIFICANCE_LEVEL {
        while p < SIGNIFICANCE_LEVEL {
            let group = if current.a <= current.c {
                FlipGroup::Group1
            } else {
                FlipGroup::Group2
            };
            match group {
                FlipGroup::Group1 => {
                    if current.b == 0 {
                        exhausted = true;
                        break;
                    }
                    current.a += 1;
                    current.b -= 1;
                }
                FlipGroup::Group2 => {
                    if current.d == 0 {
                        exhausted = true;
                        break;
                    }
                    current.c += 1;
                    current.d -= 1;
                }
            }
            flips += 1;
            p = p_value(current);
            tracing::debug!(flip = flips, table = %current, p, "reassigned one outcome");
            steps.push(FlipStep {
                group,
                table: current,
                p_value: p,
            });
        }
    }

    let verdict = if initial_p >= SIGNIFICANCE_LEVEL {
        FragilityVerdict::AlreadyNonSignificant
    } else if exhausted {
        FragilityVerdict::DonorExhausted { flips }
    } else {
        FragilityVerdict::Fragile { flips }
    };

    FragilityAssessment {
        initial_table: table,
        initial_p,
        initial_test,
        final_table: current,
        final_p: p,
        index: flips,
        verdict,
        steps,
    }
}
