//! Two-sided Fisher exact test
//!
//! The exact p-value of a 2x2 table: the total probability of every table
//! sharing the observed margins that is at most as likely as the observed
//! one. This includes tied-probability tables on both sides of the
//! distribution and does not double a one-sided tail.

use crate::hypergeometric::{hypergeom_prob, support};
use crate::table::ContingencyTable;

/// Keeps the observed table inside its own tail sum when floating-point
/// round-off makes its recomputed probability land a hair above itself.
const TIE_EPSILON: f64 = 1e-12;

/// Two-sided exact p-value.
///
/// Handles degenerate tables (zero margins) gracefully: the support collapses
/// to a single point and the p-value is 1.
pub fn fisher_exact_p_value(table: ContingencyTable) -> f64 {
    let row1 = table.row1();
    let row2 = table.row2();
    let col1 = table.col1();

    let observed = hypergeom_prob(table.a as i64, row1, row2, col1);
    let (lo, hi) = support(row1, row2, col1);

    let mut p = 0.0;
    for i in lo..=hi {
        let prob = hypergeom_prob(i as i64, row1, row2, col1);
        if prob <= observed + TIE_EPSILON {
            p += prob;
        }
    }
    // The epsilon-inclusive comparison can nudge a full-support sum a few
    // ulps past 1.0.
    p.min(1.0)
}
