//! Test selection and the p-value entry point
//!
//! Small expected cell counts make the chi-square approximation unreliable,
//! so any table with a cell below [`SMALL_CELL_CUTOFF`] takes the exact path.
//! Both thresholds are fixed properties of the algorithm, not configuration.

use crate::chi_square::chi_square_p_value;
use crate::fisher::fisher_exact_p_value;
use crate::table::ContingencyTable;
use serde::Serialize;

/// Two-sided significance threshold used throughout the engine
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Tables with any cell below this count use the exact test
pub const SMALL_CELL_CUTOFF: u64 = 5;

/// Which test decides a table's p-value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignificanceTest {
    FisherExact,
    ChiSquare,
}

impl SignificanceTest {
    /// Pure predicate choosing exact vs asymptotic for a table
    pub fn select(table: ContingencyTable) -> Self {
        if table.min_cell() < SMALL_CELL_CUTOFF {
            Self::FisherExact
        } else {
            Self::ChiSquare
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::FisherExact => "fisher-exact",
            Self::ChiSquare => "chi-square",
        }
    }
}

/// Two-sided p-value for `table` using the appropriate test for its size.
pub fn p_value(table: ContingencyTable) -> f64 {
    match SignificanceTest::select(table) {
        SignificanceTest::FisherExact => fisher_exact_p_value(table),
        // A zero margin would zero the chi-square denominator. The cutoff
        // already keeps such tables on the exact path (four cells >= 5 force
        // every margin >= 10), but fall back rather than divide by zero.
        SignificanceTest::ChiSquare if table.has_zero_margin() => fisher_exact_p_value(table),
        SignificanceTest::ChiSquare => chi_square_p_value(table),
    }
}

/// Two-sided p-value from bare cell counts: `a`,`b` are Group 1
/// events/non-events, `c`,`d` Group 2.
pub fn compute_p_value(a: u64, b: u64, c: u64, d: u64) -> f64 {
    p_value(ContingencyTable::new(a, b, c, d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_cell_routes_to_exact() {
        assert_eq!(
            SignificanceTest::select(ContingencyTable::new(4, 100, 100, 100)),
            SignificanceTest::FisherExact
        );
        assert_eq!(
            SignificanceTest::select(ContingencyTable::new(0, 0, 0, 0)),
            SignificanceTest::FisherExact
        );
    }

    #[test]
    fn test_cutoff_boundary() {
        // exactly 5 in the smallest cell is enough for the approximation
        assert_eq!(
            SignificanceTest::select(ContingencyTable::new(5, 5, 5, 5)),
            SignificanceTest::ChiSquare
        );
        assert_eq!(
            SignificanceTest::select(ContingencyTable::new(5, 4, 100, 100)),
            SignificanceTest::FisherExact
        );
    }

    #[test]
    fn test_dispatch_matches_underlying_test() {
        let small = ContingencyTable::new(1, 3, 3, 1);
        assert_eq!(
            p_value(small),
            crate::fisher::fisher_exact_p_value(small)
        );

        let large = ContingencyTable::new(10, 90, 20, 80);
        assert_eq!(
            p_value(large),
            crate::chi_square::chi_square_p_value(large)
        );
    }

    #[test]
    fn test_degenerate_table_p_is_one() {
        // zero margins collapse the exact distribution to a single point
        assert_eq!(compute_p_value(0, 0, 10, 10), 1.0);
        assert_eq!(compute_p_value(0, 10, 0, 10), 1.0);
        assert_eq!(compute_p_value(0, 0, 0, 0), 1.0);
    }

    #[test]
    fn test_fixed_constants() {
        assert_eq!(SIGNIFICANCE_LEVEL, 0.05);
        assert_eq!(SMALL_CELL_CUTOFF, 5);
    }

    #[test]
    fn test_test_names() {
        assert_eq!(SignificanceTest::FisherExact.name(), "fisher-exact");
        assert_eq!(SignificanceTest::ChiSquare.name(), "chi-square");
    }
}
