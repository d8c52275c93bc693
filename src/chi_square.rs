//! Chi-square approximation for large samples
//!
//! One degree of freedom, no continuity correction. At 1 df the chi-square
//! CDF reduces to the error function, P(X² <= x) = erf(sqrt(x/2)), so the
//! p-value needs only an erf approximation instead of a general CDF.

use crate::table::ContingencyTable;

/// Uncorrected 1-df chi-square p-value.
///
/// The denominator is the product of the four margins; callers must keep
/// zero-margin tables out of this path (the selector in
/// [`crate::significance`] routes those to the exact test).
pub fn chi_square_p_value(table: ContingencyTable) -> f64 {
    let a = table.a as f64;
    let b = table.b as f64;
    let c = table.c as f64;
    let d = table.d as f64;

    let n = a + b + c + d;
    let diff = a * d - b * c;
    let chi2 = n * diff * diff / ((a + b) * (c + d) * (a + c) * (b + d));

    // the rational erf approximation can overshoot 1 by a few ulps
    (1.0 - erf((chi2 / 2.0).sqrt())).clamp(0.0, 1.0)
}

/// Error function via the Abramowitz and Stegun rational approximation
/// (formula 7.1.26, absolute error below 1.5e-7).
fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t * (-x * x).exp();
    sign * y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fisher::fisher_exact_p_value;

    #[test]
    fn test_erf_tabulated_values() {
        assert!(erf(0.0).abs() < 1e-6);
        assert!((erf(0.5) - 0.5204999).abs() < 1e-6);
        assert!((erf(1.0) - 0.8427008).abs() < 1e-6);
        assert!((erf(2.0) - 0.9953223).abs() < 1e-6);
        assert!((erf(3.0) - 0.9999779).abs() < 1e-6);
    }

    #[test]
    fn test_erf_is_odd() {
        for x in [0.25, 0.5, 1.0, 1.7, 2.5] {
            assert!((erf(-x) + erf(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_balanced_table_p_is_one() {
        // ad == bc makes chi2 exactly 0
        let p = chi_square_p_value(ContingencyTable::new(25, 25, 25, 25));
        assert!((p - 1.0).abs() < 1e-6, "p = {p}");
    }

    #[test]
    fn test_known_value_near_threshold() {
        // chi2 = 200 * (10*80 - 90*20)^2 / (100*100*30*170) = 3.9216,
        // p = 1 - erf(sqrt(1.9608)) = 0.0477
        let p = chi_square_p_value(ContingencyTable::new(10, 90, 20, 80));
        assert!((p - 0.0477).abs() < 1e-3, "p = {p}");
        assert!(p < 0.05);
    }

    #[test]
    fn test_known_nonsignificant_value() {
        // chi2 = 200 * (10*85 - 90*15)^2 / (100*100*25*175) = 1.1429
        let p = chi_square_p_value(ContingencyTable::new(10, 90, 15, 85));
        assert!((p - 0.2853).abs() < 1e-3, "p = {p}");
        assert!(p >= 0.05);
    }

    #[test]
    fn test_agrees_with_exact_test_on_large_tables() {
        // Only one of the two is used in production for any given table, but
        // near the cell-size cutoff they must tell the same story.
        for table in [
            ContingencyTable::new(90, 110, 110, 90),
            ContingencyTable::new(85, 115, 115, 85),
            ContingencyTable::new(30, 70, 55, 45),
            ContingencyTable::new(80, 120, 110, 90),
        ] {
            let chi = chi_square_p_value(table);
            let exact = fisher_exact_p_value(table);
            assert!(
                (chi - exact).abs() < 0.02,
                "chi={chi} exact={exact} for {table}"
            );
        }
    }
}
