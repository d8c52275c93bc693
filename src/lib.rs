//! Fragility - statistical significance and fragility-index engine for
//! 2x2 contingency tables
//!
//! Given event/non-event counts for two groups, this library computes a
//! two-sided p-value (Fisher's exact test for small cells, a 1-df chi-square
//! approximation otherwise) and the fragility index: the number of
//! single-outcome reassignments that push a significant result past the
//! 0.05 threshold.

pub mod chi_square;
pub mod cli;
pub mod fisher;
pub mod hypergeometric;
pub mod json_output;
pub mod log_factorial;
pub mod search;
pub mod significance;
pub mod table;
