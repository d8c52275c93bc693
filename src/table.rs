//! 2x2 contingency table value type
//!
//! Cross-tabulates two groups against a binary outcome:
//!
//! |         | Event | No Event |
//! |---------|-------|----------|
//! | Group 1 | `a`   | `b`      |
//! | Group 2 | `c`   | `d`      |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a table from its `a,b,c,d` text form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTableError {
    #[error("expected 4 comma-separated counts (a,b,c,d), got {0}")]
    WrongCellCount(usize),
    #[error("invalid count '{value}': {source}")]
    InvalidCount {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// A 2x2 contingency table of non-negative counts.
///
/// Cells are `u64`, so the engine's "callers pass non-negative integers"
/// contract holds by construction. The table is a plain value: the fragility
/// search builds a fresh one per flip instead of mutating shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyTable {
    /// Group 1 events
    pub a: u64,
    /// Group 1 non-events
    pub b: u64,
    /// Group 2 events
    pub c: u64,
    /// Group 2 non-events
    pub d: u64,
}

impl ContingencyTable {
    pub fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self { a, b, c, d }
    }

    /// Group 1 total
    pub fn row1(&self) -> u64 {
        self.a + self.b
    }

    /// Group 2 total
    pub fn row2(&self) -> u64 {
        self.c + self.d
    }

    /// Total events across both groups
    pub fn col1(&self) -> u64 {
        self.a + self.c
    }

    /// Total non-events across both groups
    pub fn col2(&self) -> u64 {
        self.b + self.d
    }

    /// Grand total
    pub fn n(&self) -> u64 {
        self.row1() + self.row2()
    }

    /// Smallest of the four cells; drives exact-vs-asymptotic test selection
    pub fn min_cell(&self) -> u64 {
        self.a.min(self.b).min(self.c).min(self.d)
    }

    /// True when any marginal total is zero (degenerate table)
    pub fn has_zero_margin(&self) -> bool {
        self.row1() == 0 || self.row2() == 0 || self.col1() == 0 || self.col2() == 0
    }
}

impl fmt::Display for ContingencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.a, self.b, self.c, self.d)
    }
}

impl FromStr for ContingencyTable {
    type Err = ParseTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s.split(',').map(str::trim).collect::<Vec<_>>();
        if cells.len() != 4 {
            return Err(ParseTableError::WrongCellCount(cells.len()));
        }
        let mut parsed = [0u64; 4];
        for (slot, cell) in parsed.iter_mut().zip(&cells) {
            *slot = cell
                .parse()
                .map_err(|source| ParseTableError::InvalidCount {
                    value: (*cell).to_string(),
                    source,
                })?;
        }
        Ok(Self::new(parsed[0], parsed[1], parsed[2], parsed[3]))
    }
}
