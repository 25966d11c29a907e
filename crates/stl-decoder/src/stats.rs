use serde::{Deserialize, Serialize};

use crate::validate::Rejection;

/// Facet tallies reported by both parse paths.
///
/// `total == valid + degenerate + invalid + incomplete`. `zero_normal` counts
/// valid facets stored without a normal and `rejected_vertices` counts ASCII
/// vertex lines dropped for numeric reasons; neither is part of that sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeStats {
    pub total: usize,
    pub valid: usize,
    pub degenerate: usize,
    pub invalid: usize,
    pub incomplete: usize,
    pub zero_normal: usize,
    pub rejected_vertices: usize,
}

impl DecodeStats {
    pub fn record_valid(&mut self, zero_normal: bool) {
        self.total += 1;
        self.valid += 1;
        if zero_normal {
            self.zero_normal += 1;
        }
    }

    pub fn record_rejection(&mut self, rejection: Rejection) {
        self.total += 1;
        match rejection {
            Rejection::InvalidNumeric => self.invalid += 1,
            Rejection::Degenerate => self.degenerate += 1,
            Rejection::Incomplete => self.incomplete += 1,
        }
    }

    /// Count `n` facets that were declared but never read.
    pub fn record_missing(&mut self, n: usize) {
        self.total += n;
        self.incomplete += n;
    }

    pub fn rejected(&self) -> usize {
        self.degenerate + self.invalid + self.incomplete
    }

    pub fn is_consistent(&self) -> bool {
        self.total == self.valid + self.rejected()
    }
}
