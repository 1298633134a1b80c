use serde::{Deserialize, Serialize};

use crate::summary::summarize;
use crate::units::UnitScale;

/// One catalog size, carried in both inches and integer units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub size: f64,
    pub units: u32,
}

impl Piece {
    pub fn new(size: f64, scale: UnitScale) -> Self {
        Self {
            size,
            units: scale.to_units(size),
        }
    }
}

/// A distinct piece size and how many of it a stack uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub size: f64,
    pub count: u32,
}

/// Result of one solve. `pieces` is in the order the search appended them.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub target_units: u32,
    pub width_units: u32,
    pub scale: UnitScale,
    pub pieces: Vec<Piece>,
}

impl Solution {
    pub fn width(&self) -> f64 {
        self.scale.from_units(self.width_units)
    }

    pub fn target(&self) -> f64 {
        self.scale.from_units(self.target_units)
    }

    /// How far the stack falls short of the target, in inches.
    pub fn under(&self) -> f64 {
        self.scale.from_units(self.target_units - self.width_units)
    }

    pub fn is_exact(&self) -> bool {
        self.width_units == self.target_units
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn summary(&self) -> Vec<SummaryEntry> {
        summarize(&self.pieces)
    }
}
