//! Available piece sizes.
//!
//! A [`Catalog`] is an immutable, ordered list of distinct positive sizes with
//! unlimited supply of each. Its order is the order the solver tries pieces in.

use crate::error::CatalogError;
use crate::types::Piece;
use crate::units::UnitScale;

/// Steel tooling sizes in inches, largest first.
pub const STEEL_SIZES: [f64; 24] = [
    3.0, 2.0, 1.0, 0.875, 0.75, 0.625, 0.5, 0.4, 0.375, 0.3, 0.26, 0.257, 0.255, 0.253, 0.252,
    0.251, 0.25, 0.24, 0.2, 0.125, 0.1, 0.062, 0.05, 0.031,
];

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    scale: UnitScale,
    pieces: Vec<Piece>,
}

impl Catalog {
    pub fn new(sizes: &[f64], scale: UnitScale) -> Result<Self, CatalogError> {
        if sizes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut pieces: Vec<Piece> = Vec::with_capacity(sizes.len());
        for &size in sizes {
            if !size.is_finite() || size <= 0.0 {
                return Err(CatalogError::NonPositive(size));
            }
            if pieces.iter().any(|p| p.size == size) {
                return Err(CatalogError::Duplicate(size));
            }
            let piece = Piece::new(size, scale);
            if piece.units == 0 {
                return Err(CatalogError::BelowResolution {
                    size,
                    scale: scale.get(),
                });
            }
            pieces.push(piece);
        }

        Ok(Self { scale, pieces })
    }

    /// The steel shim set at thousandth-inch resolution.
    pub fn steel() -> Self {
        let scale = UnitScale::THOUSANDTHS;
        Self {
            scale,
            pieces: STEEL_SIZES.iter().map(|&s| Piece::new(s, scale)).collect(),
        }
    }

    /// Parses a list like `3,2,1,0.5` (commas and/or whitespace).
    pub fn parse_sizes(s: &str) -> Result<Vec<f64>, CatalogError> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.trim_end_matches('"')
                    .parse::<f64>()
                    .map_err(|_| CatalogError::Parse(tok.to_string()))
            })
            .collect()
    }

    pub fn scale(&self) -> UnitScale {
        self.scale
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn sizes(&self) -> Vec<f64> {
        self.pieces.iter().map(|p| p.size).collect()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::steel()
    }
}
