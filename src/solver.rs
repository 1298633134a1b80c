use crate::catalog::Catalog;
use crate::error::InputError;
use crate::types::{Piece, Solution};
use crate::units::UnitScale;

/// Upper bound on targets accepted from callers, in inches.
pub const MAX_TARGET_INCHES: f64 = 1000.0;

/// Upper bound on the search table length. The table has one entry per
/// unit of target, so this caps a single solve's allocation at any scale.
pub const MAX_TARGET_UNITS: u32 = 1_000_000;

/// Screens a caller-supplied target before it reaches a solver using `scale`.
pub fn validate_target(inches: f64, scale: UnitScale) -> Result<f64, InputError> {
    if inches.is_nan() {
        return Err(InputError::NotANumber);
    }
    if inches <= 0.0 {
        return Err(InputError::NonPositive(inches));
    }
    if inches > MAX_TARGET_INCHES || scale.to_units(inches) > MAX_TARGET_UNITS {
        return Err(InputError::TooLarge {
            target: inches,
            max: MAX_TARGET_INCHES.min(scale.from_units(MAX_TARGET_UNITS)),
        });
    }
    Ok(inches)
}

/// Backpointer for a reached value: the fewest pieces that sum to it, the
/// value it was reached from and the catalog index of the piece that was added.
#[derive(Debug, Clone, Copy)]
struct Step {
    count: u32,
    prev: usize,
    piece: usize,
}

pub struct Solver {
    catalog: Catalog,
}

impl Solver {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn solve(&self, target_inches: f64) -> Solution {
        let target = self.catalog.scale().to_units(target_inches);
        self.solve_units(target)
    }

    /// Finds the largest width `<= target` reachable with catalog pieces and
    /// the fewest pieces that reach it. Always succeeds: the empty stack
    /// reaches zero.
    pub fn solve_units(&self, target: u32) -> Solution {
        let table = self.reach(target as usize);

        // Exact match preferred, otherwise closest under
        let width = (0..table.len())
            .rev()
            .find(|&v| table[v].is_some())
            .unwrap_or(0);

        let pieces = self.reconstruct(&table, width);

        tracing::debug!(
            target_units = target,
            width_units = width,
            pieces = pieces.len(),
            catalog = self.catalog.len(),
            "solved stack"
        );

        Solution {
            target_units: target,
            width_units: width as u32,
            scale: self.catalog.scale(),
            pieces,
        }
    }

    fn reach(&self, target: usize) -> Vec<Option<Step>> {
        let pieces = self.catalog.pieces();
        let mut table: Vec<Option<Step>> = vec![None; target + 1];
        table[0] = Some(Step {
            count: 0,
            prev: 0,
            piece: 0,
        });

        // Ascending order: every source of `i` is smaller than `i`, so its
        // entry is final by the time it is expanded.
        for i in 0..=target {
            let Some(step) = table[i] else {
                continue;
            };

            for (idx, piece) in pieces.iter().enumerate() {
                let next = i + piece.units as usize;
                if next > target {
                    continue;
                }

                let count = step.count + 1;
                // Strict comparison keeps the first stack discovered on ties
                if table[next].is_none_or(|existing| count < existing.count) {
                    table[next] = Some(Step {
                        count,
                        prev: i,
                        piece: idx,
                    });
                }
            }
        }

        table
    }

    fn reconstruct(&self, table: &[Option<Step>], width: usize) -> Vec<Piece> {
        let pieces = self.catalog.pieces();
        let mut stack = Vec::new();
        let mut v = width;
        while v > 0 {
            let Some(step) = table[v] else {
                break;
            };
            stack.push(pieces[step.piece]);
            v = step.prev;
        }
        stack.reverse();
        stack
    }
}
