use crate::types::{Piece, SummaryEntry};

/// Groups a stack by piece size and sorts the groups largest first.
///
/// Grouping compares the inch size, not the unit count, so two catalog
/// entries that happen to round to the same unit count stay separate.
pub fn summarize(pieces: &[Piece]) -> Vec<SummaryEntry> {
    let mut groups: Vec<SummaryEntry> = Vec::new();

    for piece in pieces {
        match groups.iter_mut().find(|g| g.size == piece.size) {
            Some(group) => group.count += 1,
            None => groups.push(SummaryEntry {
                size: piece.size,
                count: 1,
            }),
        }
    }

    groups.sort_by(|a, b| b.size.total_cmp(&a.size));
    groups
}
