use crate::types::Solution;
use crate::units::format_inches;

const MAX_WIDTH: f64 = 80.0;
const STRIP_HEIGHT: usize = 2;

/// Text report: a header with the achieved width, one line per distinct
/// piece size (largest first) and a piece total.
pub fn render_report(solution: &Solution) -> String {
    let mut out = format!("{} Setup", format_inches(solution.width()));
    if !solution.is_exact() {
        out.push_str(&format!(" ({} under)", format_inches(solution.under())));
    }
    out.push('\n');

    let summary = solution.summary();
    if summary.is_empty() {
        out.push_str("  (no pieces)\n");
    }
    for entry in &summary {
        out.push_str(&format!("  {} x {}\n", format_inches(entry.size), entry.count));
    }

    let count = solution.piece_count();
    out.push_str(&format!(
        "Total: {} piece{}\n",
        count,
        if count == 1 { "" } else { "s" }
    ));
    out
}

/// ASCII strip of the stack, largest pieces on the left, each box
/// proportional to its size.
pub fn render_stack(solution: &Solution) -> String {
    if solution.width_units == 0 {
        return String::new();
    }

    let scale = MAX_WIDTH / solution.width_units as f64;
    let grid_w = (solution.width_units as f64 * scale).round() as usize;
    let mut grid = vec![vec![' '; grid_w + 1]; STRIP_HEIGHT + 1];

    let mut offset = 0u32;
    for entry in solution.summary() {
        let units = solution.scale.to_units(entry.size);
        for _ in 0..entry.count {
            let sx = (offset as f64 * scale).round() as usize;
            offset += units;
            let ex = (offset as f64 * scale).round() as usize;
            let sw = ex - sx;

            if sw == 0 {
                continue;
            }

            draw_box(&mut grid, sx, sw);

            // Label
            let label = format!("{:.3}", entry.size);
            if label.len() < sw {
                let start_x = sx + 1 + (sw - 1 - label.len()) / 2;
                for (i, ch) in label.chars().enumerate() {
                    grid[STRIP_HEIGHT / 2][start_x + i] = ch;
                }
            }
        }
    }

    let mut result = String::new();
    for row in &grid {
        let line: String = row.iter().collect();
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}

fn draw_box(grid: &mut [Vec<char>], x: usize, w: usize) {
    let cols = grid[0].len();

    // Horizontal edges
    for i in x..=(x + w).min(cols - 1) {
        for y in [0, STRIP_HEIGHT] {
            if grid[y][i] != '+' {
                grid[y][i] = '-';
            }
        }
    }

    // Vertical edges, shared with the neighbouring box
    for cx in [x, x + w] {
        if cx < cols {
            for row in grid.iter_mut().take(STRIP_HEIGHT).skip(1) {
                row[cx] = '|';
            }
            grid[0][cx] = '+';
            grid[STRIP_HEIGHT][cx] = '+';
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::solver::Solver;
    use crate::types::Piece;
    use crate::units::UnitScale;

    #[test]
    fn test_report_exact() {
        let sol = Solver::new(Catalog::steel()).solve(1.005);
        let output = render_report(&sol);
        assert_eq!(
            output,
            "1.005\" Setup\n  0.750\" x 1\n  0.255\" x 1\nTotal: 2 pieces\n"
        );
    }

    #[test]
    fn test_report_under() {
        let sol = Solver::new(Catalog::steel()).solve(0.061);
        let output = render_report(&sol);
        assert!(output.starts_with("0.050\" Setup (0.011\" under)\n"));
        assert!(output.contains("  0.050\" x 1\n"));
        assert!(output.ends_with("Total: 1 piece\n"));
    }

    #[test]
    fn test_report_empty() {
        let sol = Solver::new(Catalog::steel()).solve(0.03);
        let output = render_report(&sol);
        assert!(output.contains("(no pieces)"));
        assert!(output.contains("Total: 0 pieces"));
    }

    #[test]
    fn test_stack_single_piece() {
        let sol = Solver::new(Catalog::steel()).solve(3.0);
        let output = render_stack(&sol);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('+') && lines[0].ends_with('+'));
        assert_eq!(lines[0].len(), 81);
        assert!(lines[1].contains("3.000"));
    }

    #[test]
    fn test_stack_boxes_are_ordered_largest_first() {
        let sol = Solver::new(Catalog::steel()).solve(4.5);
        let output = render_stack(&sol);
        let middle = output.lines().nth(1).unwrap();
        let three = middle.find("3.000").unwrap();
        let one = middle.find("1.000").unwrap();
        let half = middle.find("0.500").unwrap();
        assert!(three < one && one < half);
        assert_eq!(middle.matches('|').count(), 4);
    }

    #[test]
    fn test_stack_keeps_sizes_sharing_a_unit_count() {
        let tenths = UnitScale::new(10).unwrap();
        let sol = Solution {
            target_units: 6,
            width_units: 6,
            scale: tenths,
            pieces: vec![Piece::new(0.25, tenths), Piece::new(0.3, tenths)],
        };
        let output = render_stack(&sol);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 81);
        // Two equal boxes split at column 40
        assert_eq!(lines[0].matches('+').count(), 3);
        assert_eq!(lines[0].find('+'), Some(0));
        assert_eq!(lines[0][1..].find('+'), Some(39));
        let three = lines[1].find("0.300").unwrap();
        let quarter = lines[1].find("0.250").unwrap();
        assert!(three < 40 && quarter > 40);

        let report = render_report(&sol);
        assert!(report.contains("  0.300\" x 1\n  0.250\" x 1\n"));
    }

    #[test]
    fn test_stack_empty() {
        let sol = Solver::new(Catalog::steel()).solve(0.03);
        assert!(render_stack(&sol).is_empty());
    }
}
