use confmat_core::{AnnotatedGrid, ConfusionCounts};

pub fn run(counts: ConfusionCounts, json: bool) {
    let evaluation = counts.evaluate();

    if json {
        match serde_json::to_string_pretty(&evaluation) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize result: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{}", evaluation.rates);
    println!();
    print!("{}", format_grid(&evaluation.grid));
}

/// Plain-text rendering of the 2x3 grid with its headers.
pub fn format_grid(grid: &AnnotatedGrid) -> String {
    let label_w = grid.row_labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let col_w: Vec<usize> = grid
        .column_labels
        .iter()
        .enumerate()
        .map(|(col, label)| {
            let widest_value = (0..grid.values.len())
                .map(|row| grid.cell(row, col).display_value().len())
                .max()
                .unwrap_or(0);
            label.len().max(widest_value)
        })
        .collect();

    let mut out = format!("{:<label_w$}", "");
    for (label, w) in grid.column_labels.iter().zip(&col_w) {
        out.push_str(&format!("  {label:>w$}"));
    }
    out.push('\n');

    for (label, cells) in grid.rows() {
        out.push_str(&format!("{label:<label_w$}"));
        for (cell, w) in cells.iter().zip(&col_w) {
            out.push_str(&format!("  {:>w$}", cell.display_value()));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_grid_scenario_a() {
        let text = format_grid(&ConfusionCounts::new(50, 10, 30, 5).grid());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Predicted Positive"));
        assert!(lines[0].trim_end().ends_with("Total"));
        assert!(lines[1].starts_with("Actual Positive"));
        assert!(lines[1].trim_end().ends_with("60"));
        assert!(lines[2].starts_with("Actual Negative"));
        assert!(lines[2].trim_end().ends_with("35"));
    }

    #[test]
    fn format_grid_columns_align() {
        let text = format_grid(&ConfusionCounts::new(1, 22, 333, 4444).grid());
        let widths: Vec<usize> = text.lines().map(|l| l.len()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn format_grid_wide_values_widen_column() {
        let text = format_grid(&ConfusionCounts::new(1_234_567_890_123, 1, 0, 0).grid());
        assert!(text.contains("1234567890124"));
        let widths: Vec<usize> = text.lines().map(|l| l.len()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
