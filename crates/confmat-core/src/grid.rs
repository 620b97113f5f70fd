//! The annotated 2×3 confusion grid.
//!
//! ```text
//!                    Predicted Positive  Predicted Negative  Total
//! Actual Positive    TP                  FN                  TP + FN
//! Actual Negative    FP                  TN                  TN + FP
//! ```
//!
//! Row 1 is ordered `[FP, TN]`, not `[TN, FP]`: column 0 is always the
//! predicted-positive column.

use serde::{Deserialize, Serialize};

use crate::colormap::{LIGHT_CORAL, LIGHT_GREEN, LIGHT_GREY, Rgb};

/// Header of each grid column, left to right.
pub const COLUMN_LABELS: [&str; 3] = ["Predicted Positive", "Predicted Negative", "Total"];

/// Header of each grid row, top to bottom.
pub const ROW_LABELS: [&str; 2] = ["Actual Positive", "Actual Negative"];

pub const TITLE: &str = "Confusion Matrix with Totals";
pub const X_AXIS_LABEL: &str = "Predicted Label";
pub const Y_AXIS_LABEL: &str = "True Label";

pub const ROWS: usize = 2;
pub const COLS: usize = 3;

/// What a cell holds. Drives styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellCategory {
    TruePositive,
    FalseNegative,
    FalsePositive,
    TrueNegative,
    TotalPositive,
    TotalNegative,
}

/// Category of every grid position, `CATEGORIES[row][col]`.
pub const CATEGORIES: [[CellCategory; COLS]; ROWS] = [
    [
        CellCategory::TruePositive,
        CellCategory::FalseNegative,
        CellCategory::TotalPositive,
    ],
    [
        CellCategory::FalsePositive,
        CellCategory::TrueNegative,
        CellCategory::TotalNegative,
    ],
];

impl CellCategory {
    /// Category of the cell at `(row, col)`; `None` outside the grid.
    pub fn at(row: usize, col: usize) -> Option<Self> {
        CATEGORIES.get(row)?.get(col).copied()
    }

    pub fn treatment(self) -> Treatment {
        match self {
            Self::TruePositive | Self::TrueNegative => Treatment::Favorable,
            Self::FalsePositive | Self::FalseNegative => Treatment::Unfavorable,
            Self::TotalPositive | Self::TotalNegative => Treatment::Neutral,
        }
    }

    pub fn is_total(self) -> bool {
        self.treatment() == Treatment::Neutral
    }

    /// Short tag shown in legends.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::TruePositive => "TP",
            Self::FalseNegative => "FN",
            Self::FalsePositive => "FP",
            Self::TrueNegative => "TN",
            Self::TotalPositive => "P",
            Self::TotalNegative => "N",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TruePositive => "True Positives",
            Self::FalseNegative => "False Negatives",
            Self::FalsePositive => "False Positives",
            Self::TrueNegative => "True Negatives",
            Self::TotalPositive => "Total Positives",
            Self::TotalNegative => "Total Negatives",
        }
    }
}

/// Visual treatment of a cell annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    /// Correct predictions (TP, TN).
    Favorable,
    /// Errors (FP, FN).
    Unfavorable,
    /// Row totals.
    Neutral,
}

impl Treatment {
    /// Fill of the box drawn behind the cell value.
    pub fn box_color(self) -> Rgb {
        match self {
            Self::Favorable => LIGHT_GREEN,
            Self::Unfavorable => LIGHT_CORAL,
            Self::Neutral => LIGHT_GREY,
        }
    }
}

/// One annotated grid position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cell {
    pub value: f64,
    pub row: usize,
    pub col: usize,
    pub category: CellCategory,
}

impl Cell {
    /// Value as shown in the heatmap: integral values print without decimals.
    pub fn display_value(&self) -> String {
        format_value(self.value)
    }
}

/// Format a count for display; integral values print without a decimal point.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// The 2×3 grid plus per-cell annotations and axis labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedGrid {
    /// `values[row][col]`; the last column holds the row totals.
    pub values: [[f64; COLS]; ROWS],
    /// Cells in row-major order.
    pub cells: [Cell; ROWS * COLS],
    pub column_labels: [&'static str; COLS],
    pub row_labels: [&'static str; ROWS],
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl AnnotatedGrid {
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * COLS + col]
    }

    /// Largest value in the grid (0 for an all-zero grid).
    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .flatten()
            .copied()
            .fold(0.0, f64::max)
    }

    /// Heatmap intensity of a cell: `value / max_value`, in `[0, 1]`.
    pub fn intensity(&self, row: usize, col: usize) -> f64 {
        let max = self.max_value();
        if max > 0.0 {
            (self.value(row, col) / max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Rows with their labels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &[Cell])> + '_ {
        self.row_labels
            .iter()
            .copied()
            .zip(self.cells.chunks(COLS))
    }
}

/// Build the annotated grid for the four counts.
///
/// Row 0 is `[tp, fn, tp + fn]`, row 1 is `[fp, tn, tn + fp]`.
pub fn render(tp: f64, fn_: f64, tn: f64, fp: f64) -> AnnotatedGrid {
    with_totals(tp, fn_, tn, fp, tp + fn_, tn + fp)
}

/// Build the grid with row totals computed by the caller.
pub(crate) fn with_totals(
    tp: f64,
    fn_: f64,
    tn: f64,
    fp: f64,
    total_positives: f64,
    total_negatives: f64,
) -> AnnotatedGrid {
    let values = [[tp, fn_, total_positives], [fp, tn, total_negatives]];

    let cells = std::array::from_fn(|i| {
        let (row, col) = (i / COLS, i % COLS);
        Cell {
            value: values[row][col],
            row,
            col,
            category: CATEGORIES[row][col],
        }
    });

    log::debug!("rendered confusion grid {values:?}");

    AnnotatedGrid {
        values,
        cells,
        column_labels: COLUMN_LABELS,
        row_labels: ROW_LABELS,
        title: TITLE,
        x_label: X_AXIS_LABEL,
        y_label: Y_AXIS_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_scenario_a() {
        let g = render(50.0, 10.0, 30.0, 5.0);
        assert_eq!(g.values, [[50.0, 10.0, 60.0], [5.0, 30.0, 35.0]]);
    }

    #[test]
    fn row_one_is_fp_then_tn() {
        // Distinct values so a swap would be visible.
        let g = render(1.0, 2.0, 3.0, 4.0);
        assert_eq!(g.value(1, 0), 4.0, "predicted-positive column holds FP");
        assert_eq!(g.value(1, 1), 3.0, "predicted-negative column holds TN");
        assert_eq!(g.cell(1, 0).category, CellCategory::FalsePositive);
        assert_eq!(g.cell(1, 1).category, CellCategory::TrueNegative);
    }

    #[test]
    fn last_column_is_row_sum() {
        let g = render(7.0, 11.0, 13.0, 17.0);
        for row in 0..ROWS {
            assert_eq!(g.value(row, 2), g.value(row, 0) + g.value(row, 1));
        }
    }

    #[test]
    fn cells_match_values_and_positions() {
        let g = render(50.0, 10.0, 30.0, 5.0);
        for row in 0..ROWS {
            for col in 0..COLS {
                let c = g.cell(row, col);
                assert_eq!(c.row, row);
                assert_eq!(c.col, col);
                assert_eq!(c.value, g.value(row, col));
                assert_eq!(Some(c.category), CellCategory::at(row, col));
            }
        }
    }

    #[test]
    fn category_table_layout() {
        use CellCategory::*;
        assert_eq!(CATEGORIES[0], [TruePositive, FalseNegative, TotalPositive]);
        assert_eq!(CATEGORIES[1], [FalsePositive, TrueNegative, TotalNegative]);
        assert_eq!(CellCategory::at(1, 2), Some(TotalNegative));
    }

    #[test]
    fn category_at_out_of_range() {
        assert_eq!(CellCategory::at(2, 0), None);
        assert_eq!(CellCategory::at(0, 3), None);
    }

    #[test]
    fn treatments() {
        assert_eq!(CellCategory::TruePositive.treatment(), Treatment::Favorable);
        assert_eq!(CellCategory::TrueNegative.treatment(), Treatment::Favorable);
        assert_eq!(CellCategory::FalsePositive.treatment(), Treatment::Unfavorable);
        assert_eq!(CellCategory::FalseNegative.treatment(), Treatment::Unfavorable);
        assert_eq!(CellCategory::TotalPositive.treatment(), Treatment::Neutral);
        assert_eq!(CellCategory::TotalNegative.treatment(), Treatment::Neutral);
        assert!(CellCategory::TotalNegative.is_total());
        assert!(!CellCategory::TruePositive.is_total());
    }

    #[test]
    fn box_colors_are_distinct() {
        let f = Treatment::Favorable.box_color();
        let u = Treatment::Unfavorable.box_color();
        let n = Treatment::Neutral.box_color();
        assert_ne!(f, u);
        assert_ne!(u, n);
        assert_ne!(f, n);
    }

    #[test]
    fn labels() {
        let g = render(0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            g.column_labels,
            ["Predicted Positive", "Predicted Negative", "Total"]
        );
        assert_eq!(g.row_labels, ["Actual Positive", "Actual Negative"]);
        assert_eq!(g.title, "Confusion Matrix with Totals");
    }

    #[test]
    fn intensity_is_proportional_to_max() {
        let g = render(50.0, 10.0, 30.0, 5.0);
        assert_eq!(g.max_value(), 60.0);
        assert_eq!(g.intensity(0, 2), 1.0);
        assert!((g.intensity(0, 0) - 50.0 / 60.0).abs() < 1e-12);
        assert!((g.intensity(1, 0) - 5.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn intensity_of_zero_grid_is_zero() {
        let g = render(0.0, 0.0, 0.0, 0.0);
        assert_eq!(g.max_value(), 0.0);
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(g.intensity(row, col), 0.0);
            }
        }
    }

    #[test]
    fn rows_iterates_with_labels() {
        let g = render(1.0, 2.0, 3.0, 4.0);
        let rows: Vec<_> = g.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "Actual Positive");
        assert_eq!(rows[1].1.len(), 3);
        assert_eq!(rows[1].1[2].value, 7.0);
    }

    #[test]
    fn display_value_drops_integral_decimals() {
        assert_eq!(format_value(60.0), "60");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(2.5), "2.5");
        let g = render(50.0, 10.0, 30.0, 5.0);
        assert_eq!(g.cell(1, 2).display_value(), "35");
    }

    #[test]
    fn serializes_categories_snake_case() {
        let g = render(1.0, 0.0, 0.0, 0.0);
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(json["cells"][0]["category"], "true_positive");
        assert_eq!(json["cells"][5]["category"], "total_negative");
        assert_eq!(json["values"][0][2], 1.0);
    }
}
