//! SVG rendering surface for [`AnnotatedGrid`].
//!
//! Produces a standalone SVG document in the matshow layout: title on top,
//! column headers above the grid, row headers to its left, the x axis label
//! under the grid and the y axis label rotated along the left edge. Each cell
//! is filled from the Blues scale and carries its value in a box tinted by
//! the cell's [`Treatment`](crate::grid::Treatment).

use std::fmt::{self, Write};

use crate::colormap::{BLACK, BOX_ALPHA, blues};
use crate::grid::{AnnotatedGrid, COLS, ROWS};

const CELL_WIDTH: f64 = 150.0;
const CELL_HEIGHT: f64 = 110.0;
const MARGIN_LEFT: f64 = 170.0;
const MARGIN_TOP: f64 = 100.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 60.0;

const FONT: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";
const VALUE_FONT_SIZE: f64 = 14.0;
const TOTAL_FONT_SIZE: f64 = 17.0;

/// Canvas size `(width, height)` of the rendered document.
pub fn canvas_size() -> (f64, f64) {
    (
        MARGIN_LEFT + CELL_WIDTH * COLS as f64 + MARGIN_RIGHT,
        MARGIN_TOP + CELL_HEIGHT * ROWS as f64 + MARGIN_BOTTOM,
    )
}

/// Render the grid as a standalone SVG document.
pub fn render_svg(grid: &AnnotatedGrid) -> String {
    let mut svg = String::new();
    // Formatting into a String cannot fail.
    let _ = write_svg(&mut svg, grid);
    svg
}

/// Write the SVG document for `grid` into `svg`.
pub fn write_svg<W: Write>(svg: &mut W, grid: &AnnotatedGrid) -> fmt::Result {
    let (width, height) = canvas_size();
    let grid_w = CELL_WIDTH * COLS as f64;
    let grid_h = CELL_HEIGHT * ROWS as f64;
    let grid_mid_x = MARGIN_LEFT + grid_w / 2.0;
    let grid_mid_y = MARGIN_TOP + grid_h / 2.0;

    writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width:.0}' height='{height:.0}' viewBox='0 0 {width:.0} {height:.0}' role='img'>"
    )?;
    writeln!(svg, "  <title>{}</title>", escape_text(grid.title))?;
    writeln!(
        svg,
        "  <rect width='{width:.0}' height='{height:.0}' fill='#ffffff'/>"
    )?;
    writeln!(
        svg,
        "  <text x='{grid_mid_x:.1}' y='30' text-anchor='middle' font-family='{FONT}' font-size='18' font-weight='600' fill='#000000'>{}</text>",
        escape_text(grid.title)
    )?;

    for (col, label) in grid.column_labels.iter().enumerate() {
        let x = MARGIN_LEFT + CELL_WIDTH * (col as f64 + 0.5);
        writeln!(
            svg,
            "  <text x='{x:.1}' y='{:.1}' text-anchor='middle' font-family='{FONT}' font-size='13' fill='#000000'>{}</text>",
            MARGIN_TOP - 12.0,
            escape_text(label)
        )?;
    }

    for (row, (label, cells)) in grid.rows().enumerate() {
        let y = MARGIN_TOP + CELL_HEIGHT * (row as f64 + 0.5);
        writeln!(
            svg,
            "  <text x='{:.1}' y='{y:.1}' text-anchor='end' dominant-baseline='middle' font-family='{FONT}' font-size='13' fill='#000000'>{}</text>",
            MARGIN_LEFT - 10.0,
            escape_text(label)
        )?;

        for cell in cells {
            let x0 = MARGIN_LEFT + CELL_WIDTH * cell.col as f64;
            let y0 = MARGIN_TOP + CELL_HEIGHT * cell.row as f64;
            let fill = blues(grid.intensity(cell.row, cell.col));
            let box_fill = cell.category.treatment().box_color();
            let font_size = if cell.category.is_total() {
                TOTAL_FONT_SIZE
            } else {
                VALUE_FONT_SIZE
            };
            let text = cell.display_value();
            let box_w = text.chars().count() as f64 * font_size * 0.62 + 14.0;
            let box_h = font_size + 12.0;
            let cx = x0 + CELL_WIDTH / 2.0;
            let cy = y0 + CELL_HEIGHT / 2.0;

            writeln!(
                svg,
                "  <g class='cell {}'>",
                category_class(cell.category)
            )?;
            writeln!(
                svg,
                "    <rect x='{x0:.1}' y='{y0:.1}' width='{CELL_WIDTH:.1}' height='{CELL_HEIGHT:.1}' fill='{fill}'/>"
            )?;
            writeln!(
                svg,
                "    <rect x='{:.1}' y='{:.1}' width='{box_w:.1}' height='{box_h:.1}' rx='3' fill='{box_fill}' fill-opacity='{BOX_ALPHA}'/>",
                cx - box_w / 2.0,
                cy - box_h / 2.0
            )?;
            writeln!(
                svg,
                "    <text x='{cx:.1}' y='{cy:.1}' text-anchor='middle' dominant-baseline='central' font-family='{FONT}' font-size='{font_size:.0}' fill='{BLACK}'>{}</text>",
                escape_text(&text)
            )?;
            writeln!(svg, "  </g>")?;
        }
    }

    writeln!(
        svg,
        "  <rect x='{MARGIN_LEFT:.1}' y='{MARGIN_TOP:.1}' width='{grid_w:.1}' height='{grid_h:.1}' fill='none' stroke='#000000' stroke-width='1'/>"
    )?;
    writeln!(
        svg,
        "  <text x='{grid_mid_x:.1}' y='{:.1}' text-anchor='middle' font-family='{FONT}' font-size='14' fill='#000000'>{}</text>",
        MARGIN_TOP + grid_h + 35.0,
        escape_text(grid.x_label)
    )?;
    writeln!(
        svg,
        "  <text x='20' y='{grid_mid_y:.1}' text-anchor='middle' font-family='{FONT}' font-size='14' fill='#000000' transform='rotate(-90, 20, {grid_mid_y:.1})'>{}</text>",
        escape_text(grid.y_label)
    )?;
    writeln!(svg, "</svg>")
}

fn category_class(category: crate::grid::CellCategory) -> &'static str {
    use crate::grid::CellCategory::*;
    match category {
        TruePositive => "true-positive",
        FalseNegative => "false-negative",
        FalsePositive => "false-positive",
        TrueNegative => "true-negative",
        TotalPositive => "total-positive",
        TotalNegative => "total-negative",
    }
}

/// Escape text for use inside SVG/XML element content and attributes.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
