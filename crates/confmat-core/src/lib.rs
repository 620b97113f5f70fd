//! # confmat-core
//!
//! **Sensitivity, specificity and an annotated confusion matrix from four counts.**
//!
//! `confmat-core` is the pure computational kernel behind the `confmat` form:
//! it turns true-positive, false-negative, true-negative and false-positive
//! counts into two percentages and a 2×3 grid (the 2×2 matrix plus a row-total
//! column) ready to be drawn by any rendering surface.
//!
//! ## Quick Start
//!
//! ```
//! use confmat_core::ConfusionCounts;
//!
//! let counts = ConfusionCounts::new(50, 10, 30, 5);
//!
//! let rates = counts.rates();
//! assert_eq!(format!("{:.2}", rates.sensitivity), "83.33");
//! assert_eq!(format!("{:.2}", rates.specificity), "85.71");
//!
//! let grid = counts.grid();
//! assert_eq!(grid.values, [[50.0, 10.0, 60.0], [5.0, 30.0, 35.0]]);
//!
//! let svg = confmat_core::svg::render_svg(&grid);
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! ## Architecture
//!
//! Counts → MetricCalculator ([`calculate`]) → Rates
//! Counts → MatrixRenderer ([`render`]) → [`AnnotatedGrid`] → surface
//!
//! Both functions are pure. Surfaces (the SVG writer in [`svg`], the terminal
//! heatmap in the CLI, the web page in the server) only consume the grid and
//! the [`colormap`].

pub mod colormap;
pub mod counts;
pub mod grid;
pub mod metrics;
pub mod svg;

pub use colormap::{Rgb, blues};
pub use counts::{ConfusionCounts, Evaluation};
pub use grid::{
    AnnotatedGrid, COLUMN_LABELS, Cell, CellCategory, ROW_LABELS, Treatment, format_value, render,
};
pub use metrics::{Rates, calculate, percentage};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
