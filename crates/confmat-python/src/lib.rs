//! Python bindings for confmat via PyO3.
//!
//! Counts arrive as Python ints; negative values raise `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use confmat_core::{ConfusionCounts, Evaluation};

fn to_count(name: &str, value: i64) -> PyResult<u64> {
    u64::try_from(value).map_err(|_| {
        PyValueError::new_err(format!("{name} must be a non-negative integer, got {value}"))
    })
}

fn to_counts(tp: i64, fn_: i64, tn: i64, fp: i64) -> PyResult<ConfusionCounts> {
    Ok(ConfusionCounts::new(
        to_count("tp", tp)?,
        to_count("fn", fn_)?,
        to_count("tn", tn)?,
        to_count("fp", fp)?,
    ))
}

fn evaluation_to_pydict<'py>(py: Python<'py>, e: &Evaluation) -> PyResult<Bound<'py, PyDict>> {
    let counts = PyDict::new(py);
    counts.set_item("tp", e.counts.true_positive)?;
    counts.set_item("fn", e.counts.false_negative)?;
    counts.set_item("tn", e.counts.true_negative)?;
    counts.set_item("fp", e.counts.false_positive)?;

    let cells = PyList::empty(py);
    for c in &e.grid.cells {
        let d = PyDict::new(py);
        d.set_item("row", c.row)?;
        d.set_item("col", c.col)?;
        d.set_item("value", c.value)?;
        d.set_item("category", c.category.abbreviation())?;
        d.set_item("label", c.category.label())?;
        cells.append(d)?;
    }

    let d = PyDict::new(py);
    d.set_item("counts", counts)?;
    d.set_item("sensitivity", e.rates.sensitivity)?;
    d.set_item("specificity", e.rates.specificity)?;
    d.set_item("matrix", e.grid.values.iter().map(|r| r.to_vec()).collect::<Vec<_>>())?;
    d.set_item("column_labels", e.grid.column_labels.to_vec())?;
    d.set_item("row_labels", e.grid.row_labels.to_vec())?;
    d.set_item("cells", cells)?;
    Ok(d)
}

/// Sensitivity and specificity as percentages; 0 where a denominator is 0.
#[pyfunction]
fn calculate_sensitivity_specificity(
    tp: i64,
    r#fn: i64,
    tn: i64,
    fp: i64,
) -> PyResult<(f64, f64)> {
    let rates = to_counts(tp, r#fn, tn, fp)?.rates();
    Ok((rates.sensitivity, rates.specificity))
}

/// The 2x3 matrix `[[tp, fn, tp + fn], [fp, tn, tn + fp]]`.
#[pyfunction]
fn confusion_matrix(tp: i64, r#fn: i64, tn: i64, fp: i64) -> PyResult<Vec<Vec<f64>>> {
    let grid = to_counts(tp, r#fn, tn, fp)?.grid();
    Ok(grid.values.iter().map(|r| r.to_vec()).collect())
}

/// Counts, rates, matrix and annotated cells as a dict.
#[pyfunction]
fn evaluate<'py>(
    py: Python<'py>,
    tp: i64,
    r#fn: i64,
    tn: i64,
    fp: i64,
) -> PyResult<Bound<'py, PyDict>> {
    let evaluation = to_counts(tp, r#fn, tn, fp)?.evaluate();
    evaluation_to_pydict(py, &evaluation)
}

/// Heatmap as a standalone SVG document.
#[pyfunction]
fn render_svg(tp: i64, r#fn: i64, tn: i64, fp: i64) -> PyResult<String> {
    let grid = to_counts(tp, r#fn, tn, fp)?.grid();
    Ok(confmat_core::svg::render_svg(&grid))
}

/// Library version.
#[pyfunction]
fn version() -> &'static str {
    confmat_core::VERSION
}

/// Python module definition.
#[pymodule]
fn confmat(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", confmat_core::VERSION)?;
    m.add_function(wrap_pyfunction!(calculate_sensitivity_specificity, m)?)?;
    m.add_function(wrap_pyfunction!(confusion_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(render_svg, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;
    Ok(())
}
