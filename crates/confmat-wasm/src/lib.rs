//! confmat WebAssembly bindings.
//!
//! JavaScript passes counts as numbers. Each export checks that they are
//! finite non-negative integers before handing them to the core functions.

use wasm_bindgen::prelude::*;

use confmat_core::{calculate, render};

// ---------------------------------------------------------------------------
// Input checks
// ---------------------------------------------------------------------------

fn check_count(name: &str, value: f64) -> Result<f64, String> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(format!("{name} must be a non-negative integer, got {value}"));
    }
    Ok(value)
}

fn check_counts(tp: f64, fn_: f64, tn: f64, fp: f64) -> Result<[f64; 4], String> {
    Ok([
        check_count("tp", tp)?,
        check_count("fn", fn_)?,
        check_count("tn", tn)?,
        check_count("fp", fp)?,
    ])
}

fn rates_vec(tp: f64, fn_: f64, tn: f64, fp: f64) -> Result<Vec<f64>, String> {
    let [tp, fn_, tn, fp] = check_counts(tp, fn_, tn, fp)?;
    let rates = calculate(tp, fn_, tn, fp);
    Ok(vec![rates.sensitivity, rates.specificity])
}

fn matrix_vec(tp: f64, fn_: f64, tn: f64, fp: f64) -> Result<Vec<f64>, String> {
    let [tp, fn_, tn, fp] = check_counts(tp, fn_, tn, fp)?;
    Ok(render(tp, fn_, tn, fp).values.iter().flatten().copied().collect())
}

fn svg_string(tp: f64, fn_: f64, tn: f64, fp: f64) -> Result<String, String> {
    let [tp, fn_, tn, fp] = check_counts(tp, fn_, tn, fp)?;
    Ok(confmat_core::svg::render_svg(&render(tp, fn_, tn, fp)))
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

/// `[sensitivity, specificity]` as percentages.
#[wasm_bindgen(js_name = calculate)]
pub fn calculate_rates(tp: f64, fn_: f64, tn: f64, fp: f64) -> Result<Vec<f64>, JsError> {
    rates_vec(tp, fn_, tn, fp).map_err(|e| JsError::new(&e))
}

/// The 2x3 matrix flattened row-major: `[tp, fn, tp+fn, fp, tn, tn+fp]`.
#[wasm_bindgen]
pub fn confusion_matrix(tp: f64, fn_: f64, tn: f64, fp: f64) -> Result<Vec<f64>, JsError> {
    matrix_vec(tp, fn_, tn, fp).map_err(|e| JsError::new(&e))
}

/// Heatmap as an SVG document string.
#[wasm_bindgen]
pub fn render_svg(tp: f64, fn_: f64, tn: f64, fp: f64) -> Result<String, JsError> {
    svg_string(tp, fn_, tn, fp).map_err(|e| JsError::new(&e))
}

#[wasm_bindgen]
pub fn version() -> String {
    confmat_core::VERSION.to_string()
}
