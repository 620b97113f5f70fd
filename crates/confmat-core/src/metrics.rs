//! Sensitivity and specificity.
//!
//! Both metrics are recall on one class, reported as a percentage:
//!
//! ```text
//! sensitivity = TP / (TP + FN) × 100
//! specificity = TN / (TN + FP) × 100
//! ```
//!
//! A zero denominator is a defined outcome, not an error: the rate is 0.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sensitivity and specificity as percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rates {
    /// Recall on the positive class.
    pub sensitivity: f64,
    /// Recall on the negative class.
    pub specificity: f64,
}

impl fmt::Display for Rates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sensitivity: {:.2}\nSpecificity: {:.2}",
            self.sensitivity, self.specificity
        )
    }
}

/// `numerator / denominator × 100`, or 0 when the denominator is not positive.
pub fn percentage(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

/// Compute sensitivity and specificity from the four counts.
///
/// Inputs are non-negative numbers; they do not need to be integral. All-zero
/// input yields both rates at 0, never NaN.
pub fn calculate(tp: f64, fn_: f64, tn: f64, fp: f64) -> Rates {
    let positives = tp + fn_;
    let negatives = tn + fp;
    if positives <= 0.0 {
        log::debug!("no actual positives; sensitivity reported as 0");
    }
    if negatives <= 0.0 {
        log::debug!("no actual negatives; specificity reported as 0");
    }
    Rates {
        sensitivity: percentage(tp, positives),
        specificity: percentage(tn, negatives),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn percentage_guards_zero_denominator() {
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert!(close(percentage(1.0, 4.0), 25.0));
    }

    #[test]
    fn calculate_scenario_a() {
        let r = calculate(50.0, 10.0, 30.0, 5.0);
        assert!(close(r.sensitivity, 50.0 / 60.0 * 100.0));
        assert!(close(r.specificity, 30.0 / 35.0 * 100.0));
        assert_eq!(format!("{:.2}", r.sensitivity), "83.33");
        assert_eq!(format!("{:.2}", r.specificity), "85.71");
    }

    #[test]
    fn calculate_no_positives() {
        let r = calculate(0.0, 0.0, 10.0, 0.0);
        assert_eq!(r.sensitivity, 0.0);
        assert!(close(r.specificity, 100.0));
    }

    #[test]
    fn calculate_all_zero_is_not_nan() {
        let r = calculate(0.0, 0.0, 0.0, 0.0);
        assert_eq!(r, Rates::default());
        assert!(!r.sensitivity.is_nan());
        assert!(!r.specificity.is_nan());
    }

    #[test]
    fn calculate_accepts_fractional_counts() {
        let r = calculate(1.5, 0.5, 0.25, 0.75);
        assert!(close(r.sensitivity, 75.0));
        assert!(close(r.specificity, 25.0));
    }

    #[test]
    fn calculate_only_misses() {
        let r = calculate(0.0, 7.0, 0.0, 3.0);
        assert_eq!(r.sensitivity, 0.0);
        assert_eq!(r.specificity, 0.0);
    }

    #[test]
    fn rates_display_two_decimals() {
        let r = calculate(50.0, 10.0, 30.0, 5.0);
        assert_eq!(r.to_string(), "Sensitivity: 83.33\nSpecificity: 85.71");
        assert_eq!(
            Rates::default().to_string(),
            "Sensitivity: 0.00\nSpecificity: 0.00"
        );
    }
}
