//! The four confusion counts collected from the form.

use serde::{Deserialize, Serialize};

use crate::grid::{AnnotatedGrid, with_totals};
use crate::metrics::{Rates, calculate};

/// Everything one form submission produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub counts: ConfusionCounts,
    pub rates: Rates,
    pub grid: AnnotatedGrid,
}

/// True/false positive/negative counts for a binary classifier.
///
/// Counts are unsigned, so the non-negativity every downstream formula relies
/// on is carried by the type rather than re-validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positive: u64,
    pub false_negative: u64,
    pub true_negative: u64,
    pub false_positive: u64,
}

impl ConfusionCounts {
    /// Build counts in form order: TP, FN, TN, FP.
    pub fn new(
        true_positive: u64,
        false_negative: u64,
        true_negative: u64,
        false_positive: u64,
    ) -> Self {
        Self {
            true_positive,
            false_negative,
            true_negative,
            false_positive,
        }
    }

    /// TP + FN.
    pub fn total_positives(&self) -> u64 {
        self.true_positive.saturating_add(self.false_negative)
    }

    /// TN + FP.
    pub fn total_negatives(&self) -> u64 {
        self.true_negative.saturating_add(self.false_positive)
    }

    /// Every classified case.
    pub fn total(&self) -> u64 {
        self.total_positives().saturating_add(self.total_negatives())
    }

    /// Counts as `f64` in form order, for the metric and grid functions.
    pub fn as_f64(&self) -> [f64; 4] {
        [
            self.true_positive as f64,
            self.false_negative as f64,
            self.true_negative as f64,
            self.false_positive as f64,
        ]
    }

    /// Sensitivity and specificity for these counts.
    pub fn rates(&self) -> Rates {
        let [tp, fn_, tn, fp] = self.as_f64();
        calculate(tp, fn_, tn, fp)
    }

    /// The annotated 2×3 grid for these counts.
    ///
    /// Totals come from the integer sums, so they match [`total_positives`]
    /// and [`total_negatives`] even where `f64` addition would round.
    ///
    /// [`total_positives`]: Self::total_positives
    /// [`total_negatives`]: Self::total_negatives
    pub fn grid(&self) -> AnnotatedGrid {
        let [tp, fn_, tn, fp] = self.as_f64();
        with_totals(
            tp,
            fn_,
            tn,
            fp,
            self.total_positives() as f64,
            self.total_negatives() as f64,
        )
    }

    /// Run the full calculate → render pipeline.
    pub fn evaluate(&self) -> Evaluation {
        Evaluation {
            counts: *self,
            rates: self.rates(),
            grid: self.grid(),
        }
    }
}
