//! Running totals over histogram bins
//!
//! The cumulative view here is a count, not a probability-normalized CDF:
//! `cum[i]` is the number of values in bins `0..=i`.

use crate::builders::FixedWidthBuilder;
use crate::edges::BinEdges;
use crate::traits::HistogramBuilder;
use distview_core::{Error, Result};
use std::fmt;

/// Non-decreasing running totals of per-bin counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeCounts {
    values: Vec<usize>,
}

impl CumulativeCounts {
    pub(crate) fn from_counts(counts: &[usize]) -> Self {
        let values = counts
            .iter()
            .scan(0usize, |total, &count| {
                *total += count;
                Some(*total)
            })
            .collect();
        Self { values }
    }

    /// The running totals, lowest bin first
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Number of bins covered
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Running total up to and including bin `index`
    pub fn get(&self, index: usize) -> Option<usize> {
        self.values.get(index).copied()
    }

    /// The final total, equal to the sum of all bin counts
    pub fn total(&self) -> usize {
        self.values.last().copied().unwrap_or(0)
    }

    /// `(bin index, running total)` pairs for a line series
    pub fn points(&self) -> Vec<(usize, usize)> {
        self.values.iter().copied().enumerate().collect()
    }

    /// Running totals divided by the final total
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.values.len()];
        }
        self.values
            .iter()
            .map(|&v| v as f64 / total as f64)
            .collect()
    }
}

impl fmt::Display for CumulativeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cumulative({} bins, total={})", self.len(), self.total())
    }
}

/// Prefix sums of `bin_counts`
///
/// Fails with `InvalidArgument` when there are no bins.
pub fn compute_cumulative(bin_counts: &[usize]) -> Result<CumulativeCounts> {
    if bin_counts.is_empty() {
        return Err(Error::zero_count("bin count"));
    }
    Ok(CumulativeCounts::from_counts(bin_counts))
}

/// Bin `sample` and accumulate, without an existing histogram
///
/// Edges come from the same routine the histogram path uses, so for equal
/// inputs the returned edges match those of [`crate::compute_histogram`].
pub fn cumulative_from_sample(
    sample: &[f64],
    bin_count: usize,
) -> Result<(BinEdges, CumulativeCounts)> {
    let histogram = FixedWidthBuilder::new(bin_count).build(sample)?;
    let cumulative = histogram.cumulative();
    let (edges, _) = histogram.into_parts();
    Ok((edges, cumulative))
}
