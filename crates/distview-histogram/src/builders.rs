//! Histogram building strategies

use crate::edges::BinEdges;
use crate::traits::HistogramBuilder;
use crate::types::Histogram;
use distview_core::{Error, Result};
use tracing::{debug, trace};

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// the finite values of the sample. Non-finite values are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    ///
    /// A zero bin count is accepted here and rejected by `build`.
    pub fn new(num_bins: usize) -> Self {
        Self { num_bins }
    }

    fn edges_for(&self, sample: &[f64]) -> Result<BinEdges> {
        if self.num_bins == 0 {
            return Err(Error::zero_count("bin count"));
        }
        let edges = BinEdges::from_sample(sample, self.num_bins)?;
        if edges.is_degenerate() {
            debug!(
                value = edges.min(),
                bins = self.num_bins,
                "degenerate range, all values land in bin 0"
            );
        }
        Ok(edges)
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let edges = self.edges_for(sample)?;
        let counts = edges.count(sample);
        trace!(bins = self.num_bins, n = sample.len(), "binned sample");
        Ok(Histogram::new(edges, counts))
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        debug_assert!(
            sorted_sample
                .iter()
                .filter(|v| v.is_finite())
                .collect::<Vec<_>>()
                .windows(2)
                .all(|w| w[0] <= w[1]),
            "build_sorted requires ascending input"
        );

        let edges = self.edges_for(sorted_sample)?;
        let right_edges = &edges.as_slice()[1..];
        let mut counts = vec![0; self.num_bins];

        // Single pass: the bin index only moves forward on sorted data
        let mut current_bin = 0;
        for &value in sorted_sample.iter().filter(|v| v.is_finite()) {
            while current_bin < self.num_bins - 1 && value > right_edges[current_bin] {
                current_bin += 1;
            }
            counts[current_bin] += 1;
        }

        Ok(Histogram::new(edges, counts))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width() {
        let data: Vec<f64> = (0..10).map(f64::from).collect();
        let hist = FixedWidthBuilder::new(5).build(&data).unwrap();
        assert_eq!(hist.counts(), &[2, 2, 2, 2, 2]);
        assert_eq!(hist.total_count(), 10);
        assert_eq!(hist.edges().bin_count(), 5);
    }

    #[test]
    fn test_sorted_matches_unsorted() {
        let data: Vec<f64> = vec![9.5, 0.0, 3.3, 3.3, 7.0, 1.25, 10.0, 4.999, 5.0, 2.5];
        let mut sorted = data.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));

        for bins in [1, 2, 3, 4, 7, 20] {
            let builder = FixedWidthBuilder::new(bins);
            assert_eq!(
                builder.build(&data).unwrap(),
                builder.build_sorted(&sorted).unwrap(),
                "bins = {bins}"
            );
        }
    }

    #[test]
    fn test_degenerate_sample() {
        let hist = FixedWidthBuilder::new(4).build(&[5.0, 5.0, 5.0]).unwrap();
        assert!(hist.is_degenerate());
        assert_eq!(hist.counts(), &[3, 0, 0, 0]);

        let sorted = FixedWidthBuilder::new(4).build_sorted(&[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(sorted.counts(), &[3, 0, 0, 0]);
    }

    #[test]
    fn test_non_finite_values_skipped() {
        let data = vec![1.0, f64::NAN, 2.0, f64::INFINITY, 3.0];
        let hist = FixedWidthBuilder::new(2).build(&data).unwrap();
        assert_eq!(hist.total_count(), 3);
        assert_eq!(hist.min(), 1.0);
        assert_eq!(hist.max(), 3.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(FixedWidthBuilder::new(0).build(&[1.0]).unwrap_err().is_invalid_argument());
        assert!(FixedWidthBuilder::new(4).build(&[]).unwrap_err().is_invalid_sample());
        assert!(FixedWidthBuilder::new(4)
            .build(&[f64::NAN])
            .unwrap_err()
            .is_invalid_sample());
        assert!(FixedWidthBuilder::new(0).build_sorted(&[1.0]).is_err());
    }

    #[test]
    fn test_target_bins() {
        assert_eq!(FixedWidthBuilder::new(12).target_bins(), Some(12));
    }
}
