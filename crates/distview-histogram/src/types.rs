//! Core types for histogram representation

use crate::cumulative::CumulativeCounts;
use crate::edges::BinEdges;
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Position of the bin, lowest first
    pub index: usize,
    /// Left edge of the bin (exclusive, except for bin 0)
    pub left: f64,
    /// Right edge of the bin (inclusive)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Density (count / (total_count * bin_width)), zero for zero-width bins
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(index: usize, left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let width = right - left;
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };

        Self {
            index,
            left,
            right,
            count,
            density,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin
    ///
    /// Only meaningful for bins of a non-degenerate histogram; use
    /// [`Histogram::find_bin`] to locate a value.
    pub fn contains(&self, value: f64) -> bool {
        let above_left = value > self.left || (self.index == 0 && value == self.left);
        above_left && value <= self.right
    }

    /// Get the relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }

    /// Axis label, e.g. `"2.00 to 4.00"`
    pub fn label(&self) -> String {
        format!("{:.2} to {:.2}", self.left, self.right)
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.index == 0 { '[' } else { '(' };
        write!(
            f,
            "{open}{:.3}, {:.3}]: count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// Per-bin counts over a set of equal-width edges
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: BinEdges,
    counts: Vec<usize>,
    /// Number of values binned (finite values of the input)
    total_count: usize,
}

impl Histogram {
    /// Create a histogram from edges and matching counts
    pub(crate) fn new(edges: BinEdges, counts: Vec<usize>) -> Self {
        debug_assert_eq!(edges.bin_count(), counts.len());
        let total_count = counts.iter().sum();
        Self {
            edges,
            counts,
            total_count,
        }
    }

    /// Get the bins
    pub fn bins(&self) -> Vec<HistogramBin> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let (left, right) = (self.edges.as_slice()[i], self.edges.as_slice()[i + 1]);
                HistogramBin::new(i, left, right, count, self.total_count)
            })
            .collect()
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the histogram is empty (never true for a built histogram)
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Get the total count of data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the minimum value
    pub fn min(&self) -> f64 {
        self.edges.min()
    }

    /// Get the maximum value
    pub fn max(&self) -> f64 {
        self.edges.max()
    }

    /// Get the range of the histogram
    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }

    /// Whether the sample had a single distinct value
    ///
    /// A degenerate histogram is still valid: every value sits in bin 0.
    pub fn is_degenerate(&self) -> bool {
        self.edges.is_degenerate()
    }

    /// Get the bin edges
    pub fn edges(&self) -> &BinEdges {
        &self.edges
    }

    /// Get the per-bin counts
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        self.edges.bin_index(value)
    }

    /// Get frequencies as a vector
    pub fn frequencies(&self) -> Vec<f64> {
        if self.total_count == 0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts
            .iter()
            .map(|&count| count as f64 / self.total_count as f64)
            .collect()
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.edges
            .as_slice()
            .windows(2)
            .map(|w| (w[0] + w[1]) / 2.0)
            .collect()
    }

    /// Get one axis label per bin
    pub fn labels(&self) -> Vec<String> {
        (0..self.len())
            .filter_map(|i| self.edges.label(i))
            .collect()
    }

    /// Running total of the counts, lowest bin first
    pub fn cumulative(&self) -> CumulativeCounts {
        CumulativeCounts::from_counts(&self.counts)
    }

    /// Split into edges and counts
    pub fn into_parts(self) -> (BinEdges, Vec<usize>) {
        (self.edges, self.counts)
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.min(),
            self.max()
        )
    }
}
