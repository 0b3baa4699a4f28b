//! Equal-width bin edges and the membership rule
//!
//! Every histogram and cumulative view in this crate is built from a
//! [`BinEdges`] value, so the two can never disagree about which bin a value
//! falls in.

use distview_core::{Error, Result};
use std::fmt;

/// `bin_count + 1` non-decreasing boundaries partitioning `[min, max]`
///
/// Bin `i` covers `(edge[i], edge[i + 1]]`; bin 0 additionally covers
/// `edge[0]` itself. A value belongs to the first bin whose right edge is
/// greater than or equal to it.
#[derive(Debug, Clone, PartialEq)]
pub struct BinEdges {
    edges: Vec<f64>,
}

impl BinEdges {
    /// Partition `[min, max]` into `bin_count` equal-width bins
    ///
    /// `edge[0]` is exactly `min` and `edge[bin_count]` exactly `max`. When
    /// `min == max` every edge equals `min`.
    pub fn equal_width(min: f64, max: f64, bin_count: usize) -> Result<Self> {
        if bin_count == 0 {
            return Err(Error::zero_count("bin count"));
        }
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::InvalidArgument(format!(
                "edge range [{min}, {max}] must be finite and ordered"
            )));
        }

        if min == max {
            return Ok(Self {
                edges: vec![min; bin_count + 1],
            });
        }

        let n = bin_count as f64;
        let width = (max - min) / n;
        // Inner edges stay strictly below max so max always lands in the last bin
        let ceiling = largest_below(max);

        let mut edges = Vec::with_capacity(bin_count + 1);
        edges.push(min);
        let mut previous = min;
        for i in 1..bin_count {
            let edge = if width.is_finite() {
                min + i as f64 * width
            } else {
                // max - min overflowed; interpolate without the subtraction
                let t = i as f64 / n;
                min * (1.0 - t) + max * t
            };
            previous = edge.max(previous).min(ceiling);
            edges.push(previous);
        }
        edges.push(max);

        Ok(Self { edges })
    }

    /// Edges spanning the finite values of `sample`
    pub fn from_sample(sample: &[f64], bin_count: usize) -> Result<Self> {
        let (min, max) = finite_min_max(sample)?;
        Self::equal_width(min, max, bin_count)
    }

    /// Number of bins (one less than the number of edges)
    pub fn bin_count(&self) -> usize {
        self.edges.len() - 1
    }

    /// All edges, lowest first
    pub fn as_slice(&self) -> &[f64] {
        &self.edges
    }

    /// The lowest edge
    pub fn min(&self) -> f64 {
        self.edges[0]
    }

    /// The highest edge
    pub fn max(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Nominal bin width, zero for a degenerate range
    pub fn width(&self) -> f64 {
        let n = self.bin_count() as f64;
        self.max() / n - self.min() / n
    }

    /// Whether all edges coincide (sample min equals sample max)
    pub fn is_degenerate(&self) -> bool {
        self.min() == self.max()
    }

    /// Left and right edge of bin `index`
    pub fn bounds(&self, index: usize) -> Option<(f64, f64)> {
        if index < self.bin_count() {
            Some((self.edges[index], self.edges[index + 1]))
        } else {
            None
        }
    }

    /// The bin `value` belongs to, or `None` outside `[min, max]`
    ///
    /// Edges are non-decreasing, so the first right edge `>= value` is found
    /// by binary search. This is the same answer a linear scan from bin 0
    /// that stops at the first match would give.
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        if !(value >= self.min() && value <= self.max()) {
            return None;
        }
        Some(self.edges[1..].partition_point(|&right| right < value))
    }

    /// Count the values of `sample` falling in each bin
    ///
    /// Values outside `[min, max]` and non-finite values are not counted.
    pub fn count(&self, sample: &[f64]) -> Vec<usize> {
        let mut counts = vec![0; self.bin_count()];
        for &value in sample {
            if let Some(index) = self.bin_index(value) {
                counts[index] += 1;
            }
        }
        counts
    }

    /// Axis label for bin `index`, e.g. `"2.00 to 4.00"`
    pub fn label(&self, index: usize) -> Option<String> {
        self.bounds(index)
            .map(|(left, right)| format!("{left:.2} to {right:.2}"))
    }
}

impl fmt::Display for BinEdges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinEdges({} bins, [{:.3}, {:.3}])",
            self.bin_count(),
            self.min(),
            self.max()
        )
    }
}

/// The largest `f64` strictly less than the finite `value`
fn largest_below(value: f64) -> f64 {
    if value == 0.0 {
        -f64::from_bits(1)
    } else if value > 0.0 {
        f64::from_bits(value.to_bits() - 1)
    } else {
        f64::from_bits(value.to_bits() + 1)
    }
}

/// Minimum and maximum of the finite values in `sample`, in one pass
pub(crate) fn finite_min_max(sample: &[f64]) -> Result<(f64, f64)> {
    if sample.is_empty() {
        return Err(Error::empty_sample());
    }

    let (min, max) = sample
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return Err(Error::non_finite_sample(sample.len()));
    }
    Ok((min, max))
}
