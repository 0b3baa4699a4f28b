//! Equal-width binning and cumulative aggregation for one-dimensional samples
//!
//! This crate is the computational core behind a histogram view: it
//! partitions a sample's range into contiguous bins, counts membership and
//! derives running totals for a cumulative overlay. All functions are pure and
//! can be called from any thread.
//!
//! # Key Features
//!
//! - **One edge routine**: [`BinEdges`] builds the edges for both the histogram
//!   and the cumulative view, so the two curves always agree
//! - **Reproducible tie-break**: a value on an edge belongs to the bin on its
//!   left; the sample minimum belongs to bin 0
//! - **Degenerate ranges**: a sample with a single distinct value yields a valid
//!   histogram with everything in bin 0
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use distview_histogram::{compute_histogram, compute_cumulative};
//!
//! let data: Vec<f64> = (0..10).map(f64::from).collect();
//! let histogram = compute_histogram(&data, 5).unwrap();
//! assert_eq!(histogram.counts(), &[2, 2, 2, 2, 2]);
//!
//! let cumulative = compute_cumulative(histogram.counts()).unwrap();
//! assert_eq!(cumulative.values(), &[2, 4, 6, 8, 10]);
//!
//! for bin in histogram.bins() {
//!     println!("  {}: count={}", bin.label(), bin.count);
//! }
//! ```
//!
//! ## Degenerate Range
//!
//! ```rust
//! use distview_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let histogram = FixedWidthBuilder::new(4).build(&[5.0, 5.0, 5.0]).unwrap();
//! assert!(histogram.is_degenerate());
//! assert_eq!(histogram.counts(), &[3, 0, 0, 0]);
//! ```

pub mod builders;
pub mod cumulative;
pub mod edges;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::FixedWidthBuilder;
pub use cumulative::{compute_cumulative, cumulative_from_sample, CumulativeCounts};
pub use edges::BinEdges;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

/// Bin `sample` into `bin_count` equal-width bins
///
/// Fails with `InvalidArgument` for a zero bin count and with `InvalidSample`
/// for an empty or all non-finite sample.
pub fn compute_histogram(sample: &[f64], bin_count: usize) -> Result<Histogram> {
    FixedWidthBuilder::new(bin_count).build(sample)
}

pub use distview_core::{Error, Result};
