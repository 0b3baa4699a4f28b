//! Histogram binning and cumulative aggregation for one-dimensional samples
//!
//! This crate re-exports the distview workspace:
//!
//! - [`distview_core`]: errors, the validated [`Sample`] and [`SessionConfig`]
//! - [`distview_histogram`]: equal-width binning and running totals
//! - [`distview_sampling`]: synthetic generators and fetched-data filtering
//! - [`distview_session`]: the stateful session that drives a renderer
//!
//! ```rust
//! use distview::{compute_histogram, compute_cumulative};
//!
//! let histogram = compute_histogram(&[0.0, 1.0, 2.0, 3.0], 2).unwrap();
//! assert_eq!(histogram.counts(), &[2, 2]);
//! assert_eq!(compute_cumulative(histogram.counts()).unwrap().values(), &[2, 4]);
//! ```

pub use distview_core;
pub use distview_histogram;
pub use distview_sampling;
pub use distview_session;

pub use distview_core::{Error, Result, Sample, SessionConfig};
pub use distview_histogram::{
    compute_cumulative, compute_histogram, cumulative_from_sample, BinEdges, CumulativeCounts,
    FixedWidthBuilder, Histogram, HistogramBin, HistogramBuilder,
};
pub use distview_sampling::{Family, FetchedSample, SampleGenerator, SanityRange};
pub use distview_session::{
    DistributionSession, NullRenderer, RecordingRenderer, Renderer, SampleOrigin, SessionState,
};
