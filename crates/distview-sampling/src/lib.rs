//! Sample sources for distribution views
//!
//! - [`SampleGenerator`] draws synthetic samples from a [`Family`], optionally
//!   seeded for reproducible tests
//! - [`fetch`] holds the checks an externally fetched sample passes before it
//!   is loaded: a [`SanityRange`] filter, payload decoding and request limits
//!
//! ```rust
//! use distview_sampling::{Family, SampleGenerator};
//!
//! let sample = SampleGenerator::new()
//!     .with_seed(42)
//!     .generate(1_000, Family::Normal)
//!     .unwrap();
//! assert_eq!(sample.len(), 1_000);
//! ```

pub mod error;
pub mod fetch;
pub mod generator;

pub use error::{Error, Result};
pub use fetch::{filter_readings, parse_results, FetchRequest, FetchedSample, SanityRange};
pub use generator::{Family, SampleGenerator};
