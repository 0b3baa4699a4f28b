//! Stateful orchestration of histogram and cumulative views
//!
//! A [`DistributionSession`] holds the current sample, bin count and
//! cumulative flag. Loads and parameter changes recompute the views and push
//! them to a [`Renderer`]; a failure leaves the last good views in place.
//!
//! ```rust
//! use distview_core::SessionConfig;
//! use distview_sampling::{Family, SampleGenerator};
//! use distview_session::{DistributionSession, RecordingRenderer};
//!
//! let mut session =
//!     DistributionSession::new(SessionConfig::default(), RecordingRenderer::new()).unwrap();
//! session
//!     .load_synthetic(&SampleGenerator::new().with_seed(7), Family::Uniform)
//!     .unwrap();
//! session.set_cumulative_enabled(true).unwrap();
//!
//! assert_eq!(session.bin_counts().unwrap().len(), 20);
//! assert_eq!(session.cumulative().unwrap().total(), 10_000);
//! assert_eq!(session.renderer().frames().len(), 2);
//! ```

pub mod render;
pub mod session;

pub use render::{Frame, NullRenderer, RecordingRenderer, Renderer};
pub use session::{DistributionSession, SampleOrigin, SessionState};

pub use distview_core::{Error, Result, SessionConfig};
