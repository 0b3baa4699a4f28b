//! Validated, immutable samples

use crate::{Error, Result};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

/// A fully materialized one-dimensional sample
///
/// A `Sample` is never empty and holds only finite values. It is shared by
/// reference count and never mutated after construction, so handing a clone to
/// a computation on another thread is free.
#[derive(Clone, PartialEq)]
pub struct Sample {
    values: Arc<[f64]>,
}

impl Sample {
    /// Validate `values` into a sample
    ///
    /// Non-finite values are dropped. Fails with `InvalidSample` when nothing
    /// finite is left.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::empty_sample());
        }

        let original_len = values.len();
        let finite: Vec<f64> = if values.iter().all(|v| v.is_finite()) {
            values
        } else {
            values.into_iter().filter(|v| v.is_finite()).collect()
        };

        if finite.is_empty() {
            return Err(Error::non_finite_sample(original_len));
        }
        if finite.len() < original_len {
            debug!(
                dropped = original_len - finite.len(),
                kept = finite.len(),
                "dropped non-finite values from sample"
            );
        }

        Ok(Self {
            values: finite.into(),
        })
    }

    /// Borrow the values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values (always at least one)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest and largest value, in one pass
    pub fn min_max(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

impl Deref for Sample {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Sample {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}

impl fmt::Debug for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = self.min_max();
        f.debug_struct("Sample")
            .field("len", &self.len())
            .field("min", &min)
            .field("max", &max)
            .finish()
    }
}
