//! Session configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Limits and defaults a distribution session is constructed with
///
/// Missing fields take their defaults when deserialized, so a partial JSON
/// object such as `{"max_bin_count": 50}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Smallest accepted bin count
    pub min_bin_count: usize,
    /// Largest accepted bin count
    pub max_bin_count: usize,
    /// Bin count used until the caller picks another
    pub default_bin_count: usize,
    /// Smallest number of points that may be requested from an external source
    pub min_point_count: usize,
    /// Largest number of points that may be requested from an external source
    pub max_point_count: usize,
    /// Number of points requested from an external source by default
    pub default_point_count: usize,
    /// Size of synthetically generated samples
    pub synthetic_sample_size: usize,
    /// Whether the cumulative view starts enabled
    pub cumulative_default: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_bin_count: 4,
            max_bin_count: 100,
            default_bin_count: 20,
            min_point_count: 1,
            max_point_count: 1000,
            default_point_count: 100,
            synthetic_sample_size: 10_000,
            cumulative_default: false,
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from JSON, filling in defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidArgument(format!("malformed session config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the limits are consistent with each other
    pub fn validate(&self) -> Result<()> {
        if self.min_bin_count == 0 {
            return Err(Error::zero_count("min_bin_count"));
        }
        if self.min_bin_count > self.max_bin_count {
            return Err(Error::InvalidArgument(format!(
                "min_bin_count {} exceeds max_bin_count {}",
                self.min_bin_count, self.max_bin_count
            )));
        }
        self.check_bin_count(self.default_bin_count)?;

        if self.min_point_count == 0 {
            return Err(Error::zero_count("min_point_count"));
        }
        if self.min_point_count > self.max_point_count {
            return Err(Error::InvalidArgument(format!(
                "min_point_count {} exceeds max_point_count {}",
                self.min_point_count, self.max_point_count
            )));
        }
        self.check_point_count(self.default_point_count)?;

        if self.synthetic_sample_size == 0 {
            return Err(Error::zero_count("synthetic_sample_size"));
        }
        Ok(())
    }

    /// Reject a bin count outside `[min_bin_count, max_bin_count]`
    pub fn check_bin_count(&self, n: usize) -> Result<()> {
        if (self.min_bin_count..=self.max_bin_count).contains(&n) {
            Ok(())
        } else {
            Err(Error::bin_count_out_of_range(
                n,
                self.min_bin_count,
                self.max_bin_count,
            ))
        }
    }

    /// Reject a point count outside `[min_point_count, max_point_count]`
    pub fn check_point_count(&self, n: usize) -> Result<()> {
        if (self.min_point_count..=self.max_point_count).contains(&n) {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "Point count {n} must be in [{}, {}]",
                self.min_point_count, self.max_point_count
            )))
        }
    }
}
