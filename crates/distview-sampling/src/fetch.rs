//! Core-side contract for externally fetched samples
//!
//! Transport lives outside this crate. What lives here is what every fetch
//! path has to agree on before a sample reaches a session: the request is
//! parameterized by a point limit, readings outside a sanity range are
//! dropped, and the number of readings that passed is reported.

use crate::Result;
use distview_core::{Error, Sample};
use serde::Deserialize;
use tracing::debug;

/// Half-open `[lower, upper)` range a reading must fall in to be kept
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SanityRange {
    lower: f64,
    upper: f64,
}

impl Default for SanityRange {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 200.0,
        }
    }
}

impl SanityRange {
    pub fn new(lower: f64, upper: f64) -> distview_core::Result<Self> {
        if lower.is_nan() || upper.is_nan() || lower >= upper {
            return Err(Error::InvalidArgument(format!(
                "sanity range [{lower}, {upper}) is empty"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// Smallest accepted reading
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Exclusive upper bound
    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value < self.upper
    }
}

/// A filtered external sample and its bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedSample {
    /// The readings that passed the sanity filter
    pub sample: Sample,
    /// How many readings passed (the "points received" counter)
    pub received: usize,
    /// How many readings were dropped
    pub discarded: usize,
}

/// Keep the readings inside `range`
///
/// Fails with `InvalidSample` when no reading survives; the caller must then
/// not load anything.
pub fn filter_readings<I>(readings: I, range: SanityRange) -> distview_core::Result<FetchedSample>
where
    I: IntoIterator<Item = f64>,
{
    let mut kept = Vec::new();
    let mut discarded = 0;
    for value in readings {
        if range.contains(value) {
            kept.push(value);
        } else {
            discarded += 1;
        }
    }

    if kept.is_empty() {
        return Err(Error::InvalidSample(format!(
            "none of {discarded} readings fell within [{}, {})",
            range.lower(),
            range.upper()
        )));
    }

    debug!(received = kept.len(), discarded, "filtered external readings");
    let received = kept.len();
    Ok(FetchedSample {
        sample: Sample::new(kept)?,
        received,
        discarded,
    })
}

#[derive(Debug, Deserialize)]
struct ResultsPayload {
    #[serde(default)]
    results: Vec<Reading>,
}

#[derive(Debug, Deserialize)]
struct Reading {
    #[serde(default)]
    value: serde_json::Value,
}

/// Decode a `{"results": [{"value": <number>}, ...]}` payload and filter it
///
/// Entries without a numeric `value` count as discarded.
pub fn parse_results(body: &str, range: SanityRange) -> Result<FetchedSample> {
    let payload: ResultsPayload = serde_json::from_str(body)?;
    let total = payload.results.len();
    let numeric: Vec<f64> = payload
        .results
        .into_iter()
        .filter_map(|reading| reading.value.as_f64())
        .collect();
    let non_numeric = total - numeric.len();

    let mut fetched = filter_readings(numeric, range)?;
    fetched.discarded += non_numeric;
    Ok(fetched)
}

/// A request for at most `limit` readings from `endpoint`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    endpoint: String,
    limit: usize,
}

impl FetchRequest {
    pub fn new(endpoint: impl Into<String>, limit: usize) -> distview_core::Result<Self> {
        if limit == 0 {
            return Err(Error::zero_count("point limit"));
        }
        Ok(Self {
            endpoint: endpoint.into(),
            limit,
        })
    }

    /// The same request with a different limit
    pub fn with_limit(&self, limit: usize) -> distview_core::Result<Self> {
        Self::new(self.endpoint.clone(), limit)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Endpoint with the `limit` query parameter appended
    pub fn url(&self) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{separator}limit={}", self.endpoint, self.limit)
    }
}
