//! The distribution session
//!
//! A [`DistributionSession`] owns the current sample, the bin count and the
//! cumulative flag. Every change recomputes the derived views in full before
//! anything is committed, so a failed load or an out-of-range parameter leaves
//! the last good views in place and the renderer never sees a half-updated
//! state.

use crate::render::{NullRenderer, Renderer};
use distview_core::{Result, Sample, SessionConfig};
use distview_histogram::{
    compute_cumulative, BinEdges, CumulativeCounts, FixedWidthBuilder, Histogram,
    HistogramBuilder,
};
use distview_sampling::{Family, FetchedSample, SampleGenerator};
use std::fmt;
use tracing::{debug, instrument, warn};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No sample loaded yet
    Empty,
    /// A sample is loaded and its views are current
    Ready,
}

/// Where the current sample came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOrigin {
    /// Drawn by the synthetic generator
    Synthetic(Family),
    /// Fetched from an external source; `received` readings passed the sanity filter
    External { received: usize },
    /// Handed in directly by the caller
    Provided,
}

impl SampleOrigin {
    /// Presentation hint for renderers
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }
}

impl fmt::Display for SampleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synthetic(family) => write!(f, "synthetic ({family})"),
            Self::External { received } => write!(f, "external ({received} received)"),
            Self::Provided => f.write_str("provided"),
        }
    }
}

/// Loaded sample plus everything derived from it
#[derive(Debug, Clone)]
struct Views {
    sample: Sample,
    origin: SampleOrigin,
    histogram: Histogram,
    cumulative: Option<CumulativeCounts>,
}

/// Single-owner state behind a histogram view
///
/// Mutating operations take `&mut self`; sharing a session across threads
/// needs external serialization such as a `Mutex`.
pub struct DistributionSession<R: Renderer = NullRenderer> {
    config: SessionConfig,
    renderer: R,
    bin_count: usize,
    point_count: usize,
    cumulative_enabled: bool,
    pending_bin_count: Option<usize>,
    pending_point_count: Option<usize>,
    views: Option<Views>,
}

impl DistributionSession<NullRenderer> {
    /// Create a session that renders nothing
    pub fn headless(config: SessionConfig) -> Result<Self> {
        Self::new(config, NullRenderer)
    }
}

impl<R: Renderer> DistributionSession<R> {
    /// Create an empty session
    ///
    /// Fails with `InvalidArgument` when the configuration is inconsistent.
    pub fn new(config: SessionConfig, renderer: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            bin_count: config.default_bin_count,
            point_count: config.default_point_count,
            cumulative_enabled: config.cumulative_default,
            config,
            renderer,
            pending_bin_count: None,
            pending_point_count: None,
            views: None,
        })
    }

    /// Replace the sample with `values`
    ///
    /// An empty or all non-finite input fails with `InvalidSample`; the
    /// previous sample and views are kept.
    #[instrument(skip(self, values), fields(len = values.len()))]
    pub fn load_sample(&mut self, values: Vec<f64>) -> Result<()> {
        let sample = Sample::new(values).map_err(|e| {
            warn!(error = %e, "rejected sample, keeping previous views");
            e
        })?;
        self.load_sample_from(sample, SampleOrigin::Provided)
    }

    /// Replace the sample with an already validated one
    #[instrument(skip(self, sample, origin), fields(len = sample.len(), %origin))]
    pub fn load_sample_from(&mut self, sample: Sample, origin: SampleOrigin) -> Result<()> {
        let (histogram, cumulative) = self.compute_views(&sample, self.bin_count)?;
        debug!(
            bin_count = self.bin_count,
            degenerate = histogram.is_degenerate(),
            "loaded sample"
        );
        self.views = Some(Views {
            sample,
            origin,
            histogram,
            cumulative,
        });
        self.publish()
    }

    /// Draw `synthetic_sample_size` values from `family` and load them
    pub fn load_synthetic(&mut self, generator: &SampleGenerator, family: Family) -> Result<()> {
        let sample = generator
            .generate(self.config.synthetic_sample_size, family)
            .map_err(|e| {
                warn!(error = %e, %family, "synthetic generation failed");
                e
            })?;
        self.load_sample_from(sample, SampleOrigin::Synthetic(family))
    }

    /// Load a filtered external sample
    pub fn load_fetched(&mut self, fetched: FetchedSample) -> Result<()> {
        let origin = SampleOrigin::External {
            received: fetched.received,
        };
        self.load_sample_from(fetched.sample, origin)
    }

    /// Change the bin count and recompute
    ///
    /// Fails with `InvalidArgument` outside the configured range, leaving the
    /// current bin count and views untouched.
    #[instrument(skip(self))]
    pub fn set_bin_count(&mut self, n: usize) -> Result<()> {
        self.config.check_bin_count(n).map_err(|e| {
            warn!(error = %e, "rejected bin count");
            e
        })?;
        self.pending_bin_count = None;

        let Some(views) = &self.views else {
            self.bin_count = n;
            return Ok(());
        };

        let (histogram, cumulative) = self.compute_views(&views.sample, n)?;
        self.bin_count = n;
        if let Some(views) = self.views.as_mut() {
            views.histogram = histogram;
            views.cumulative = cumulative;
        }
        self.publish()
    }

    /// Record a tentative bin count without recomputing
    ///
    /// Returns the label to show while the value is being chosen.
    pub fn preview_bin_count(&mut self, n: usize) -> String {
        self.pending_bin_count = Some(n);
        bin_count_label(n)
    }

    /// Apply the last previewed bin count, if any
    pub fn commit_bin_count(&mut self) -> Result<()> {
        match self.pending_bin_count.take() {
            Some(n) => self.set_bin_count(n),
            None => Ok(()),
        }
    }

    /// Turn the cumulative view on or off
    ///
    /// Setting the flag to its current value does nothing.
    #[instrument(skip(self))]
    pub fn set_cumulative_enabled(&mut self, enabled: bool) -> Result<()> {
        if enabled == self.cumulative_enabled {
            return Ok(());
        }

        let Some(views) = self.views.as_mut() else {
            self.cumulative_enabled = enabled;
            return Ok(());
        };

        if enabled {
            let cumulative = compute_cumulative(views.histogram.counts())?;
            self.cumulative_enabled = true;
            let cumulative = views.cumulative.insert(cumulative);
            if !self.renderer.is_enabled() {
                return Ok(());
            }
            self.renderer.render_cumulative(cumulative)
        } else {
            self.cumulative_enabled = false;
            views.cumulative = None;
            self.clear_overlay()
        }
    }

    /// Change the number of points requested from an external source
    ///
    /// Returns `true` when the current sample is external, meaning the caller
    /// should fetch again with the new limit.
    #[instrument(skip(self))]
    pub fn set_point_count(&mut self, n: usize) -> Result<bool> {
        self.config.check_point_count(n)?;
        self.pending_point_count = None;
        self.point_count = n;
        Ok(self.is_external())
    }

    /// Record a tentative point count, returning its label
    pub fn preview_point_count(&mut self, n: usize) -> String {
        self.pending_point_count = Some(n);
        point_count_label(n)
    }

    /// Apply the last previewed point count, if any
    ///
    /// Returns `true` when a re-fetch is due; see [`Self::set_point_count`].
    pub fn commit_point_count(&mut self) -> Result<bool> {
        match self.pending_point_count.take() {
            Some(n) => self.set_point_count(n),
            None => Ok(false),
        }
    }

    /// Restore the configured default bin count, point count and cumulative flag
    ///
    /// A loaded sample is kept and its views are recomputed.
    #[instrument(skip(self))]
    pub fn reset_to_defaults(&mut self) -> Result<()> {
        let Some(sample) = self.views.as_ref().map(|v| v.sample.clone()) else {
            self.apply_defaults();
            return Ok(());
        };

        let (histogram, cumulative) = compute_views(
            &sample,
            self.config.default_bin_count,
            self.config.cumulative_default,
        )?;
        let overlay_dropped = self.apply_defaults();
        if let Some(views) = self.views.as_mut() {
            views.histogram = histogram;
            views.cumulative = cumulative;
        }

        if overlay_dropped {
            self.clear_overlay()?;
        }
        self.publish()
    }

    /// Restore defaults and replace the sample with a synthetic normal one
    ///
    /// This is the way back from a failed fetch: the stale external sample is
    /// discarded, so a later point-count commit no longer asks for a re-fetch.
    /// If generation fails nothing changes.
    #[instrument(skip(self, generator))]
    pub fn recover_after_failed_fetch(&mut self, generator: &SampleGenerator) -> Result<()> {
        let family = Family::Normal;
        let sample = generator
            .generate(self.config.synthetic_sample_size, family)
            .map_err(|e| {
                warn!(error = %e, "recovery sample could not be generated");
                e
            })?;
        let (histogram, cumulative) = compute_views(
            &sample,
            self.config.default_bin_count,
            self.config.cumulative_default,
        )?;

        let overlay_dropped = self.apply_defaults();
        self.views = Some(Views {
            sample,
            origin: SampleOrigin::Synthetic(family),
            histogram,
            cumulative,
        });

        if overlay_dropped {
            self.clear_overlay()?;
        }
        self.publish()
    }

    pub fn state(&self) -> SessionState {
        if self.views.is_some() {
            SessionState::Ready
        } else {
            SessionState::Empty
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// Label for the committed bin count, `"NBins = 20"`
    pub fn bin_count_label(&self) -> String {
        bin_count_label(self.bin_count)
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Label for the committed point count, `"MAXP=100"`
    pub fn point_count_label(&self) -> String {
        point_count_label(self.point_count)
    }

    pub fn is_cumulative_enabled(&self) -> bool {
        self.cumulative_enabled
    }

    pub fn sample(&self) -> Option<&Sample> {
        self.views.as_ref().map(|v| &v.sample)
    }

    pub fn origin(&self) -> Option<SampleOrigin> {
        self.views.as_ref().map(|v| v.origin)
    }

    /// Whether the current sample came from an external source
    pub fn is_external(&self) -> bool {
        self.origin().is_some_and(|o| o.is_external())
    }

    /// `"PtsRecv=<n>"` for fetched samples, `"PtsRecv=---"` otherwise
    pub fn received_label(&self) -> String {
        match self.origin() {
            Some(SampleOrigin::External { received }) => format!("PtsRecv={received}"),
            _ => "PtsRecv=---".to_string(),
        }
    }

    pub fn histogram(&self) -> Option<&Histogram> {
        self.views.as_ref().map(|v| &v.histogram)
    }

    pub fn bin_edges(&self) -> Option<&BinEdges> {
        self.histogram().map(Histogram::edges)
    }

    pub fn bin_counts(&self) -> Option<&[usize]> {
        self.histogram().map(Histogram::counts)
    }

    /// Running totals, present only while the cumulative view is enabled
    pub fn cumulative(&self) -> Option<&CumulativeCounts> {
        self.views.as_ref().and_then(|v| v.cumulative.as_ref())
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn compute_views(
        &self,
        sample: &Sample,
        bin_count: usize,
    ) -> Result<(Histogram, Option<CumulativeCounts>)> {
        compute_views(sample, bin_count, self.cumulative_enabled).map_err(|e| {
            warn!(error = %e, bin_count, "recompute failed, keeping previous views");
            e
        })
    }

    /// Reset the parameters to the configured defaults, leaving views alone
    ///
    /// Returns whether a visible cumulative overlay was switched off.
    fn apply_defaults(&mut self) -> bool {
        let was_cumulative = self.cumulative_enabled;
        self.bin_count = self.config.default_bin_count;
        self.point_count = self.config.default_point_count;
        self.cumulative_enabled = self.config.cumulative_default;
        self.pending_bin_count = None;
        self.pending_point_count = None;
        debug!(
            bin_count = self.bin_count,
            cumulative_enabled = self.cumulative_enabled,
            "restored defaults"
        );
        was_cumulative && !self.cumulative_enabled && self.views.is_some()
    }

    fn clear_overlay(&mut self) -> Result<()> {
        if !self.renderer.is_enabled() {
            return Ok(());
        }
        self.renderer.clear_cumulative()
    }

    fn publish(&mut self) -> Result<()> {
        let Some(views) = self.views.as_ref() else {
            return Ok(());
        };
        if !self.renderer.is_enabled() {
            return Ok(());
        }
        self.renderer
            .render_histogram(&views.histogram, views.origin.is_external())?;
        if let Some(cumulative) = &views.cumulative {
            self.renderer.render_cumulative(cumulative)?;
        }
        Ok(())
    }
}

impl<R: Renderer> fmt::Debug for DistributionSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistributionSession")
            .field("state", &self.state())
            .field("bin_count", &self.bin_count)
            .field("point_count", &self.point_count)
            .field("cumulative_enabled", &self.cumulative_enabled)
            .field("origin", &self.origin())
            .field("sample_len", &self.sample().map(Sample::len))
            .finish()
    }
}

fn compute_views(
    sample: &Sample,
    bin_count: usize,
    cumulative_enabled: bool,
) -> Result<(Histogram, Option<CumulativeCounts>)> {
    let histogram = FixedWidthBuilder::new(bin_count).build(sample)?;
    let cumulative = if cumulative_enabled {
        Some(compute_cumulative(histogram.counts())?)
    } else {
        None
    };
    Ok((histogram, cumulative))
}

fn bin_count_label(n: usize) -> String {
    format!("NBins = {n}")
}

fn point_count_label(n: usize) -> String {
    format!("MAXP={n}")
}
