//! Rendering interface for distribution sessions
//!
//! A session pushes freshly computed views to a [`Renderer`] after every
//! successful change. The trait carries no chart-library types, so a GUI, a
//! terminal printer or a test recorder can sit behind it.

use distview_core::Result;
use distview_histogram::{CumulativeCounts, Histogram};

/// Receiver of the views a session publishes
pub trait Renderer {
    /// Draw (or redraw) the histogram
    ///
    /// `external` is a presentation hint: the sample came from an external
    /// source rather than the synthetic generator.
    fn render_histogram(&mut self, histogram: &Histogram, external: bool) -> Result<()>;

    /// Draw (or redraw) the cumulative overlay
    fn render_cumulative(&mut self, cumulative: &CumulativeCounts) -> Result<()>;

    /// Remove the cumulative overlay
    fn clear_cumulative(&mut self) -> Result<()>;

    /// Check if this renderer draws anything
    fn is_enabled(&self) -> bool {
        true
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render_histogram(&mut self, histogram: &Histogram, external: bool) -> Result<()> {
        (**self).render_histogram(histogram, external)
    }

    fn render_cumulative(&mut self, cumulative: &CumulativeCounts) -> Result<()> {
        (**self).render_cumulative(cumulative)
    }

    fn clear_cumulative(&mut self) -> Result<()> {
        (**self).clear_cumulative()
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render_histogram(&mut self, histogram: &Histogram, external: bool) -> Result<()> {
        (**self).render_histogram(histogram, external)
    }

    fn render_cumulative(&mut self, cumulative: &CumulativeCounts) -> Result<()> {
        (**self).render_cumulative(cumulative)
    }

    fn clear_cumulative(&mut self) -> Result<()> {
        (**self).clear_cumulative()
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Null renderer that performs no operations
///
/// All methods are marked `#[inline(always)]` so a headless session pays
/// nothing for notifications.
#[derive(Default, Clone, Copy, Debug)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    #[inline(always)]
    fn render_histogram(&mut self, _: &Histogram, _: bool) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn render_cumulative(&mut self, _: &CumulativeCounts) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn clear_cumulative(&mut self) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}

/// One notification received by a [`RecordingRenderer`]
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Histogram {
        edges: Vec<f64>,
        counts: Vec<usize>,
        labels: Vec<String>,
        /// Upper end of the count axis
        max_count: usize,
        external: bool,
    },
    Cumulative {
        /// `(bin index, running total)` pairs
        points: Vec<(usize, usize)>,
        /// Upper end of the cumulative axis
        total: usize,
    },
    ClearCumulative,
}

/// Renderer that keeps every notification, in order
#[derive(Default, Clone, Debug)]
pub struct RecordingRenderer {
    frames: Vec<Frame>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames received so far
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recent frame
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Drop recorded frames
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Remove and return recorded frames
    pub fn take(&mut self) -> Vec<Frame> {
        std::mem::take(&mut self.frames)
    }
}

impl Renderer for RecordingRenderer {
    fn render_histogram(&mut self, histogram: &Histogram, external: bool) -> Result<()> {
        self.frames.push(Frame::Histogram {
            edges: histogram.edges().as_slice().to_vec(),
            counts: histogram.counts().to_vec(),
            labels: histogram.labels(),
            max_count: histogram.max_count(),
            external,
        });
        Ok(())
    }

    fn render_cumulative(&mut self, cumulative: &CumulativeCounts) -> Result<()> {
        self.frames.push(Frame::Cumulative {
            points: cumulative.points(),
            total: cumulative.total(),
        });
        Ok(())
    }

    fn clear_cumulative(&mut self) -> Result<()> {
        self.frames.push(Frame::ClearCumulative);
        Ok(())
    }
}
