//! Common test utilities for distview-session tests

#![allow(dead_code)]

use distview_core::{Error, Result, SessionConfig};
use distview_histogram::{CumulativeCounts, Histogram};
use distview_session::{DistributionSession, Frame, RecordingRenderer, Renderer};

/// Session with default limits that records every frame
pub fn recording_session() -> DistributionSession<RecordingRenderer> {
    DistributionSession::new(SessionConfig::default(), RecordingRenderer::new()).unwrap()
}

/// `[0, 1, ..., n - 1]`
pub fn integers(n: u32) -> Vec<f64> {
    (0..n).map(f64::from).collect()
}

/// Counts carried by the most recent histogram frame
pub fn last_histogram_counts(frames: &[Frame]) -> Option<Vec<usize>> {
    frames.iter().rev().find_map(|frame| match frame {
        Frame::Histogram { counts, .. } => Some(counts.clone()),
        _ => None,
    })
}

/// Renderer that fails on every call
#[derive(Debug, Default)]
pub struct FailingRenderer {
    pub calls: usize,
}

impl Renderer for FailingRenderer {
    fn render_histogram(&mut self, _: &Histogram, _: bool) -> Result<()> {
        self.calls += 1;
        Err(Error::Other(anyhow::anyhow!("display went away")))
    }

    fn render_cumulative(&mut self, _: &CumulativeCounts) -> Result<()> {
        self.calls += 1;
        Err(Error::Other(anyhow::anyhow!("display went away")))
    }

    fn clear_cumulative(&mut self) -> Result<()> {
        self.calls += 1;
        Err(Error::Other(anyhow::anyhow!("display went away")))
    }
}

/// Renderer that reports itself disabled but counts any call it receives
#[derive(Debug, Default)]
pub struct DisabledRenderer {
    pub calls: usize,
}

impl Renderer for DisabledRenderer {
    fn render_histogram(&mut self, _: &Histogram, _: bool) -> Result<()> {
        self.calls += 1;
        Ok(())
    }

    fn render_cumulative(&mut self, _: &CumulativeCounts) -> Result<()> {
        self.calls += 1;
        Ok(())
    }

    fn clear_cumulative(&mut self) -> Result<()> {
        self.calls += 1;
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
