use treegrid::errors::Result;
use treegrid::widget::{RenderBackend, RenderSnapshot};

/// A fake render backend that records every snapshot it is asked to draw.
///
/// Tests can assert on draw counts and on the visible nodes/links/axis of
/// any pass without a real drawing surface.
#[derive(Debug, Default)]
pub struct RecordingRenderBackend {
    pub drawn: Vec<RenderSnapshot>,
}

impl RecordingRenderBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_count(&self) -> usize {
        self.drawn.len()
    }

    pub fn last(&self) -> Option<&RenderSnapshot> {
        self.drawn.last()
    }
}

impl RenderBackend for RecordingRenderBackend {
    fn draw(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        self.drawn.push(snapshot.clone());
        Ok(())
    }
}
