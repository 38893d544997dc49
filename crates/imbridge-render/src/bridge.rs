//! Frame-end ordering between the host's draw batch and the GUI overlay.
//!
//! The GUI overlay has to rasterize after everything the host drew this
//! frame. Flushing a [`HostBatch`] is the only way to obtain a
//! [`FlushedBatch`], and [`GuiRenderer::render`] requires one, so an overlay
//! can not be submitted ahead of the host's own content.

use crate::error::RenderResult;

/// Proof that the host's pending draw batch was flushed.
#[derive(Debug)]
pub struct FlushedBatch {
    _private: (),
}

/// The host's buffered draw commands for the current frame.
pub trait HostBatch {
    /// Submits everything recorded so far.
    fn flush_pending(&mut self) -> RenderResult<()>;
}

/// Flushes `batch` and returns the token the GUI renderer needs.
pub fn flush<B: HostBatch + ?Sized>(batch: &mut B) -> RenderResult<FlushedBatch> {
    batch.flush_pending()?;
    Ok(FlushedBatch { _private: () })
}

/// The GUI library's end-of-frame step.
pub trait GuiFrame {
    type DrawData: ?Sized;

    /// Ends the GUI frame and builds its draw data.
    fn render(&mut self) -> &Self::DrawData;
}

/// Rasterizes GUI draw data on top of a flushed host batch.
pub trait GuiRenderer<B: ?Sized> {
    type DrawData: ?Sized;

    fn render(
        &mut self,
        draw_data: &Self::DrawData,
        batch: &mut B,
        flushed: &FlushedBatch,
    ) -> RenderResult<()>;
}

/// Runs the end-of-frame procedure once per host loop iteration.
#[derive(Debug, Default)]
pub struct RenderBridge {
    frames: u64,
}

impl RenderBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames finished so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Flushes the host batch, builds the GUI draw data and renders it.
    ///
    /// Nothing reaches the GUI or the renderer if the flush fails.
    pub fn finish_frame<B, G, R>(
        &mut self,
        batch: &mut B,
        gui: &mut G,
        renderer: &mut R,
    ) -> RenderResult<()>
    where
        B: HostBatch + ?Sized,
        G: GuiFrame + ?Sized,
        R: GuiRenderer<B, DrawData = G::DrawData> + ?Sized,
    {
        let flushed = flush(batch)?;
        let draw_data = gui.render();
        renderer.render(draw_data, batch, &flushed)?;
        self.frames += 1;
        Ok(())
    }
}
