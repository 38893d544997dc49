//! A GUI layer that records the events it receives instead of drawing.
//!
//! Handy for checking what the host produces frame by frame without a GUI
//! library linked in.

use glam::Vec2;
use imbridge_core::{
    Clipboard, DisplayMetrics, EventQueue, GuiEvent, GuiIo, IoRequests, Result,
};
use imbridge_render::{FlushedBatch, GpuContext, GuiFrame, GuiRenderer, RenderResult};
use winit::window::Window;

use crate::app::GuiLayer;
use crate::backend::BackendCapabilities;

/// Collects one frame of GUI events.
#[derive(Debug, Default)]
pub struct RecordingFrame {
    queue: EventQueue,
    last_frame: Vec<GuiEvent>,
}

impl RecordingFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far this frame.
    pub fn events(&self) -> &[GuiEvent] {
        &self.queue.events
    }

    /// Events of the last finished frame.
    pub fn last_frame(&self) -> &[GuiEvent] {
        &self.last_frame
    }

    pub fn metrics(&self) -> Option<DisplayMetrics> {
        self.queue.metrics
    }

    /// Flags reported back to the translator, as a GUI would set them.
    pub fn requests_mut(&mut self) -> &mut IoRequests {
        &mut self.queue.requests
    }

    /// Asks the host to move the pointer to `pos`, as a GUI would.
    pub fn request_warp(&mut self, pos: Vec2) {
        self.queue.requests.want_set_mouse_pos = true;
        self.queue.warp_target = pos;
    }
}

impl GuiIo for RecordingFrame {
    fn add_event(&mut self, event: GuiEvent) {
        self.queue.add_event(event);
    }

    fn want_set_mouse_pos(&self) -> bool {
        self.queue.want_set_mouse_pos()
    }

    fn mouse_warp_target(&self) -> Option<Vec2> {
        self.queue.mouse_warp_target()
    }

    fn want_capture_keyboard(&self) -> bool {
        self.queue.want_capture_keyboard()
    }

    fn nav_gamepad_enabled(&self) -> bool {
        self.queue.nav_gamepad_enabled()
    }

    fn set_display_metrics(&mut self, metrics: &DisplayMetrics) {
        self.queue.set_display_metrics(metrics);
    }
}

impl GuiFrame for RecordingFrame {
    type DrawData = [GuiEvent];

    fn render(&mut self) -> &[GuiEvent] {
        self.last_frame = self.queue.drain();
        &self.last_frame
    }
}

/// Accepts any draw data and draws nothing.
#[derive(Debug, Default)]
pub struct NullRenderer {
    frames: u64,
}

impl NullRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<B: ?Sized> GuiRenderer<B> for NullRenderer {
    type DrawData = [GuiEvent];

    fn render(
        &mut self,
        draw_data: &[GuiEvent],
        _batch: &mut B,
        _flushed: &FlushedBatch,
    ) -> RenderResult<()> {
        log::trace!("frame {}: {} events", self.frames, draw_data.len());
        self.frames += 1;
        Ok(())
    }
}

/// [`GuiLayer`] pairing a [`RecordingFrame`] with a [`NullRenderer`].
#[derive(Default)]
pub struct RecordingGui {
    frame: RecordingFrame,
    renderer: NullRenderer,
    capabilities: Option<BackendCapabilities>,
    clipboard: Option<Box<dyn Clipboard>>,
}

impl RecordingGui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capabilities(&self) -> Option<BackendCapabilities> {
        self.capabilities
    }

    pub fn clipboard(&mut self) -> Option<&mut (dyn Clipboard + 'static)> {
        self.clipboard.as_deref_mut()
    }

    pub fn renderer(&self) -> &NullRenderer {
        &self.renderer
    }
}

impl GuiLayer for RecordingGui {
    type Frame = RecordingFrame;
    type Renderer = NullRenderer;
    type Ui<'a> = &'a mut RecordingFrame;

    fn create(_gpu: &GpuContext, _window: &Window) -> Result<Self> {
        Ok(Self::new())
    }

    fn configure(&mut self, capabilities: BackendCapabilities, clipboard: Box<dyn Clipboard>) {
        self.capabilities = Some(capabilities);
        self.clipboard = Some(clipboard);
    }

    fn io(&mut self) -> &mut RecordingFrame {
        &mut self.frame
    }

    fn new_frame(&mut self) -> &mut RecordingFrame {
        &mut self.frame
    }

    fn split(&mut self) -> (&mut RecordingFrame, &mut NullRenderer) {
        (&mut self.frame, &mut self.renderer)
    }
}
