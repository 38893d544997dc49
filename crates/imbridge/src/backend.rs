//! Per-frame input processing for one GUI context.

use glam::Vec2;
use imbridge_core::{
    DisplayMetrics, GuiIo, HostKey, InputMode, InputSource, InputTranslator, KeyAction, Options,
};

/// Capabilities the backend advertises to the GUI library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendCapabilities {
    /// The host honours pointer warp requests.
    pub has_set_mouse_pos: bool,
    /// The host can change the pointer shape.
    pub has_mouse_cursors: bool,
    /// The host reports gamepad state.
    pub has_gamepad: bool,
}

/// Owns the translator and feeds one GUI context each frame.
pub struct Backend {
    translator: InputTranslator,
    options: Options,
    last_metrics: Option<DisplayMetrics>,
}

impl Backend {
    pub fn new(options: Options) -> Self {
        let translator = InputTranslator::new(options.input.clone());
        log::info!(
            "GUI backend initialised ({} keys mapped, {:?} input)",
            translator.key_map().len(),
            options.input.mode
        );
        Self {
            translator,
            options,
            last_metrics: None,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn translator(&self) -> &InputTranslator {
        &self.translator
    }

    /// Display metrics sent with the most recent frame or resize.
    pub fn last_metrics(&self) -> Option<DisplayMetrics> {
        self.last_metrics
    }

    /// What this backend supports, given whether the host reports gamepads.
    ///
    /// Pointer warps are honoured through [`Backend::pointer_warp`]. The
    /// pointer shape stays with the OS.
    pub fn capabilities(&self, host_has_gamepad: bool) -> BackendCapabilities {
        BackendCapabilities {
            has_set_mouse_pos: true,
            has_mouse_cursors: false,
            has_gamepad: host_has_gamepad,
        }
    }

    /// Where the host should move the pointer before this frame's input is read.
    pub fn pointer_warp<G: GuiIo + ?Sized>(&self, io: &G) -> Option<Vec2> {
        if !io.want_set_mouse_pos() {
            return None;
        }
        io.mouse_warp_target()
    }

    /// Sends display metrics, then this frame's input events, to `io`.
    ///
    /// Returns the number of events queued.
    pub fn process_inputs<I, G>(&mut self, input: &mut I, io: &mut G) -> usize
    where
        I: InputSource,
        G: GuiIo + ?Sized,
    {
        let metrics = DisplayMetrics::compute(
            input.window_size(),
            input.framebuffer_size(),
            input.frame_time(),
            self.options.input.min_delta_time,
        );
        io.set_display_metrics(&metrics);
        self.last_metrics = Some(metrics);
        self.translator.process_frame(input, io)
    }

    /// Forwards a raw key action. Ignored unless running in callback mode.
    pub fn key_event<G: GuiIo + ?Sized>(&mut self, key: HostKey, action: KeyAction, io: &mut G) {
        if self.translator.mode() != InputMode::Callbacks {
            return;
        }
        for event in self.translator.key_event(key, action) {
            io.add_event(event);
        }
    }

    /// Forwards a typed character. Ignored unless running in callback mode.
    pub fn char_event<G: GuiIo + ?Sized>(&mut self, c: char, io: &mut G) {
        if self.translator.mode() != InputMode::Callbacks {
            return;
        }
        if let Some(event) = InputTranslator::char_event(c) {
            io.add_event(event);
        }
    }

    /// Updates the display size right away instead of waiting for the next frame.
    pub fn on_resize<G: GuiIo + ?Sized>(&mut self, logical: Vec2, physical: Vec2, io: &mut G) {
        let frame_time = self.last_metrics.map_or(0.0, |m| m.delta_time);
        let metrics = DisplayMetrics::compute(
            logical,
            physical,
            frame_time,
            self.options.input.min_delta_time,
        );
        log::debug!("display resized to {}x{}", logical.x, logical.y);
        io.set_display_metrics(&metrics);
        self.last_metrics = Some(metrics);
    }

    pub fn shutdown(self) {
        log::info!("GUI backend shut down");
    }
}
