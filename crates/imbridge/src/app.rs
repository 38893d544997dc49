//! winit application runner driving the host loop and the GUI layer.

use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::Vec2;
use imbridge_core::{BridgeError, Clipboard, GuiIo, HostKey, KeyAction, Options, Result};
use imbridge_render::{GpuContext, GuiFrame, GuiRenderer, RenderBridge, WgpuBatch};
use pollster::FutureExt;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::backend::{Backend, BackendCapabilities};
use crate::host::{keycodes, SystemClipboard, WinitInput};

/// A GUI library wired to the runner: its input side, its frame and its renderer.
pub trait GuiLayer: Sized {
    /// Receives input events and builds draw data at frame end.
    type Frame: GuiIo + GuiFrame;
    /// Rasterizes the frame's draw data over the host batch.
    type Renderer: for<'a> GuiRenderer<
        WgpuBatch<'a>,
        DrawData = <Self::Frame as GuiFrame>::DrawData,
    >;
    /// What the host app builds its widgets with.
    type Ui<'a>
    where
        Self: 'a;

    fn create(gpu: &GpuContext, window: &Window) -> Result<Self>;

    /// Advertises backend capabilities and installs the clipboard.
    fn configure(&mut self, _capabilities: BackendCapabilities, _clipboard: Box<dyn Clipboard>) {}

    fn io(&mut self) -> &mut Self::Frame;

    /// Starts the GUI frame.
    fn new_frame(&mut self) -> Self::Ui<'_>;

    fn split(&mut self) -> (&mut Self::Frame, &mut Self::Renderer);
}

/// The host program run inside [`run_app`].
pub trait HostApp<L: GuiLayer> {
    /// Per-frame logic, after the GUI received this frame's input.
    fn update(&mut self, _input: &WinitInput) {}

    /// Host drawing. Everything recorded here lands below the GUI overlay.
    fn draw(&mut self, _batch: &mut WgpuBatch<'_>) {}

    /// Builds this frame's GUI.
    fn gui(&mut self, ui: L::Ui<'_>);

    fn should_close(&self) -> bool {
        false
    }
}

/// Time between frames for a frame rate cap. `None` when uncapped.
pub fn frame_interval(target_fps: u32) -> Option<Duration> {
    (target_fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(target_fps)))
}

fn clear_color(rgba: [f64; 4]) -> wgpu::Color {
    wgpu::Color {
        r: rgba[0],
        g: rgba[1],
        b: rgba[2],
        a: rgba[3],
    }
}

struct Runner<L: GuiLayer, A> {
    options: Options,
    app: A,
    backend: Backend,
    input: WinitInput,
    bridge: RenderBridge,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    layer: Option<L>,
    error: Option<BridgeError>,
    next_frame: Instant,
}

impl<L: GuiLayer, A: HostApp<L>> Runner<L, A> {
    fn new(options: Options, app: A) -> Self {
        Self {
            backend: Backend::new(options.clone()),
            options,
            app,
            input: WinitInput::new(),
            bridge: RenderBridge::new(),
            window: None,
            gpu: None,
            layer: None,
            error: None,
            next_frame: Instant::now(),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_options = &self.options.window;
        let attributes = Window::default_attributes()
            .with_title(window_options.title.clone())
            .with_inner_size(LogicalSize::new(window_options.width, window_options.height))
            .with_resizable(window_options.resizable);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(|e| BridgeError::WindowCreation(e.to_string()))?,
        );

        let gpu = GpuContext::new(window.clone()).block_on()?;
        let mut layer = L::create(&gpu, &window)?;
        layer.configure(
            self.backend.capabilities(false),
            Box::new(SystemClipboard::new()),
        );

        self.input
            .set_window_metrics(window.inner_size(), window.scale_factor());
        log::info!(
            "window '{}' created at {}x{}",
            window_options.title,
            window_options.width,
            window_options.height
        );

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(gpu);
        self.layer = Some(layer);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: BridgeError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self) -> Result<()> {
        let (Some(gpu), Some(layer)) = (self.gpu.as_mut(), self.layer.as_mut()) else {
            return Ok(());
        };

        self.input.begin_frame(Instant::now());
        if let (Some(target), Some(window)) =
            (self.backend.pointer_warp(layer.io()), self.window.as_ref())
        {
            match window.set_cursor_position(LogicalPosition::new(target.x, target.y)) {
                Ok(()) => self.input.warp_cursor(target),
                Err(e) => log::warn!("pointer warp unsupported: {e}"),
            }
        }
        self.backend.process_inputs(&mut self.input, layer.io());
        self.app.update(&self.input);

        let Some(mut batch) = gpu.begin_frame(clear_color(self.options.window.clear_color))?
        else {
            self.input.end_frame();
            return Ok(());
        };

        self.app.draw(&mut batch);
        self.app.gui(layer.new_frame());

        let (frame, renderer) = layer.split();
        self.bridge.finish_frame(&mut batch, frame, renderer)?;
        batch.present();

        self.input.end_frame();
        Ok(())
    }

    /// Forwards keys and text to the GUI as they arrive, for callback input mode.
    fn forward_callbacks(&mut self, event: &WindowEvent) {
        let Some(layer) = self.layer.as_mut() else {
            return;
        };
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let Some((key, action)) = keycodes::key_event(event) {
                self.backend.key_event(key, action, layer.io());
            }
            if event.state == ElementState::Pressed {
                for c in event.text.iter().flat_map(|text| text.chars()) {
                    self.backend.char_event(c, layer.io());
                }
            }
        }
    }

    fn wants_exit(&mut self, event: &WindowEvent) -> bool {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return false;
        };
        let escape = keycodes::key_event(event) == Some((HostKey::Escape, KeyAction::Press));
        // Escape belongs to a focused text field, not the host
        let captured = self
            .layer
            .as_mut()
            .is_some_and(|layer| layer.io().want_capture_keyboard());
        escape && !captured
    }
}

impl<L: GuiLayer, A: HostApp<L>> ApplicationHandler for Runner<L, A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.handle_window_event(&event);
        if self.options.input.mode == imbridge_core::InputMode::Callbacks {
            self.forward_callbacks(&event);
        }
        if self.wants_exit(&event) {
            log::info!("escape pressed, exiting");
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size.width, size.height);
                }
                if let (Some(window), Some(layer)) = (&self.window, self.layer.as_mut()) {
                    let logical = size.to_logical::<f32>(window.scale_factor());
                    #[allow(clippy::cast_precision_loss)]
                    let physical = Vec2::new(size.width as f32, size.height as f32);
                    self.backend.on_resize(
                        Vec2::new(logical.width, logical.height),
                        physical,
                        layer.io(),
                    );
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                    return;
                }
                if self.app.should_close() {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        match frame_interval(self.options.window.target_fps) {
            None => {
                event_loop.set_control_flow(ControlFlow::Poll);
                window.request_redraw();
            }
            Some(interval) => {
                let now = Instant::now();
                if now >= self.next_frame {
                    self.next_frame = now + interval;
                    window.request_redraw();
                }
                event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
            }
        }
    }
}

/// Opens the host window and runs `app` until it closes.
///
/// Logging is initialised from `RUST_LOG` unless a logger is already installed.
pub fn run_app<L, A>(options: Options, app: A) -> Result<()>
where
    L: GuiLayer,
    A: HostApp<L>,
{
    let _ = env_logger::try_init();
    options.validate()?;

    let event_loop = EventLoop::new().map_err(|e| BridgeError::EventLoop(e.to_string()))?;
    let mut runner = Runner::<L, A>::new(options, app);
    event_loop
        .run_app(&mut runner)
        .map_err(|e| BridgeError::EventLoop(e.to_string()))?;

    log::info!("{} frames rendered", runner.bridge.frames());
    runner.backend.shutdown();
    match runner.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
