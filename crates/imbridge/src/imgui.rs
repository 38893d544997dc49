//! Dear ImGui layer: context, input sink and wgpu renderer.

use dear_imgui_rs::{BackendFlags, ClipboardBackend, ConfigFlags, Context, DrawData, Key, Ui};
use dear_imgui_wgpu::{WgpuInitInfo, WgpuRenderer};
use glam::Vec2;
use imbridge_core::{
    BridgeError, Clipboard, DisplayMetrics, GuiEvent, GuiIo, GuiKey, MouseButton, Result,
};
use imbridge_render::{
    FlushedBatch, GpuContext, GuiFrame, GuiRenderer, RenderError, RenderResult, WgpuBatch,
};
use winit::window::Window;

use crate::app::GuiLayer;
use crate::backend::BackendCapabilities;

/// Maps a GUI key onto the Dear ImGui key of the same name.
pub fn imgui_key(key: GuiKey) -> Key {
    macro_rules! same_names {
        ($($name:ident),* $(,)?) => {
            match key {
                $(GuiKey::$name => Key::$name,)*
            }
        };
    }
    same_names!(
        Tab, LeftArrow, RightArrow, UpArrow, DownArrow, PageUp, PageDown, Home, End, Insert,
        Delete, Backspace, Space, Enter, Escape, LeftCtrl, LeftShift, LeftAlt, LeftSuper,
        RightCtrl, RightShift, RightAlt, RightSuper, Menu, Key0, Key1, Key2, Key3, Key4, Key5,
        Key6, Key7, Key8, Key9, A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V,
        W, X, Y, Z, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, Apostrophe, Comma, Minus,
        Period, Slash, Semicolon, Equal, LeftBracket, Backslash, RightBracket, GraveAccent,
        CapsLock, ScrollLock, NumLock, PrintScreen, Pause, Keypad0, Keypad1, Keypad2, Keypad3,
        Keypad4, Keypad5, Keypad6, Keypad7, Keypad8, Keypad9, KeypadDecimal, KeypadDivide,
        KeypadMultiply, KeypadSubtract, KeypadAdd, KeypadEnter, KeypadEqual, GamepadStart,
        GamepadBack, GamepadFaceLeft, GamepadFaceRight, GamepadFaceUp, GamepadFaceDown,
        GamepadDpadLeft, GamepadDpadRight, GamepadDpadUp, GamepadDpadDown, GamepadL1, GamepadR1,
        GamepadL2, GamepadR2, GamepadL3, GamepadR3, GamepadLStickLeft, GamepadLStickRight,
        GamepadLStickUp, GamepadLStickDown, GamepadRStickLeft, GamepadRStickRight,
        GamepadRStickUp, GamepadRStickDown, ModCtrl, ModShift, ModAlt, ModSuper,
    )
}

fn imgui_button(button: MouseButton) -> dear_imgui_rs::MouseButton {
    match button {
        MouseButton::Left => dear_imgui_rs::MouseButton::Left,
        MouseButton::Right => dear_imgui_rs::MouseButton::Right,
        MouseButton::Middle => dear_imgui_rs::MouseButton::Middle,
        MouseButton::Forward => dear_imgui_rs::MouseButton::Extra1,
        MouseButton::Back => dear_imgui_rs::MouseButton::Extra2,
    }
}

/// Adapts the host clipboard to Dear ImGui's clipboard hooks.
struct ClipboardBridge(Box<dyn Clipboard>);

impl ClipboardBackend for ClipboardBridge {
    fn get(&mut self) -> Option<String> {
        self.0.get_text()
    }

    fn set(&mut self, value: &str) {
        self.0.set_text(value);
    }
}

/// The Dear ImGui context as an input sink and frame source.
pub struct ImguiFrame {
    ctx: Context,
}

impl ImguiFrame {
    pub fn context(&mut self) -> &mut Context {
        &mut self.ctx
    }
}

impl GuiIo for ImguiFrame {
    fn add_event(&mut self, event: GuiEvent) {
        let io = self.ctx.io_mut();
        match event {
            GuiEvent::Focus(focused) => io.add_focus_event(focused),
            GuiEvent::Key { key, down } => io.add_key_event(imgui_key(key), down),
            GuiEvent::KeyAnalog { key, down, value } => {
                io.add_key_analog_event(imgui_key(key), down, value);
            }
            GuiEvent::MousePos(pos) => io.add_mouse_pos_event(pos.to_array()),
            GuiEvent::MouseButton { button, down } => {
                io.add_mouse_button_event(imgui_button(button), down);
            }
            GuiEvent::MouseWheel(wheel) => io.add_mouse_wheel_event(wheel.to_array()),
            GuiEvent::Char(c) => io.add_input_character(c),
        }
    }

    fn want_set_mouse_pos(&self) -> bool {
        self.ctx.io().want_set_mouse_pos()
    }

    fn mouse_warp_target(&self) -> Option<Vec2> {
        let io = self.ctx.io();
        io.want_set_mouse_pos().then(|| Vec2::from(io.mouse_pos()))
    }

    fn want_capture_keyboard(&self) -> bool {
        self.ctx.io().want_capture_keyboard()
    }

    fn nav_gamepad_enabled(&self) -> bool {
        self.ctx
            .io()
            .config_flags()
            .contains(ConfigFlags::NAV_ENABLE_GAMEPAD)
    }

    fn set_display_metrics(&mut self, metrics: &DisplayMetrics) {
        let io = self.ctx.io_mut();
        io.set_display_size(metrics.display_size.to_array());
        io.set_display_framebuffer_scale(metrics.framebuffer_scale.to_array());
        io.set_delta_time(metrics.delta_time);
    }
}

impl GuiFrame for ImguiFrame {
    type DrawData = DrawData;

    fn render(&mut self) -> &DrawData {
        self.ctx.render()
    }
}

/// Rasterizes Dear ImGui draw data into the overlay pass.
pub struct ImguiRenderer {
    inner: WgpuRenderer,
}

impl<'a> GuiRenderer<WgpuBatch<'a>> for ImguiRenderer {
    type DrawData = DrawData;

    fn render(
        &mut self,
        draw_data: &DrawData,
        batch: &mut WgpuBatch<'a>,
        flushed: &FlushedBatch,
    ) -> RenderResult<()> {
        let mut pass = batch.overlay_pass(flushed);
        self.inner
            .render_draw_data(draw_data, &mut pass)
            .map_err(|e| RenderError::GuiRenderer(e.to_string()))
    }
}

/// Dear ImGui wired to the winit host and the shared GPU context.
pub struct ImguiLayer {
    frame: ImguiFrame,
    renderer: ImguiRenderer,
}

impl GuiLayer for ImguiLayer {
    type Frame = ImguiFrame;
    type Renderer = ImguiRenderer;
    type Ui<'a> = &'a mut Ui;

    fn create(gpu: &GpuContext, _window: &Window) -> Result<Self> {
        let mut ctx = Context::try_create().map_err(|e| BridgeError::GuiInit(e.to_string()))?;

        let init = WgpuInitInfo::new(gpu.device.clone(), gpu.queue.clone(), gpu.format());
        let inner =
            WgpuRenderer::new(init, &mut ctx).map_err(|e| BridgeError::GuiInit(e.to_string()))?;
        log::info!("Dear ImGui layer ready ({:?})", gpu.format());

        Ok(Self {
            frame: ImguiFrame { ctx },
            renderer: ImguiRenderer { inner },
        })
    }

    fn configure(&mut self, capabilities: BackendCapabilities, clipboard: Box<dyn Clipboard>) {
        let mut flags = BackendFlags::empty();
        if capabilities.has_set_mouse_pos {
            flags |= BackendFlags::HAS_SET_MOUSE_POS;
        }
        if capabilities.has_mouse_cursors {
            flags |= BackendFlags::HAS_MOUSE_CURSORS;
        }
        if capabilities.has_gamepad {
            flags |= BackendFlags::HAS_GAMEPAD;
        }
        self.frame.ctx.io_mut().set_backend_flags(flags);
        self.frame
            .ctx
            .set_clipboard_backend(ClipboardBridge(clipboard));
    }

    fn io(&mut self) -> &mut ImguiFrame {
        &mut self.frame
    }

    fn new_frame(&mut self) -> &mut Ui {
        self.frame.ctx.frame()
    }

    fn split(&mut self) -> (&mut ImguiFrame, &mut ImguiRenderer) {
        (&mut self.frame, &mut self.renderer)
    }
}
