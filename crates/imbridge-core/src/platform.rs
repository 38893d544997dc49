//! Seams to the host game loop and the GUI library.

use glam::Vec2;

use crate::display::DisplayMetrics;
use crate::event::GuiEvent;
use crate::keys::{GamepadAxis, GamepadButton, HostKey, MouseButton};

/// Polled, frame-based input state of the host game loop.
///
/// "Pressed" and "released" are true only on the frame the transition
/// happened; "down" holds for as long as the key is held.
pub trait InputSource {
    fn is_key_pressed(&self, key: HostKey) -> bool;
    fn is_key_released(&self, key: HostKey) -> bool;
    fn is_key_down(&self, key: HostKey) -> bool;

    /// Pointer position in window coordinates.
    fn mouse_position(&self) -> Vec2;
    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool;
    fn is_mouse_button_released(&self, button: MouseButton) -> bool;
    fn is_mouse_button_down(&self, button: MouseButton) -> bool;
    /// Wheel movement accumulated this frame.
    fn mouse_wheel_move(&self) -> Vec2;

    fn is_window_focused(&self) -> bool;
    /// Window size in logical pixels.
    fn window_size(&self) -> Vec2;
    /// Framebuffer size in physical pixels.
    fn framebuffer_size(&self) -> Vec2;
    /// Seconds taken by the previous frame.
    fn frame_time(&self) -> f32;

    /// Pops the next character typed this frame.
    fn next_char(&mut self) -> Option<char>;

    fn is_gamepad_available(&self, _gamepad: u32) -> bool {
        false
    }

    fn is_gamepad_button_pressed(&self, _gamepad: u32, _button: GamepadButton) -> bool {
        false
    }

    fn is_gamepad_button_released(&self, _gamepad: u32, _button: GamepadButton) -> bool {
        false
    }

    fn gamepad_axis(&self, _gamepad: u32, _axis: GamepadAxis) -> f32 {
        0.0
    }
}

/// System clipboard access for the GUI.
pub trait Clipboard {
    fn get_text(&mut self) -> Option<String>;
    fn set_text(&mut self, text: &str);
}

/// The GUI library's input side.
pub trait GuiIo {
    /// Appends an event to the GUI input queue.
    fn add_event(&mut self, event: GuiEvent);

    /// The GUI wants to warp the pointer and owns its position this frame.
    fn want_set_mouse_pos(&self) -> bool;

    /// Where the GUI wants the pointer moved, in logical pixels.
    fn mouse_warp_target(&self) -> Option<Vec2> {
        None
    }

    /// A GUI widget has keyboard focus (text entry).
    fn want_capture_keyboard(&self) -> bool;

    /// Gamepad navigation is enabled in the GUI configuration.
    fn nav_gamepad_enabled(&self) -> bool {
        false
    }

    fn set_display_metrics(&mut self, metrics: &DisplayMetrics);
}

/// The GUI flags that steer translation for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoRequests {
    pub want_set_mouse_pos: bool,
    pub want_capture_keyboard: bool,
    pub nav_gamepad: bool,
}

impl IoRequests {
    pub fn from_io<G: GuiIo + ?Sized>(io: &G) -> Self {
        Self {
            want_set_mouse_pos: io.want_set_mouse_pos(),
            want_capture_keyboard: io.want_capture_keyboard(),
            nav_gamepad: io.nav_gamepad_enabled(),
        }
    }
}

/// A [`GuiIo`] that records events instead of feeding a GUI.
///
/// Useful for headless runs and for inspecting what a frame produced.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pub events: Vec<GuiEvent>,
    pub requests: IoRequests,
    pub metrics: Option<DisplayMetrics>,
    /// Reported as the warp target while `requests.want_set_mouse_pos` is set.
    pub warp_target: Vec2,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the recorded events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<GuiEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GuiIo for EventQueue {
    fn add_event(&mut self, event: GuiEvent) {
        self.events.push(event);
    }

    fn want_set_mouse_pos(&self) -> bool {
        self.requests.want_set_mouse_pos
    }

    fn mouse_warp_target(&self) -> Option<Vec2> {
        self.requests.want_set_mouse_pos.then_some(self.warp_target)
    }

    fn want_capture_keyboard(&self) -> bool {
        self.requests.want_capture_keyboard
    }

    fn nav_gamepad_enabled(&self) -> bool {
        self.requests.nav_gamepad
    }

    fn set_display_metrics(&mut self, metrics: &DisplayMetrics) {
        self.metrics = Some(*metrics);
    }
}
