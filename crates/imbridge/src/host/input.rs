//! Frame-based input state collected from winit window events.

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use glam::Vec2;
use imbridge_core::{HostKey, InputSource, MouseButton};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::keycodes;

/// Pixels per wheel line for touchpads reporting pixel deltas.
const PIXELS_PER_LINE: f32 = 10.0;

/// Polled input state of the host window.
///
/// winit delivers input as events; this accumulates them between two
/// [`WinitInput::end_frame`] calls so the translator can poll pressed,
/// released and held state the way a frame-based game loop exposes it.
#[derive(Debug)]
pub struct WinitInput {
    keys_down: HashSet<HostKey>,
    keys_pressed: HashSet<HostKey>,
    keys_released: HashSet<HostKey>,
    buttons_down: [bool; 5],
    buttons_pressed: [bool; 5],
    buttons_released: [bool; 5],
    mouse_pos: Vec2,
    wheel: Vec2,
    focused: bool,
    chars: VecDeque<char>,
    window_size: Vec2,
    framebuffer_size: Vec2,
    scale_factor: f64,
    frame_time: f32,
    last_frame: Option<Instant>,
}

impl Default for WinitInput {
    fn default() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
            buttons_down: [false; 5],
            buttons_pressed: [false; 5],
            buttons_released: [false; 5],
            mouse_pos: Vec2::ZERO,
            wheel: Vec2::ZERO,
            focused: true,
            chars: VecDeque::new(),
            window_size: Vec2::ZERO,
            framebuffer_size: Vec2::ZERO,
            scale_factor: 1.0,
            frame_time: 0.0,
            last_frame: None,
        }
    }
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one window event. Events the input state does not track are ignored.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = keycodes::host_key(code) {
                        self.on_key(key, event.state == ElementState::Pressed, event.repeat);
                    }
                }
                if event.state == ElementState::Pressed {
                    if let Some(text) = &event.text {
                        self.on_text(text);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = keycodes::mouse_button(*button) {
                    self.on_mouse_button(button, *state == ElementState::Pressed);
                }
            }
            WindowEvent::CursorMoved { position, .. } => self.on_cursor_moved(*position),
            WindowEvent::MouseWheel { delta, .. } => self.on_wheel(*delta),
            WindowEvent::Focused(focused) => self.on_focus(*focused),
            WindowEvent::Resized(size) => {
                self.set_window_metrics(*size, self.scale_factor);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
            }
            _ => {}
        }
    }

    /// Records a key transition. Repeats leave the polled state untouched.
    pub fn on_key(&mut self, key: HostKey, pressed: bool, repeat: bool) {
        if pressed {
            if repeat {
                return;
            }
            if self.keys_down.insert(key) {
                self.keys_pressed.insert(key);
            }
        } else if self.keys_down.remove(&key) {
            self.keys_released.insert(key);
        }
    }

    pub fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        let i = button.index();
        if pressed {
            if !self.buttons_down[i] {
                self.buttons_pressed[i] = true;
            }
        } else if self.buttons_down[i] {
            self.buttons_released[i] = true;
        }
        self.buttons_down[i] = pressed;
    }

    /// Stores the pointer position, converted to logical pixels.
    pub fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let logical = position.to_logical::<f32>(self.scale_factor);
        self.mouse_pos = Vec2::new(logical.x, logical.y);
    }

    /// Records a pointer move made by the host itself, in logical pixels.
    pub fn warp_cursor(&mut self, pos: Vec2) {
        self.mouse_pos = pos;
    }

    /// Accumulates wheel movement in lines.
    pub fn on_wheel(&mut self, delta: MouseScrollDelta) {
        self.wheel += match delta {
            MouseScrollDelta::LineDelta(x, y) => Vec2::new(x, y),
            MouseScrollDelta::PixelDelta(pos) => {
                let pos = pos.cast::<f32>();
                Vec2::new(pos.x, pos.y) / PIXELS_PER_LINE
            }
        };
    }

    /// Tracks window focus. Keys and buttons held while focus is lost are released.
    pub fn on_focus(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            let held: Vec<HostKey> = self.keys_down.drain().collect();
            self.keys_released.extend(held);
            for button in MouseButton::ALL {
                self.on_mouse_button(button, false);
            }
        }
    }

    /// Queues typed text. Control characters are dropped.
    pub fn on_text(&mut self, text: &str) {
        self.chars.extend(text.chars().filter(|c| !c.is_control()));
    }

    /// Updates the window size and DPI scale.
    pub fn set_window_metrics(&mut self, physical: PhysicalSize<u32>, scale_factor: f64) {
        self.scale_factor = scale_factor;
        let logical = physical.to_logical::<f32>(scale_factor);
        #[allow(clippy::cast_precision_loss)]
        let framebuffer = Vec2::new(physical.width as f32, physical.height as f32);
        self.framebuffer_size = framebuffer;
        self.window_size = Vec2::new(logical.width, logical.height);
    }

    /// Starts a frame at `now`, measuring the time since the previous one.
    pub fn begin_frame(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            self.frame_time = now.saturating_duration_since(last).as_secs_f32();
        }
        self.last_frame = Some(now);
    }

    /// Clears per-frame edges, wheel movement and unread characters.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed = [false; 5];
        self.buttons_released = [false; 5];
        self.wheel = Vec2::ZERO;
        self.chars.clear();
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

impl InputSource for WinitInput {
    fn is_key_pressed(&self, key: HostKey) -> bool {
        self.keys_pressed.contains(&key)
    }

    fn is_key_released(&self, key: HostKey) -> bool {
        self.keys_released.contains(&key)
    }

    fn is_key_down(&self, key: HostKey) -> bool {
        self.keys_down.contains(&key)
    }

    fn mouse_position(&self) -> Vec2 {
        self.mouse_pos
    }

    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed[button.index()]
    }

    fn is_mouse_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released[button.index()]
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down[button.index()]
    }

    fn mouse_wheel_move(&self) -> Vec2 {
        self.wheel
    }

    fn is_window_focused(&self) -> bool {
        self.focused
    }

    fn window_size(&self) -> Vec2 {
        self.window_size
    }

    fn framebuffer_size(&self) -> Vec2 {
        self.framebuffer_size
    }

    fn frame_time(&self) -> f32 {
        self.frame_time
    }

    fn next_char(&mut self) -> Option<char> {
        self.chars.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_press_hold_release() {
        let mut input = WinitInput::new();
        input.on_key(HostKey::A, true, false);
        assert!(input.is_key_pressed(HostKey::A));
        assert!(input.is_key_down(HostKey::A));
        input.end_frame();

        input.on_key(HostKey::A, true, true);
        assert!(!input.is_key_pressed(HostKey::A));
        assert!(input.is_key_down(HostKey::A));
        input.end_frame();

        input.on_key(HostKey::A, false, false);
        assert!(input.is_key_released(HostKey::A));
        assert!(!input.is_key_down(HostKey::A));
    }

    #[test]
    fn test_tap_within_one_frame() {
        let mut input = WinitInput::new();
        input.on_key(HostKey::Space, true, false);
        input.on_key(HostKey::Space, false, false);
        assert!(input.is_key_pressed(HostKey::Space));
        assert!(input.is_key_released(HostKey::Space));
        assert!(!input.is_key_down(HostKey::Space));
    }

    #[test]
    fn test_focus_loss_releases_held_input() {
        let mut input = WinitInput::new();
        input.on_key(HostKey::LeftShift, true, false);
        input.on_mouse_button(MouseButton::Left, true);
        input.end_frame();

        input.on_focus(false);
        assert!(!input.is_window_focused());
        assert!(input.is_key_released(HostKey::LeftShift));
        assert!(!input.is_key_down(HostKey::LeftShift));
        assert!(input.is_mouse_button_released(MouseButton::Left));
    }

    #[test]
    fn test_wheel_accumulates_and_resets() {
        let mut input = WinitInput::new();
        input.on_wheel(MouseScrollDelta::LineDelta(0.0, 1.0));
        input.on_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(10.0, 20.0)));
        assert_eq!(input.mouse_wheel_move(), Vec2::new(1.0, 3.0));
        input.end_frame();
        assert_eq!(input.mouse_wheel_move(), Vec2::ZERO);
    }

    #[test]
    fn test_window_metrics_on_hidpi() {
        let mut input = WinitInput::new();
        input.set_window_metrics(PhysicalSize::new(1600, 900), 2.0);
        assert_eq!(input.framebuffer_size(), Vec2::new(1600.0, 900.0));
        assert_eq!(input.window_size(), Vec2::new(800.0, 450.0));

        input.on_cursor_moved(PhysicalPosition::new(200.0, 100.0));
        assert_eq!(input.mouse_position(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_warp_moves_polled_pointer() {
        let mut input = WinitInput::new();
        input.on_cursor_moved(PhysicalPosition::new(3.0, 4.0));
        input.warp_cursor(Vec2::new(50.0, 60.0));
        assert_eq!(input.mouse_position(), Vec2::new(50.0, 60.0));
    }

    #[test]
    fn test_text_drops_control_characters() {
        let mut input = WinitInput::new();
        input.on_text("a\u{8}é\r");
        assert_eq!(input.next_char(), Some('a'));
        assert_eq!(input.next_char(), Some('é'));
        assert_eq!(input.next_char(), None);
    }

    #[test]
    fn test_frame_time() {
        let mut input = WinitInput::new();
        let start = Instant::now();
        input.begin_frame(start);
        assert_eq!(input.frame_time(), 0.0);
        input.begin_frame(start + Duration::from_millis(16));
        assert!((input.frame_time() - 0.016).abs() < 1e-6);
    }
}
