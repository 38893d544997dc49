//! Events fed into the GUI event queue.

use glam::Vec2;

use crate::keys::{GuiKey, MouseButton};

/// A single entry for the GUI input queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuiEvent {
    /// The host window gained or lost focus.
    Focus(bool),
    /// A key (or `Mod*` pseudo-key) changed state.
    Key { key: GuiKey, down: bool },
    /// An analog key value, used for gamepad sticks.
    KeyAnalog { key: GuiKey, down: bool, value: f32 },
    /// Absolute pointer position in window coordinates.
    MousePos(Vec2),
    MouseButton { button: MouseButton, down: bool },
    /// Wheel movement this frame (x = horizontal, y = vertical).
    MouseWheel(Vec2),
    /// A typed character.
    Char(char),
}

impl GuiEvent {
    pub fn key_down(key: GuiKey) -> Self {
        Self::Key { key, down: true }
    }

    pub fn key_up(key: GuiKey) -> Self {
        Self::Key { key, down: false }
    }
}
