//! Static host-to-GUI key tables.

use std::collections::HashMap;

use crate::keys::{GamepadAxis, GamepadButton, GuiKey, GuiModifier, HostKey};

/// Host keyboard keys and the GUI keys they drive.
const STANDARD_KEYS: &[(HostKey, GuiKey)] = &[
    (HostKey::Apostrophe, GuiKey::Apostrophe),
    (HostKey::Comma, GuiKey::Comma),
    (HostKey::Minus, GuiKey::Minus),
    (HostKey::Period, GuiKey::Period),
    (HostKey::Slash, GuiKey::Slash),
    (HostKey::Zero, GuiKey::Key0),
    (HostKey::One, GuiKey::Key1),
    (HostKey::Two, GuiKey::Key2),
    (HostKey::Three, GuiKey::Key3),
    (HostKey::Four, GuiKey::Key4),
    (HostKey::Five, GuiKey::Key5),
    (HostKey::Six, GuiKey::Key6),
    (HostKey::Seven, GuiKey::Key7),
    (HostKey::Eight, GuiKey::Key8),
    (HostKey::Nine, GuiKey::Key9),
    (HostKey::Semicolon, GuiKey::Semicolon),
    (HostKey::Equal, GuiKey::Equal),
    (HostKey::A, GuiKey::A),
    (HostKey::B, GuiKey::B),
    (HostKey::C, GuiKey::C),
    (HostKey::D, GuiKey::D),
    (HostKey::E, GuiKey::E),
    (HostKey::F, GuiKey::F),
    (HostKey::G, GuiKey::G),
    (HostKey::H, GuiKey::H),
    (HostKey::I, GuiKey::I),
    (HostKey::J, GuiKey::J),
    (HostKey::K, GuiKey::K),
    (HostKey::L, GuiKey::L),
    (HostKey::M, GuiKey::M),
    (HostKey::N, GuiKey::N),
    (HostKey::O, GuiKey::O),
    (HostKey::P, GuiKey::P),
    (HostKey::Q, GuiKey::Q),
    (HostKey::R, GuiKey::R),
    (HostKey::S, GuiKey::S),
    (HostKey::T, GuiKey::T),
    (HostKey::U, GuiKey::U),
    (HostKey::V, GuiKey::V),
    (HostKey::W, GuiKey::W),
    (HostKey::X, GuiKey::X),
    (HostKey::Y, GuiKey::Y),
    (HostKey::Z, GuiKey::Z),
    (HostKey::Space, GuiKey::Space),
    (HostKey::Escape, GuiKey::Escape),
    (HostKey::Enter, GuiKey::Enter),
    (HostKey::Tab, GuiKey::Tab),
    (HostKey::Backspace, GuiKey::Backspace),
    (HostKey::Insert, GuiKey::Insert),
    (HostKey::Delete, GuiKey::Delete),
    (HostKey::Right, GuiKey::RightArrow),
    (HostKey::Left, GuiKey::LeftArrow),
    (HostKey::Down, GuiKey::DownArrow),
    (HostKey::Up, GuiKey::UpArrow),
    (HostKey::PageUp, GuiKey::PageUp),
    (HostKey::PageDown, GuiKey::PageDown),
    (HostKey::Home, GuiKey::Home),
    (HostKey::End, GuiKey::End),
    (HostKey::CapsLock, GuiKey::CapsLock),
    (HostKey::ScrollLock, GuiKey::ScrollLock),
    (HostKey::NumLock, GuiKey::NumLock),
    (HostKey::PrintScreen, GuiKey::PrintScreen),
    (HostKey::Pause, GuiKey::Pause),
    (HostKey::F1, GuiKey::F1),
    (HostKey::F2, GuiKey::F2),
    (HostKey::F3, GuiKey::F3),
    (HostKey::F4, GuiKey::F4),
    (HostKey::F5, GuiKey::F5),
    (HostKey::F6, GuiKey::F6),
    (HostKey::F7, GuiKey::F7),
    (HostKey::F8, GuiKey::F8),
    (HostKey::F9, GuiKey::F9),
    (HostKey::F10, GuiKey::F10),
    (HostKey::F11, GuiKey::F11),
    (HostKey::F12, GuiKey::F12),
    (HostKey::LeftShift, GuiKey::LeftShift),
    (HostKey::LeftControl, GuiKey::LeftCtrl),
    (HostKey::LeftAlt, GuiKey::LeftAlt),
    (HostKey::LeftSuper, GuiKey::LeftSuper),
    (HostKey::RightShift, GuiKey::RightShift),
    (HostKey::RightControl, GuiKey::RightCtrl),
    (HostKey::RightAlt, GuiKey::RightAlt),
    (HostKey::RightSuper, GuiKey::RightSuper),
    (HostKey::Menu, GuiKey::Menu),
    (HostKey::LeftBracket, GuiKey::LeftBracket),
    (HostKey::Backslash, GuiKey::Backslash),
    (HostKey::RightBracket, GuiKey::RightBracket),
    (HostKey::Grave, GuiKey::GraveAccent),
    (HostKey::Kp0, GuiKey::Keypad0),
    (HostKey::Kp1, GuiKey::Keypad1),
    (HostKey::Kp2, GuiKey::Keypad2),
    (HostKey::Kp3, GuiKey::Keypad3),
    (HostKey::Kp4, GuiKey::Keypad4),
    (HostKey::Kp5, GuiKey::Keypad5),
    (HostKey::Kp6, GuiKey::Keypad6),
    (HostKey::Kp7, GuiKey::Keypad7),
    (HostKey::Kp8, GuiKey::Keypad8),
    (HostKey::Kp9, GuiKey::Keypad9),
    (HostKey::KpDecimal, GuiKey::KeypadDecimal),
    (HostKey::KpDivide, GuiKey::KeypadDivide),
    (HostKey::KpMultiply, GuiKey::KeypadMultiply),
    (HostKey::KpSubtract, GuiKey::KeypadSubtract),
    (HostKey::KpAdd, GuiKey::KeypadAdd),
    (HostKey::KpEnter, GuiKey::KeypadEnter),
    (HostKey::KpEqual, GuiKey::KeypadEqual),
];

const STANDARD_MODIFIERS: &[(HostKey, GuiModifier)] = &[
    (HostKey::LeftControl, GuiModifier::Ctrl),
    (HostKey::RightControl, GuiModifier::Ctrl),
    (HostKey::LeftShift, GuiModifier::Shift),
    (HostKey::RightShift, GuiModifier::Shift),
    (HostKey::LeftAlt, GuiModifier::Alt),
    (HostKey::RightAlt, GuiModifier::Alt),
    (HostKey::LeftSuper, GuiModifier::Super),
    (HostKey::RightSuper, GuiModifier::Super),
];

/// Gamepad buttons and the navigation keys they drive.
pub const GAMEPAD_BUTTONS: &[(GamepadButton, GuiKey)] = &[
    (GamepadButton::LeftFaceUp, GuiKey::GamepadDpadUp),
    (GamepadButton::LeftFaceRight, GuiKey::GamepadDpadRight),
    (GamepadButton::LeftFaceDown, GuiKey::GamepadDpadDown),
    (GamepadButton::LeftFaceLeft, GuiKey::GamepadDpadLeft),
    (GamepadButton::RightFaceUp, GuiKey::GamepadFaceUp),
    (GamepadButton::RightFaceRight, GuiKey::GamepadFaceRight),
    (GamepadButton::RightFaceDown, GuiKey::GamepadFaceDown),
    (GamepadButton::RightFaceLeft, GuiKey::GamepadFaceLeft),
    (GamepadButton::LeftTrigger1, GuiKey::GamepadL1),
    (GamepadButton::LeftTrigger2, GuiKey::GamepadL2),
    (GamepadButton::RightTrigger1, GuiKey::GamepadR1),
    (GamepadButton::RightTrigger2, GuiKey::GamepadR2),
    (GamepadButton::LeftThumb, GuiKey::GamepadL3),
    (GamepadButton::RightThumb, GuiKey::GamepadR3),
    (GamepadButton::MiddleLeft, GuiKey::GamepadBack),
    (GamepadButton::MiddleRight, GuiKey::GamepadStart),
];

/// Gamepad axes and the (negative, positive) stick keys they drive.
pub const GAMEPAD_AXES: &[(GamepadAxis, GuiKey, GuiKey)] = &[
    (
        GamepadAxis::LeftX,
        GuiKey::GamepadLStickLeft,
        GuiKey::GamepadLStickRight,
    ),
    (
        GamepadAxis::LeftY,
        GuiKey::GamepadLStickUp,
        GuiKey::GamepadLStickDown,
    ),
    (
        GamepadAxis::RightX,
        GuiKey::GamepadRStickLeft,
        GuiKey::GamepadRStickRight,
    ),
    (
        GamepadAxis::RightY,
        GuiKey::GamepadRStickUp,
        GuiKey::GamepadRStickDown,
    ),
];

/// Mapping from host keys to GUI keys.
///
/// Host keys are unique; inserting a key that is already bound replaces the
/// earlier binding in place. Scanning order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    entries: Vec<(HostKey, GuiKey)>,
    index: HashMap<HostKey, usize>,
}

impl KeyMap {
    /// Creates an empty key map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full keyboard table.
    pub fn standard() -> Self {
        STANDARD_KEYS.iter().copied().collect()
    }

    /// Binds `host` to `gui`, returning the previous binding if there was one.
    pub fn insert(&mut self, host: HostKey, gui: GuiKey) -> Option<GuiKey> {
        if let Some(&slot) = self.index.get(&host) {
            let previous = self.entries[slot].1;
            self.entries[slot].1 = gui;
            return Some(previous);
        }
        self.index.insert(host, self.entries.len());
        self.entries.push((host, gui));
        None
    }

    /// Looks up the GUI key bound to `host`.
    pub fn get(&self, host: HostKey) -> Option<GuiKey> {
        self.index.get(&host).map(|&slot| self.entries[slot].1)
    }

    pub fn contains(&self, host: HostKey) -> bool {
        self.index.contains_key(&host)
    }

    /// Iterates bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (HostKey, GuiKey)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(HostKey, GuiKey)> for KeyMap {
    fn from_iter<T: IntoIterator<Item = (HostKey, GuiKey)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (host, gui) in iter {
            map.insert(host, gui);
        }
        map
    }
}

/// Mapping from host keys to the GUI modifier they hold down.
#[derive(Debug, Clone, Default)]
pub struct ModifierMap {
    entries: HashMap<HostKey, GuiModifier>,
}

impl ModifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left and right control, shift, alt and super.
    pub fn standard() -> Self {
        STANDARD_MODIFIERS.iter().copied().collect()
    }

    pub fn insert(&mut self, host: HostKey, modifier: GuiModifier) -> Option<GuiModifier> {
        self.entries.insert(host, modifier)
    }

    pub fn get(&self, host: HostKey) -> Option<GuiModifier> {
        self.entries.get(&host).copied()
    }

    /// Host keys bound to `modifier`.
    pub fn keys_for(&self, modifier: GuiModifier) -> impl Iterator<Item = HostKey> + '_ {
        self.entries
            .iter()
            .filter(move |(_, m)| **m == modifier)
            .map(|(host, _)| *host)
    }

    /// Whether any host key bound to `modifier` satisfies `is_down`.
    pub fn is_down(&self, modifier: GuiModifier, is_down: impl Fn(HostKey) -> bool) -> bool {
        self.keys_for(modifier).any(is_down)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(HostKey, GuiModifier)> for ModifierMap {
    fn from_iter<T: IntoIterator<Item = (HostKey, GuiModifier)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
