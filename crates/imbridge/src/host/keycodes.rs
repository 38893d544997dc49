//! winit key and button codes to host identifiers.

use imbridge_core::{HostKey, KeyAction, MouseButton};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Maps a physical winit key to a host key. Keys the host does not track map to `None`.
pub fn host_key(code: KeyCode) -> Option<HostKey> {
    let key = match code {
        KeyCode::Quote => HostKey::Apostrophe,
        KeyCode::Comma => HostKey::Comma,
        KeyCode::Minus => HostKey::Minus,
        KeyCode::Period => HostKey::Period,
        KeyCode::Slash => HostKey::Slash,
        KeyCode::Digit0 => HostKey::Zero,
        KeyCode::Digit1 => HostKey::One,
        KeyCode::Digit2 => HostKey::Two,
        KeyCode::Digit3 => HostKey::Three,
        KeyCode::Digit4 => HostKey::Four,
        KeyCode::Digit5 => HostKey::Five,
        KeyCode::Digit6 => HostKey::Six,
        KeyCode::Digit7 => HostKey::Seven,
        KeyCode::Digit8 => HostKey::Eight,
        KeyCode::Digit9 => HostKey::Nine,
        KeyCode::Semicolon => HostKey::Semicolon,
        KeyCode::Equal => HostKey::Equal,
        KeyCode::KeyA => HostKey::A,
        KeyCode::KeyB => HostKey::B,
        KeyCode::KeyC => HostKey::C,
        KeyCode::KeyD => HostKey::D,
        KeyCode::KeyE => HostKey::E,
        KeyCode::KeyF => HostKey::F,
        KeyCode::KeyG => HostKey::G,
        KeyCode::KeyH => HostKey::H,
        KeyCode::KeyI => HostKey::I,
        KeyCode::KeyJ => HostKey::J,
        KeyCode::KeyK => HostKey::K,
        KeyCode::KeyL => HostKey::L,
        KeyCode::KeyM => HostKey::M,
        KeyCode::KeyN => HostKey::N,
        KeyCode::KeyO => HostKey::O,
        KeyCode::KeyP => HostKey::P,
        KeyCode::KeyQ => HostKey::Q,
        KeyCode::KeyR => HostKey::R,
        KeyCode::KeyS => HostKey::S,
        KeyCode::KeyT => HostKey::T,
        KeyCode::KeyU => HostKey::U,
        KeyCode::KeyV => HostKey::V,
        KeyCode::KeyW => HostKey::W,
        KeyCode::KeyX => HostKey::X,
        KeyCode::KeyY => HostKey::Y,
        KeyCode::KeyZ => HostKey::Z,
        KeyCode::BracketLeft => HostKey::LeftBracket,
        KeyCode::Backslash => HostKey::Backslash,
        KeyCode::BracketRight => HostKey::RightBracket,
        KeyCode::Backquote => HostKey::Grave,
        KeyCode::Space => HostKey::Space,
        KeyCode::Escape => HostKey::Escape,
        KeyCode::Enter => HostKey::Enter,
        KeyCode::Tab => HostKey::Tab,
        KeyCode::Backspace => HostKey::Backspace,
        KeyCode::Insert => HostKey::Insert,
        KeyCode::Delete => HostKey::Delete,
        KeyCode::ArrowRight => HostKey::Right,
        KeyCode::ArrowLeft => HostKey::Left,
        KeyCode::ArrowDown => HostKey::Down,
        KeyCode::ArrowUp => HostKey::Up,
        KeyCode::PageUp => HostKey::PageUp,
        KeyCode::PageDown => HostKey::PageDown,
        KeyCode::Home => HostKey::Home,
        KeyCode::End => HostKey::End,
        KeyCode::CapsLock => HostKey::CapsLock,
        KeyCode::ScrollLock => HostKey::ScrollLock,
        KeyCode::NumLock => HostKey::NumLock,
        KeyCode::PrintScreen => HostKey::PrintScreen,
        KeyCode::Pause => HostKey::Pause,
        KeyCode::F1 => HostKey::F1,
        KeyCode::F2 => HostKey::F2,
        KeyCode::F3 => HostKey::F3,
        KeyCode::F4 => HostKey::F4,
        KeyCode::F5 => HostKey::F5,
        KeyCode::F6 => HostKey::F6,
        KeyCode::F7 => HostKey::F7,
        KeyCode::F8 => HostKey::F8,
        KeyCode::F9 => HostKey::F9,
        KeyCode::F10 => HostKey::F10,
        KeyCode::F11 => HostKey::F11,
        KeyCode::F12 => HostKey::F12,
        KeyCode::ShiftLeft => HostKey::LeftShift,
        KeyCode::ControlLeft => HostKey::LeftControl,
        KeyCode::AltLeft => HostKey::LeftAlt,
        KeyCode::SuperLeft => HostKey::LeftSuper,
        KeyCode::ShiftRight => HostKey::RightShift,
        KeyCode::ControlRight => HostKey::RightControl,
        KeyCode::AltRight => HostKey::RightAlt,
        KeyCode::SuperRight => HostKey::RightSuper,
        KeyCode::ContextMenu => HostKey::Menu,
        KeyCode::Numpad0 => HostKey::Kp0,
        KeyCode::Numpad1 => HostKey::Kp1,
        KeyCode::Numpad2 => HostKey::Kp2,
        KeyCode::Numpad3 => HostKey::Kp3,
        KeyCode::Numpad4 => HostKey::Kp4,
        KeyCode::Numpad5 => HostKey::Kp5,
        KeyCode::Numpad6 => HostKey::Kp6,
        KeyCode::Numpad7 => HostKey::Kp7,
        KeyCode::Numpad8 => HostKey::Kp8,
        KeyCode::Numpad9 => HostKey::Kp9,
        KeyCode::NumpadDecimal => HostKey::KpDecimal,
        KeyCode::NumpadDivide => HostKey::KpDivide,
        KeyCode::NumpadMultiply => HostKey::KpMultiply,
        KeyCode::NumpadSubtract => HostKey::KpSubtract,
        KeyCode::NumpadAdd => HostKey::KpAdd,
        KeyCode::NumpadEnter => HostKey::KpEnter,
        KeyCode::NumpadEqual => HostKey::KpEqual,
        _ => return None,
    };
    Some(key)
}

/// Maps a winit mouse button. `Other` buttons are not tracked.
pub fn mouse_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        winit::event::MouseButton::Forward => Some(MouseButton::Forward),
        winit::event::MouseButton::Back => Some(MouseButton::Back),
        winit::event::MouseButton::Other(_) => None,
    }
}

/// The key action a winit keyboard event carries.
pub fn key_action(state: ElementState, repeat: bool) -> KeyAction {
    match (state, repeat) {
        (ElementState::Released, _) => KeyAction::Release,
        (ElementState::Pressed, true) => KeyAction::Repeat,
        (ElementState::Pressed, false) => KeyAction::Press,
    }
}

/// Host key and action of a winit keyboard event, if the key is tracked.
pub fn key_event(event: &KeyEvent) -> Option<(HostKey, KeyAction)> {
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    host_key(code).map(|key| (key, key_action(event.state, event.repeat)))
}
