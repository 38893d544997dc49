//! Core input translation for imbridge.
//!
//! This crate holds everything that does not touch a window, a GPU or a GUI
//! context:
//! - [`HostKey`] / [`GuiKey`] identifiers and the static [`KeyMap`] and [`ModifierMap`] tables
//! - the [`EdgeState`] snapshot and the per-frame [`InputTranslator`]
//! - the [`InputSource`], [`GuiIo`] and [`Clipboard`] seams to the host and GUI
//! - [`DisplayMetrics`], [`Options`] and the error type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Snapshot is a flat set of flags by nature
#![allow(clippy::struct_excessive_bools)]

pub mod display;
pub mod edge;
pub mod error;
pub mod event;
pub mod key_map;
pub mod keys;
pub mod options;
pub mod platform;
pub mod translator;

pub use display::DisplayMetrics;
pub use edge::EdgeState;
pub use error::{BridgeError, Result};
pub use event::GuiEvent;
pub use key_map::{KeyMap, ModifierMap};
pub use keys::{GamepadAxis, GamepadButton, GuiKey, GuiModifier, HostKey, KeyAction, MouseButton};
pub use options::{InputMode, InputOptions, Options, WindowOptions};
pub use platform::{Clipboard, EventQueue, GuiIo, InputSource, IoRequests};
pub use translator::InputTranslator;

// Re-export glam types for convenience
pub use glam::Vec2;
