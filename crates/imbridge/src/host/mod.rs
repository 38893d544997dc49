//! winit host runtime: polled input state, key codes and the system clipboard.

mod clipboard;
mod input;
pub mod keycodes;

pub use clipboard::SystemClipboard;
pub use input::WinitInput;
