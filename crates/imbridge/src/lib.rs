//! imbridge: Dear ImGui on a frame-based winit + wgpu host loop.
//!
//! Each frame the [`Backend`] turns the host's polled input state into
//! edge-triggered GUI events, and the render bridge draws the GUI overlay
//! after the host's own content. [`run_app`] wires both into a winit
//! application.
//!
//! Enable the `dear-imgui` feature for [`ImguiLayer`]; [`RecordingGui`] runs
//! without a GUI library and records the events it would have received.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod app;
pub mod backend;
pub mod headless;
pub mod host;
#[cfg(feature = "dear-imgui")]
pub mod imgui;

pub use app::{frame_interval, run_app, GuiLayer, HostApp};
pub use backend::{Backend, BackendCapabilities};
pub use headless::{NullRenderer, RecordingFrame, RecordingGui};
pub use host::{SystemClipboard, WinitInput};
#[cfg(feature = "dear-imgui")]
pub use imgui::{ImguiFrame, ImguiLayer, ImguiRenderer};

pub use imbridge_core::*;
pub use imbridge_render::{
    flush, FlushedBatch, GpuContext, GuiFrame, GuiRenderer, HostBatch, RenderBridge, RenderError,
    RenderResult, WgpuBatch,
};

#[cfg(feature = "dear-imgui")]
pub use dear_imgui_rs;
