//! Rendering side of imbridge.
//!
//! This crate provides:
//! - the [`RenderBridge`] that orders the host's draw batch before the GUI overlay
//! - the [`HostBatch`], [`GuiFrame`] and [`GuiRenderer`] seams
//! - a wgpu [`GpuContext`] and the per-frame [`WgpuBatch`] built on it

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod batch;
pub mod bridge;
pub mod error;
pub mod gpu;

pub use batch::WgpuBatch;
pub use bridge::{flush, FlushedBatch, GuiFrame, GuiRenderer, HostBatch, RenderBridge};
pub use error::{RenderError, RenderResult};
pub use gpu::GpuContext;
