//! Rendering error types.

use thiserror::Error;

/// Errors that can occur during rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to create wgpu adapter.
    #[error("failed to create graphics adapter")]
    AdapterCreationFailed,

    /// Failed to create wgpu device.
    #[error("failed to create graphics device: {0}")]
    DeviceCreationFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create surface.
    #[error("failed to create surface: {0}")]
    SurfaceCreationFailed(#[from] wgpu::CreateSurfaceError),

    /// The surface reports no usable texture format.
    #[error("surface has no supported format")]
    NoSurfaceFormat,

    /// Surface lost.
    #[error("surface lost")]
    SurfaceLost,

    /// Out of memory.
    #[error("out of memory")]
    OutOfMemory,

    /// The GUI renderer failed to rasterize its draw data.
    #[error("GUI renderer failed: {0}")]
    GuiRenderer(String),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

impl From<RenderError> for imbridge_core::BridgeError {
    fn from(err: RenderError) -> Self {
        Self::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use imbridge_core::BridgeError;

    use super::*;

    #[test]
    fn test_render_error_into_bridge_error() {
        let err: BridgeError = RenderError::OutOfMemory.into();
        assert!(matches!(err, BridgeError::Render(ref msg) if msg == "out of memory"));
    }
}
