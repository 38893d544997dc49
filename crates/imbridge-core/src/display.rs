//! Per-frame display metrics handed to the GUI.

use glam::Vec2;

/// Display size, framebuffer scale and frame delta for one GUI frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Window size in logical pixels.
    pub display_size: Vec2,
    /// Framebuffer pixels per logical pixel, per axis.
    pub framebuffer_scale: Vec2,
    /// Seconds since the previous frame, never below the configured minimum.
    pub delta_time: f32,
}

impl DisplayMetrics {
    /// Computes metrics from window and framebuffer sizes.
    ///
    /// An axis with a zero window size (minimised window) reports a scale of 1.
    pub fn compute(
        window_size: Vec2,
        framebuffer_size: Vec2,
        frame_time: f32,
        min_delta_time: f32,
    ) -> Self {
        Self {
            display_size: window_size,
            framebuffer_scale: framebuffer_scale(window_size, framebuffer_size),
            delta_time: frame_time.max(min_delta_time),
        }
    }
}

fn framebuffer_scale(window_size: Vec2, framebuffer_size: Vec2) -> Vec2 {
    let axis = |window: f32, framebuffer: f32| {
        if window > 0.0 {
            framebuffer / window
        } else {
            1.0
        }
    };
    Vec2::new(
        axis(window_size.x, framebuffer_size.x),
        axis(window_size.y, framebuffer_size.y),
    )
}
