//! The host's per-frame wgpu draw batch.

use crate::bridge::{FlushedBatch, HostBatch};
use crate::error::RenderResult;

/// One frame of host drawing into the window surface.
///
/// The host records into [`WgpuBatch::encoder`] or passes from
/// [`WgpuBatch::host_pass`]. Flushing submits those commands and swaps in a
/// fresh encoder for the GUI overlay, which loads rather than clears the
/// target so it composites over the host content.
pub struct WgpuBatch<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    output: wgpu::SurfaceTexture,
    view: wgpu::TextureView,
    encoder: wgpu::CommandEncoder,
    flushes: u32,
}

impl<'a> WgpuBatch<'a> {
    pub(crate) fn begin(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        output: wgpu::SurfaceTexture,
        clear: wgpu::Color,
    ) -> Self {
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("host encoder"),
        });

        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("clear pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        Self {
            device,
            queue,
            output,
            view,
            encoder,
            flushes: 0,
        }
    }

    pub fn device(&self) -> &wgpu::Device {
        self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        self.queue
    }

    /// The frame's colour target.
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn encoder(&mut self) -> &mut wgpu::CommandEncoder {
        &mut self.encoder
    }

    /// Width and height of the frame's target.
    pub fn size(&self) -> (u32, u32) {
        (self.output.texture.width(), self.output.texture.height())
    }

    /// Starts a render pass on top of what was drawn so far.
    pub fn host_pass(&mut self, label: &str) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(load_attachment(&self.view))],
            depth_stencil_attachment: None,
            ..Default::default()
        })
    }

    /// Starts the GUI overlay pass. Requires the host batch to be flushed.
    pub fn overlay_pass(&mut self, _flushed: &FlushedBatch) -> wgpu::RenderPass<'static> {
        let pass = self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("gui overlay pass"),
            color_attachments: &[Some(load_attachment(&self.view))],
            depth_stencil_attachment: None,
            ..Default::default()
        });
        // GUI renderers take a pass that does not borrow the encoder
        pass.forget_lifetime()
    }

    /// Number of times this batch has been flushed.
    pub fn flushes(&self) -> u32 {
        self.flushes
    }

    /// Submits the remaining commands and presents the frame.
    pub fn present(self) {
        self.queue.submit(std::iter::once(self.encoder.finish()));
        self.output.present();
    }
}

impl HostBatch for WgpuBatch<'_> {
    fn flush_pending(&mut self) -> RenderResult<()> {
        let overlay = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("overlay encoder"),
            });
        let host = std::mem::replace(&mut self.encoder, overlay);
        self.queue.submit(std::iter::once(host.finish()));
        self.flushes += 1;
        Ok(())
    }
}

fn load_attachment(view: &wgpu::TextureView) -> wgpu::RenderPassColorAttachment<'_> {
    wgpu::RenderPassColorAttachment {
        view,
        resolve_target: None,
        ops: wgpu::Operations {
            load: wgpu::LoadOp::Load, // Don't clear - render on top
            store: wgpu::StoreOp::Store,
        },
        depth_slice: None,
    }
}
