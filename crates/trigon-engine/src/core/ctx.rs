use trigon_geom::Rgb;
use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::render::{srgb_to_linear, RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Window handle plus size helpers.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the logical window size as `(width, height)` in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let phys = self.window.inner_size();
        let scale = self.window.scale_factor();
        let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(scale);
        (logi.width as f32, logi.height as f32)
    }

    /// Logical-pixel viewport matching the current window size.
    pub fn viewport(&self) -> Viewport {
        let (w, h) = self.logical_size();
        Viewport::new(w, h)
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    /// Background color from `RuntimeConfig`.
    pub clear_color: Rgb,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.window.viewport()
    }

    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`] and
    /// [`RenderTarget`], then presents the frame.
    ///
    /// Surface errors skip the frame; only a fatal one yields `AppControl::Exit`.
    pub fn render<F>(&mut self, clear: Rgb, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.viewport();

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        // Clear pass, dropped before the encoder is moved into submit().
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("trigon clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color(clear, self.gpu.surface_format())),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            viewport,
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}

/// Clear values are written as-is; an sRGB target needs them linearized first.
fn clear_color(c: Rgb, format: wgpu::TextureFormat) -> wgpu::Color {
    let enc = |v: f32| {
        if format.is_srgb() { srgb_to_linear(v) as f64 } else { v as f64 }
    };
    wgpu::Color {
        r: enc(c.r),
        g: enc(c.g),
        b: enc(c.b),
        a: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_passes_through_on_unorm() {
        let c = clear_color(Rgb::new(0.2, 0.3, 0.3), wgpu::TextureFormat::Bgra8Unorm);
        assert!((c.r - 0.2).abs() < 1e-6);
        assert!((c.g - 0.3).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn clear_color_is_linearized_on_srgb() {
        let c = clear_color(Rgb::new(0.5, 0.0, 1.0), wgpu::TextureFormat::Bgra8UnormSrgb);
        assert!((c.r - 0.214_041).abs() < 1e-4);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn clear_color_agrees_with_vertex_linearization() {
        for v in [0.0, 0.02, 0.2, 0.3, 0.73, 1.0] {
            let c = clear_color(Rgb::new(v, v, v), wgpu::TextureFormat::Rgba8UnormSrgb);
            assert_eq!(c.r, srgb_to_linear(v) as f64);
        }
    }
}
