use anyhow::Result;
use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::render::{MeshFormat, RenderCtx, ShapeMesh, ShapeRenderer};
use trigon_engine::window::RuntimeConfig;
use trigon_geom::{pointer_angle, Shape};
use winit::dpi::LogicalSize;

use crate::pointer::PointerTracker;
use crate::shapes::rgb_triangle;

/// A triangle turned about its centroid to follow the pointer around the
/// window center.
pub struct PointerSpinDemo {
    base: Shape,
    pointer: PointerTracker,
    renderer: ShapeRenderer,
    mesh: Option<ShapeMesh>,
}

impl Default for PointerSpinDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerSpinDemo {
    pub fn new() -> Self {
        Self {
            base: rgb_triangle(0.0),
            pointer: PointerTracker::default(),
            renderer: ShapeRenderer::new(),
            mesh: None,
        }
    }

    pub fn runtime_config() -> RuntimeConfig {
        RuntimeConfig {
            title: "trigon: pointer spin".to_string(),
            initial_size: LogicalSize::new(800.0, 800.0),
            ..RuntimeConfig::default()
        }
    }
}

/// `base` rotated by `angle` about its own centroid; `base` is left as is.
pub fn spun(base: &Shape, angle: f32) -> Shape {
    let mut shape = base.clone();
    shape.rotate(angle);
    shape
}

impl App for PointerSpinDemo {
    fn on_init(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        self.mesh = Some(ShapeMesh::new(ctx, "spinner", MeshFormat::Color, &self.base));
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.viewport();
        let pointer = self.pointer.update(ctx.input.pointer_pos, viewport);
        let angle = pointer_angle(pointer, viewport.center());
        log::trace!("angle: {angle:.2}");

        let shape = spun(&self.base, angle);
        let Some(mesh) = self.mesh.as_ref() else {
            return AppControl::Continue;
        };
        let renderer = &mut self.renderer;

        let clear = ctx.clear_color;
        ctx.render(clear, |rctx, target| {
            if let Err(e) = mesh.update(rctx, &shape) {
                log::error!("{e:#}");
                return;
            }
            renderer.render(rctx, target, &[mesh]);
        })
    }
}
