use anyhow::Result;
use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::render::{MeshFormat, RenderCtx, ShapeMesh, ShapeRenderer};
use trigon_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

use crate::shapes::rgb_triangle;

/// A static red/green/blue triangle.
#[derive(Default)]
pub struct TriangleDemo {
    renderer: ShapeRenderer,
    mesh: Option<ShapeMesh>,
}

impl TriangleDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runtime_config() -> RuntimeConfig {
        RuntimeConfig {
            title: "trigon: triangle".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            ..RuntimeConfig::default()
        }
    }
}

impl App for TriangleDemo {
    fn on_init(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        self.mesh = Some(ShapeMesh::new(ctx, "triangle", MeshFormat::Color, &rgb_triangle(0.0)));
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(mesh) = self.mesh.as_ref() else {
            return AppControl::Continue;
        };
        let renderer = &mut self.renderer;

        let clear = ctx.clear_color;
        ctx.render(clear, |rctx, target| renderer.render(rctx, target, &[mesh]))
    }
}
