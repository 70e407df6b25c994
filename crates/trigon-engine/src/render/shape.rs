use super::common::create_pipeline;
use super::vertex::ColorVertex;
use super::{MeshFormat, RenderCtx, RenderTarget, ShapeMesh};

/// Renderer for per-vertex-colored shapes (`MeshFormat::Color`).
///
/// The pipeline is built lazily on first use and rebuilt if the surface
/// format changes.
#[derive(Default)]
pub struct ShapeRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    warned_wrong_format: bool,
}

impl ShapeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `meshes` in order into `target`.
    ///
    /// Meshes uploaded as `MeshFormat::Textured` are skipped (one-time debug message).
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, meshes: &[&ShapeMesh]) {
        let drawable: Vec<&ShapeMesh> = meshes
            .iter()
            .copied()
            .filter(|m| m.format() == MeshFormat::Color)
            .collect();

        if drawable.len() != meshes.len() && !self.warned_wrong_format {
            log::debug!("ShapeRenderer: textured mesh passed to color renderer; skipped");
            self.warned_wrong_format = true;
        }

        if drawable.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let mut rpass = target.begin_load_pass("trigon shape pass");
        rpass.set_pipeline(pipeline);
        for mesh in drawable {
            mesh.draw(&mut rpass);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        self.pipeline = Some(create_pipeline(
            ctx.device,
            "trigon shape pipeline",
            include_str!("shaders/shape.wgsl"),
            &[],
            ColorVertex::layout(),
            ctx.surface_format,
        ));
        self.pipeline_format = Some(ctx.surface_format);
        log::debug!("ShapeRenderer: pipeline built for {:?}", ctx.surface_format);
    }
}
