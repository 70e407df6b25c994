use std::path::{Path, PathBuf};

use anyhow::Result;
use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::render::{DEFAULT_MIX, MeshFormat, RenderCtx, ShapeMesh, Texture, TexturedShapeRenderer};
use trigon_engine::window::RuntimeConfig;
use trigon_geom::Rgb;
use winit::dpi::LogicalSize;

use crate::shapes::textured_quad;

/// Bundled images, resolved against this crate so the binaries work from any directory.
pub fn asset_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(relative)
}

/// Textures and blend factor for [`TexturedQuadDemo`].
#[derive(Debug, Clone, PartialEq)]
pub struct TexturedQuadConfig {
    pub textures: [PathBuf; 2],
    /// Weight of the second texture, `[0, 1]`.
    pub mix: f32,
}

impl Default for TexturedQuadConfig {
    fn default() -> Self {
        Self {
            textures: [
                asset_path("textures/container.png"),
                asset_path("textures/awesomeface.png"),
            ],
            mix: DEFAULT_MIX,
        }
    }
}

impl TexturedQuadConfig {
    /// Replaces the texture paths with up to two positional arguments, in order.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        for (slot, arg) in self.textures.iter_mut().zip(args) {
            *slot = PathBuf::from(arg);
        }
        self
    }
}

/// A quad sampling two blended textures over a teal background.
pub struct TexturedQuadDemo {
    config: TexturedQuadConfig,
    renderer: TexturedShapeRenderer,
    // Dropped in declaration order: the bind group goes before the textures it references.
    mesh: Option<ShapeMesh>,
    textures: Option<[Texture; 2]>,
}

impl TexturedQuadDemo {
    pub fn new(config: TexturedQuadConfig) -> Self {
        let renderer = TexturedShapeRenderer::new(config.mix);
        Self {
            config,
            renderer,
            mesh: None,
            textures: None,
        }
    }

    pub fn runtime_config() -> RuntimeConfig {
        RuntimeConfig {
            title: "trigon: textured quad".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            icon: Some(asset_path("icon.png")),
            clear_color: Rgb::new(0.2, 0.3, 0.3),
            ..RuntimeConfig::default()
        }
    }
}

impl App for TexturedQuadDemo {
    fn on_init(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let [first, second] = &self.config.textures;
        let textures = [
            Texture::from_path_or_checkerboard(ctx, first),
            Texture::from_path_or_checkerboard(ctx, second),
        ];
        self.renderer.set_textures(ctx, &textures[0], &textures[1]);
        self.textures = Some(textures);

        self.mesh = Some(ShapeMesh::new(ctx, "quad", MeshFormat::Textured, &textured_quad()));
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
