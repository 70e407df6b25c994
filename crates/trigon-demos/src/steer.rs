//! The moving-triangle demo.
//!
//! WASD moves the triangle, the pointer steers it. Every frame the literal
//! triangle is rebuilt, turned toward the pointer about its own centroid,
//! moved by the accumulated offset and re-uploaded.

use anyhow::Result;
use trigon_engine::coords::Viewport;
use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::input::{InputState, Key};
use trigon_engine::render::{MeshFormat, RenderCtx, ShapeMesh, ShapeRenderer};
use trigon_engine::window::RuntimeConfig;
use trigon_geom::{pointer_angle, Shape, Vec2};
use winit::dpi::LogicalSize;

use crate::pointer::PointerTracker;
use crate::shapes::rgb_triangle;

/// Depth of the steered triangle's vertices. Transforms and the shader ignore it.
const DEPTH: f32 = 1.0;

/// Point the pointer angle is measured around.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum PointerPivot {
    /// Fixed at the window center regardless of where the triangle is.
    #[default]
    WindowCenter,
    /// Follows the triangle's centroid as it moves.
    ShapeCentroid,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SteerConfig {
    /// NDC units per second while a movement key is held.
    pub move_speed: f32,
    pub pivot: PointerPivot,
}

impl Default for SteerConfig {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            pivot: PointerPivot::WindowCenter,
        }
    }
}

impl SteerConfig {
    /// `--centroid` anywhere in `args` measures the angle around the triangle.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        if args.into_iter().any(|a| a == "--centroid") {
            self.pivot = PointerPivot::ShapeCentroid;
        }
        self
    }
}

/// Offset (NDC) produced by the held WASD keys over `dt` seconds.
///
/// Opposite keys cancel. Diagonals are not normalized.
pub fn movement(input: &InputState, dt: f32, speed: f32) -> Vec2 {
    let step = speed * dt;
    Vec2::new(input.axis(Key::A, Key::D) * step, input.axis(Key::S, Key::W) * step)
}

/// Window-pixel pivot for the pointer angle.
pub fn pivot_pixel(pivot: PointerPivot, viewport: Viewport, offset: Vec2) -> Vec2 {
    match pivot {
        PointerPivot::WindowCenter => viewport.center(),
        PointerPivot::ShapeCentroid => {
            viewport.ndc_to_pixel(rgb_triangle(DEPTH).centroid() + offset)
        }
    }
}

/// The literal triangle turned by `angle` and moved by `offset`.
pub fn steered_shape(offset: Vec2, angle: f32) -> Shape {
    let mut shape = rgb_triangle(DEPTH);
    shape.rotate(angle);
    shape.translate(offset.x, offset.y);
    shape
}

pub struct SteerDemo {
    config: SteerConfig,
    offset: Vec2,
    pointer: PointerTracker,
    renderer: ShapeRenderer,
    mesh: Option<ShapeMesh>,
}

impl SteerDemo {
    pub fn new(config: SteerConfig) -> Self {
        Self {
            config,
            offset: Vec2::ZERO,
            pointer: PointerTracker::default(),
            renderer: ShapeRenderer::new(),
            mesh: None,
        }
    }

    pub fn runtime_config() -> RuntimeConfig {
        RuntimeConfig {
            title: "trigon: steer".to_string(),
            initial_size: LogicalSize::new(800.0, 800.0),
            ..RuntimeConfig::default()
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Advances the demo by one frame and returns the shape to draw.
    pub fn step(&mut self, input: &InputState, dt: f32, viewport: Viewport) -> Shape {
        self.offset += movement(input, dt, self.config.move_speed);

        let pointer = self.pointer.update(input.pointer_pos, viewport);
        let pivot = pivot_pixel(self.config.pivot, viewport, self.offset);
        let angle = pointer_angle(pointer, pivot);
        log::trace!("angle: {angle:.2}");

        steered_shape(self.offset, angle)
    }
}

impl App for SteerDemo {
    fn on_init(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        self.mesh = Some(ShapeMesh::new(ctx, "steered", MeshFormat::Color, &rgb_triangle(DEPTH)));
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let shape = self.step(ctx.input, ctx.time.dt, ctx.viewport());

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
