use bytemuck::{Pod, Zeroable};

use super::common::create_pipeline;
use super::vertex::TexturedVertex;
use super::{MeshFormat, RenderCtx, RenderTarget, ShapeMesh, Texture};

/// Share of the second texture in the blend when nothing else is set.
pub const DEFAULT_MIX: f32 = 0.2;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct Params {
    mix_factor: f32,
    _pad: [f32; 3],
}

/// Renderer for textured shapes (`MeshFormat::Textured`).
///
/// Samples two textures and blends them: `mix(a, b, b.alpha * mix)`.
/// Textures are bound with [`set_textures`](Self::set_textures); until then
/// nothing is drawn.
pub struct TexturedShapeRenderer {
    mix: f32,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    // Independent of the surface format, so it survives pipeline rebuilds.
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    params_ubo: Option<wgpu::Buffer>,
    bind_group: Option<wgpu::BindGroup>,

    warned_unbound: bool,
    warned_wrong_format: bool,
}

impl Default for TexturedShapeRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MIX)
    }
}

impl TexturedShapeRenderer {
    pub fn new(mix: f32) -> Self {
        Self {
            mix: clamp_unit(mix),
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            params_ubo: None,
            bind_group: None,
            warned_unbound: false,
            warned_wrong_format: false,
        }
    }

    #[inline]
    pub fn mix(&self) -> f32 {
        self.mix
    }

    /// Sets the blend weight of the second texture, clamped to `[0, 1]`.
    pub fn set_mix(&mut self, mix: f32) {
        self.mix = clamp_unit(mix);
    }

    /// Binds `first` and `second` for subsequent draws.
    ///
    /// Both textures must outlive every frame drawn with this binding.
    pub fn set_textures(&mut self, ctx: &RenderCtx<'_>, first: &Texture, second: &Texture) {
        self.ensure_layout(ctx);
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let params_ubo = self.params_ubo.get_or_insert_with(|| {
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("trigon textured params ubo"),
                size: std::mem::size_of::<Params>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });

        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("trigon textured bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: params_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(first.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(first.sampler()),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(second.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::Sampler(second.sampler()),
                },
            ],
        }));
        self.warned_unbound = false;
        log::debug!(
            "TexturedShapeRenderer: bound {:?} and {:?} textures",
            first.size(),
            second.size()
        );
    }

    /// Draws `meshes` in order into `target`.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, meshes: &[&ShapeMesh]) {
        let drawable: Vec<&ShapeMesh> = meshes
            .iter()
            .copied()
            .filter(|m| m.format() == MeshFormat::Textured)
            .collect();

        if drawable.len() != meshes.len() && !self.warned_wrong_format {
            log::debug!("TexturedShapeRenderer: color mesh passed to textured renderer; skipped");
            self.warned_wrong_format = true;
        }

        if drawable.is_empty() {
            return;
        }

        let (Some(_), Some(params_ubo)) = (self.bind_group.as_ref(), self.params_ubo.as_ref()) else {
            if !self.warned_unbound {
                log::warn!("TexturedShapeRenderer: no textures bound; nothing drawn");
                self.warned_unbound = true;
            }
            return;
        };

        let params = Params {
            mix_factor: self.mix,
            _pad: [0.0; 3],
        };
        ctx.queue.write_buffer(params_ubo, 0, bytemuck::bytes_of(&params));

        self.ensure_pipeline(ctx);
        let (Some(pipeline), Some(bind_group)) = (self.pipeline.as_ref(), self.bind_group.as_ref()) else {
            return;
        };

        let mut rpass = target.begin_load_pass("trigon textured pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        for mesh in drawable {
            mesh.draw(&mut rpass);
        }
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_layout(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group_layout.is_some() {
            return;
        }

        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };
        let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };

        self.bind_group_layout = Some(ctx.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("trigon textured bgl"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<Params>() as u64),
                        },
                        count: None,
                    },
                    texture_entry(1),
                    sampler_entry(2),
                    texture_entry(3),
                    sampler_entry(4),
                ],
            },
        ));
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        self.ensure_layout(ctx);
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        self.pipeline = Some(create_pipeline(
            ctx.device,
            "trigon textured pipeline",
            include_str!("shaders/textured.wgsl"),
            &[bgl],
            TexturedVertex::layout(),
            ctx.surface_format,
        ));
        self.pipeline_format = Some(ctx.surface_format);
        log::debug!("TexturedShapeRenderer: pipeline built for {:?}", ctx.surface_format);
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_fit_one_uniform_slot() {
        assert_eq!(std::mem::size_of::<Params>(), 16);
    }

    #[test]
    fn mix_defaults_and_clamps() {
        let mut r = TexturedShapeRenderer::default();
        assert_eq!(r.mix(), DEFAULT_MIX);

        r.set_mix(1.5);
        assert_eq!(r.mix(), 1.0);
        r.set_mix(-0.3);
        assert_eq!(r.mix(), 0.0);
        r.set_mix(f32::NAN);
        assert_eq!(r.mix(), 0.0);
    }

    #[test]
    fn unbound_renderer_has_no_bind_group() {
        let r = TexturedShapeRenderer::new(0.5);
        assert!(r.bind_group.is_none());
        assert!(r.pipeline.is_none());
    }
}
