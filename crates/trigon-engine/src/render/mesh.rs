use anyhow::Result;
use trigon_geom::{Shape, ShapeKind};
use wgpu::util::DeviceExt;

use super::vertex::{pack_color, pack_textured};
use super::RenderCtx;

/// Which vertex layout a mesh is uploaded with.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MeshFormat {
    /// Position + color, drawn by `ShapeRenderer`.
    Color,
    /// Position + color + texture coordinate, drawn by `TexturedShapeRenderer`.
    Textured,
}

/// GPU buffers for one [`Shape`].
///
/// Buffers are created in [`ShapeMesh::new`] and destroyed when the mesh is
/// dropped, so they are released on every exit path of the owner.
/// [`update`](Self::update) re-uploads vertex data in place; the buffer is
/// never resized because a shape's vertex count is fixed by its kind.
pub struct ShapeMesh {
    label: String,
    format: MeshFormat,
    kind: ShapeKind,
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
}

impl ShapeMesh {
    pub fn new(ctx: &RenderCtx<'_>, label: &str, format: MeshFormat, shape: &Shape) -> Self {
        let contents = vertex_bytes(format, shape, ctx.srgb_target());

        let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vbo")),
            contents: &contents,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let indices = index_data(shape.indices());
        let ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} ibo")),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "ShapeMesh '{label}': {:?} {:?}, {} vertices",
            format,
            shape.kind(),
            shape.vertices().len()
        );

        Self {
            label: label.to_string(),
            format,
            kind: shape.kind(),
            vbo,
            ibo,
            index_count: shape.indices().len() as u32,
        }
    }

    #[inline]
    pub fn format(&self) -> MeshFormat {
        self.format
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Re-uploads the vertex data of `shape`.
    ///
    /// Fails if `shape` is not of the kind this mesh was created for.
    pub fn update(&self, ctx: &RenderCtx<'_>, shape: &Shape) -> Result<()> {
        anyhow::ensure!(
            shape.kind() == self.kind,
            "ShapeMesh '{}' holds a {:?}, got a {:?}",
            self.label,
            self.kind,
            shape.kind()
        );

        let contents = vertex_bytes(self.format, shape, ctx.srgb_target());
        ctx.queue.write_buffer(&self.vbo, 0, &contents);
        Ok(())
    }

    /// Binds the buffers and records the indexed draw. The pipeline must already be set.
    pub(super) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vbo.slice(..));
        rpass.set_index_buffer(self.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

impl Drop for ShapeMesh {
    fn drop(&mut self) {
        self.vbo.destroy();
        self.ibo.destroy();
        log::trace!("ShapeMesh '{}' released", self.label);
    }
}

fn vertex_bytes(format: MeshFormat, shape: &Shape, srgb_target: bool) -> Vec<u8> {
    match format {
        MeshFormat::Color => bytemuck::cast_slice(&pack_color(shape, srgb_target)).to_vec(),
        MeshFormat::Textured => bytemuck::cast_slice(&pack_textured(shape, srgb_target)).to_vec(),
    }
}

/// `write_buffer` and buffer init need 4-byte multiples; a triangle's three
/// `u16` indices are padded with a zero that `draw_indexed` never reads.
fn index_data(indices: &[u16]) -> Vec<u16> {
    let mut out = indices.to_vec();
    if out.len() % 2 != 0 {
        out.push(0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigon_geom::{Rgb, Vec3, Vertex};

    fn v(x: f32, y: f32) -> Vertex {
        Vertex::new(Vec3::new(x, y, 0.0), Rgb::WHITE)
    }

    #[test]
    fn triangle_indices_are_padded_to_four_bytes() {
        let data = index_data(ShapeKind::Triangle.indices());
        assert_eq!(data, vec![0, 1, 2, 0]);
        assert_eq!(std::mem::size_of_val(data.as_slice()) % 4, 0);
    }

    #[test]
    fn rectangle_indices_need_no_padding() {
        let data = index_data(ShapeKind::Rectangle.indices());
        assert_eq!(data.len(), 6);
    }

    #[test]
    fn vertex_bytes_size_follows_format() {
        let quad = Shape::rectangle([v(0.5, 0.5), v(0.5, -0.5), v(-0.5, -0.5), v(-0.5, 0.5)]);
        assert_eq!(vertex_bytes(MeshFormat::Color, &quad, false).len(), 4 * 24);
        assert_eq!(vertex_bytes(MeshFormat::Textured, &quad, false).len(), 4 * 32);
    }
}
