use std::path::Path;

use anyhow::{bail, Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};

use super::RenderCtx;

/// A sampled 2D texture: GPU texture + view + repeat-wrapping trilinear sampler.
///
/// Images are converted to RGBA8 and flipped vertically on upload so that
/// texture coordinates use a bottom-left origin. The full mip chain is built
/// on the CPU and uploaded with the base level. The GPU texture is destroyed
/// when this value is dropped.
pub struct Texture {
    label: String,
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    size: (u32, u32),
}

impl Texture {
    /// Decodes the image at `path` and uploads it.
    pub fn from_path(ctx: &RenderCtx<'_>, path: &Path) -> Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("failed to load texture {}", path.display()))?;
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_image(ctx, &label, &img)
    }

    /// Like [`from_path`](Self::from_path), but a missing or undecodable file
    /// is logged and replaced by a checkerboard so the demo keeps running.
    /// An image larger than the device allows is treated the same way.
    pub fn from_path_or_checkerboard(ctx: &RenderCtx<'_>, path: &Path) -> Self {
        match Self::from_path(ctx, path) {
            Ok(t) => t,
            Err(e) => {
                log::error!("{e:#}; using checkerboard placeholder");
                Self::checkerboard(ctx, "placeholder", 256, 8)
            }
        }
    }

    /// Uploads `img`. Fails if either side exceeds the device's 2D texture limit.
    pub fn from_image(ctx: &RenderCtx<'_>, label: &str, img: &DynamicImage) -> Result<Self> {
        let max = ctx.device.limits().max_texture_dimension_2d;
        check_dimensions(label, img.width(), img.height(), max)?;
        Ok(Self::from_rgba(ctx, label, &prepare_rgba(img)))
    }

    /// A `size`×`size` checkerboard with `cells` squares per side.
    ///
    /// `size` is clamped to the device's 2D texture limit.
    pub fn checkerboard(ctx: &RenderCtx<'_>, label: &str, size: u32, cells: u32) -> Self {
        let size = size.min(ctx.device.limits().max_texture_dimension_2d);
        Self::from_rgba(ctx, label, &checkerboard_image(size, cells))
    }

    fn from_rgba(ctx: &RenderCtx<'_>, label: &str, rgba: &RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        let extent = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let levels = mip_chain(rgba);

        let format = if ctx.srgb_target() {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        };

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: extent,
            mip_level_count: levels.len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (mip_level, level) in (0u32..).zip(&levels) {
            let (w, h) = level.dimensions();
            ctx.queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                level.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * w),
                    rows_per_image: Some(h),
                },
                wgpu::Extent3d {
                    width: w,
                    height: h,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            ..Default::default()
        });

        log::debug!(
            "texture '{label}' uploaded: {width}x{height} {format:?}, {} mip levels",
            levels.len()
        );

        Self {
            label: label.to_string(),
            texture,
            view,
            sampler,
            size: (width, height),
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    #[inline]
    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        self.texture.destroy();
        log::trace!("texture '{}' released", self.label);
    }
}

/// RGBA8 copy of `img` with rows flipped (bottom row first).
pub(super) fn prepare_rgba(img: &DynamicImage) -> RgbaImage {
    let mut rgba = img.to_rgba8();
    image::imageops::flip_vertical_in_place(&mut rgba);
    rgba
}

/// Rejects images the device cannot hold as a single 2D texture.
pub(super) fn check_dimensions(label: &str, width: u32, height: u32, max: u32) -> Result<()> {
    if width == 0 || height == 0 {
        bail!("texture {label} is empty ({width}x{height})");
    }
    if width > max || height > max {
        bail!("texture {label} is {width}x{height}, device limit is {max}x{max}");
    }
    Ok(())
}

/// `base` followed by successively halved copies, down to 1×1.
pub(super) fn mip_chain(base: &RgbaImage) -> Vec<RgbaImage> {
    let mut levels = vec![base.clone()];
    let (mut w, mut h) = base.dimensions();
    while w > 1 || h > 1 {
        w = (w / 2).max(1);
        h = (h / 2).max(1);
        let prev = &levels[levels.len() - 1];
        let next = image::imageops::resize(prev, w, h, FilterType::Triangle);
        levels.push(next);
    }
    levels
}

pub(super) fn checkerboard_image(size: u32, cells: u32) -> RgbaImage {
    let size = size.max(1);
    let cell = (size / cells.max(1)).max(1);
    let light = Rgba([200, 200, 200, 255]);
    let dark = Rgba([60, 60, 60, 255]);
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { light } else { dark }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_rgba_flips_rows_and_adds_alpha() {
        let mut img = image::RgbImage::new(1, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(0, 1, image::Rgb([0, 0, 255]));

        let rgba = prepare_rgba(&DynamicImage::ImageRgb8(img));
        assert_eq!(rgba.get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
        assert_eq!(rgba.get_pixel(0, 1), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let img = checkerboard_image(4, 2);
        assert_eq!(img.dimensions(), (4, 4));
        assert_eq!(img.get_pixel(0, 0), img.get_pixel(1, 1));
        assert_ne!(img.get_pixel(0, 0), img.get_pixel(2, 0));
        assert_eq!(img.get_pixel(0, 0), img.get_pixel(2, 2));
    }

    #[test]
    fn checkerboard_tolerates_zero_cells() {
        let img = checkerboard_image(8, 0);
        assert_eq!(img.dimensions(), (8, 8));
    }

    #[test]
    fn oversized_image_is_rejected() {
        assert!(check_dimensions("big.png", 4096, 512, 2048).is_err());
        assert!(check_dimensions("tall.png", 16, 2049, 2048).is_err());
        assert!(check_dimensions("edge.png", 2048, 2048, 2048).is_ok());
    }

    #[test]
    fn empty_image_is_rejected() {
        assert!(check_dimensions("none.png", 0, 4, 2048).is_err());
    }

    #[test]
    fn mip_chain_halves_down_to_one_pixel() {
        let levels = mip_chain(&checkerboard_image(8, 2));
        let sizes: Vec<(u32, u32)> = levels.iter().map(|l| l.dimensions()).collect();
        assert_eq!(sizes, vec![(8, 8), (4, 4), (2, 2), (1, 1)]);
    }

    #[test]
    fn mip_chain_handles_non_square_images() {
        let levels = mip_chain(&RgbaImage::new(5, 2));
        let sizes: Vec<(u32, u32)> = levels.iter().map(|l| l.dimensions()).collect();
        assert_eq!(sizes, vec![(5, 2), (2, 1), (1, 1)]);
    }

    #[test]
    fn mip_chain_averages_colors() {
        let base = RgbaImage::from_pixel(4, 4, Rgba([100, 150, 200, 255]));
        let levels = mip_chain(&base);
        let Some(last) = levels.last() else { panic!("empty mip chain") };
        let got = last.get_pixel(0, 0).0;
        for (g, e) in got.iter().zip([100u8, 150, 200, 255]) {
            assert!(g.abs_diff(e) <= 1, "got {got:?}");
        }
    }
}
