// snapcrop/src/transforms/resampler.rs
use crate::core::{EdgePolicy, EngineError, RasterImage, Region, Result};
use crate::utils::{proportional_height, proportional_width, validate_target};
use image::{DynamicImage, Rgba, RgbaImage};

/// Catmull-Rom support radius in source pixels at scale 1.
const KERNEL_SUPPORT: f32 = 2.0;

/// Catmull-Rom (bicubic, a = -0.5) filter weight at distance `x`.
///
/// Interpolating: weight 1 at 0 and 0 at every other integer, so an
/// unscaled resample reproduces the source exactly.
fn catmull_rom(x: f32) -> f32 {
    let x = x.abs();
    if x < 1.0 {
        (1.5 * x - 2.5) * x * x + 1.0
    } else if x < 2.0 {
        ((-0.5 * x + 2.5) * x - 4.0) * x + 2.0
    } else {
        0.0
    }
}

/// High-quality resampler: two-pass separable Catmull-Rom with filter
/// support widened by the scale factor when downsampling, source-copy
/// compositing, and a configurable policy for kernel taps beyond the
/// source edge.
pub struct Resampler {
    edge_policy: EdgePolicy,
}

impl Resampler {
    pub fn new(edge_policy: EdgePolicy) -> Self {
        Self { edge_policy }
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Resample the whole source to exactly `width` x `height`.
    pub fn resize(&self, source: &RasterImage, width: u32, height: u32) -> Result<RasterImage> {
        validate_target(width, height)?;
        require_nonzero_source(source)?;

        if width == source.width() && height == source.height() {
            log::debug!("resize to identical dimensions, copying pixels");
            return Ok(RasterImage::with_resolution(
                source.as_image().clone(),
                source.resolution(),
            ));
        }

        log::debug!(
            "resampling {}x{} -> {}x{}",
            source.width(),
            source.height(),
            width,
            height
        );

        let full = Region::new(0, 0, source.width(), source.height());
        let pixels = self.resample(source.as_image(), full, width, height);

        Ok(RasterImage::with_resolution(
            DynamicImage::ImageRgba8(pixels),
            source.resolution(),
        ))
    }

    /// Resample the `window` sub-rectangle of the source to exactly
    /// `width` x `height`. Kernel taps outside the image use the edge
    /// policy; a window equal in size to the destination degenerates to an
    /// exact pixel copy.
    pub fn resample_region(
        &self,
        source: &RasterImage,
        window: Region,
        width: u32,
        height: u32,
    ) -> Result<RasterImage> {
        validate_target(width, height)?;
        require_nonzero_source(source)?;

        if window.width == 0 || window.height == 0 {
            return Err(EngineError::InvalidDimension(
                "source window must have positive dimensions".to_string(),
            ));
        }

        log::debug!(
            "resampling window {}x{}+{}+{} -> {}x{}",
            window.width,
            window.height,
            window.x,
            window.y,
            width,
            height
        );

        let pixels = self.resample(source.as_image(), window, width, height);

        Ok(RasterImage::with_resolution(
            DynamicImage::ImageRgba8(pixels),
            source.resolution(),
        ))
    }

    /// Resize so the result has exactly `height`, width computed by
    /// truncating proportional math.
    pub fn resize_to_height(&self, source: &RasterImage, height: u32) -> Result<RasterImage> {
        let width = proportional_width(height, source.width(), source.height())?;
        self.resize(source, width, height)
    }

    /// Resize so the result has exactly `width`, height computed by
    /// truncating proportional math.
    pub fn resize_to_width(&self, source: &RasterImage, width: u32) -> Result<RasterImage> {
        let height = proportional_height(width, source.width(), source.height())?;
        self.resize(source, width, height)
    }

    fn resample(&self, source: &DynamicImage, window: Region, width: u32, height: u32) -> RgbaImage {
        let src = source.to_rgba8();
        let (src_width, src_height) = src.dimensions();

        // Pass 1: horizontal, over every source row so the vertical pass
        // can tap rows outside the window.
        let scale_x = window.width as f32 / width as f32;
        let mut temp = RgbaImage::new(width, src_height);
        for y in 0..src_height {
            for out_x in 0..width {
                let center = window.x as f32 + (out_x as f32 + 0.5) * scale_x;
                let pixel = self.convolve(center, scale_x, src_width, |x| src.get_pixel(x, y).0);
                temp.put_pixel(out_x, y, Rgba(pixel));
            }
        }

        // Pass 2: vertical.
        let scale_y = window.height as f32 / height as f32;
        let mut out = RgbaImage::new(width, height);
        for out_y in 0..height {
            for x in 0..width {
                let center = window.y as f32 + (out_y as f32 + 0.5) * scale_y;
                let pixel = self.convolve(center, scale_y, src_height, |y| temp.get_pixel(x, y).0);
                out.put_pixel(x, out_y, Rgba(pixel));
            }
        }

        out
    }

    fn convolve(
        &self,
        center: f32,
        scale: f32,
        len: u32,
        fetch: impl Fn(u32) -> [u8; 4],
    ) -> [u8; 4] {
        // Widen the filter when downsampling so every covered source
        // pixel contributes (antialiasing).
        let filter_scale = scale.max(1.0);
        let support = KERNEL_SUPPORT * filter_scale;
        let first = (center - support + 0.5).floor() as i64;
        let last = (center + support + 0.5).floor() as i64;

        let mut acc = [0.0f32; 4];
        let mut weight_sum = 0.0f32;
        for tap in first..last {
            let weight = catmull_rom((tap as f32 + 0.5 - center) / filter_scale);
            if weight == 0.0 {
                continue;
            }
            let pixel = fetch(self.edge_policy.map_index(tap, len));
            for channel in 0..4 {
                acc[channel] += f32::from(pixel[channel]) * weight;
            }
            weight_sum += weight;
        }

        let mut out = [0u8; 4];
        for channel in 0..4 {
            let value = if weight_sum != 0.0 {
                acc[channel] / weight_sum
            } else {
                0.0
            };
            out[channel] = (value + 0.5).floor().clamp(0.0, 255.0) as u8;
        }
        out
    }
}

impl Default for Resampler {
    fn default() -> Self {
        Self::new(EdgePolicy::default())
    }
}

fn require_nonzero_source(source: &RasterImage) -> Result<()> {
    if source.width() == 0 || source.height() == 0 {
        return Err(EngineError::DegenerateSource(format!(
            "source is {}x{}",
            source.width(),
            source.height()
        )));
    }
    Ok(())
}
