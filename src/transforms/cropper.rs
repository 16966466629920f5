// snapcrop/src/transforms/cropper.rs
use crate::core::{EngineError, RasterImage, Result};

/// Removes fixed pixel margins from each edge of a raster.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarginCropper;

impl MarginCropper {
    pub fn new() -> Self {
        Self
    }

    /// Remove `left`/`right`/`top`/`bottom` pixels from the respective
    /// edges. Fails with `InvalidDimension` when the margins consume a
    /// whole axis; never silently clamps.
    pub fn crop_margins(
        &self,
        source: &RasterImage,
        left: u32,
        right: u32,
        top: u32,
        bottom: u32,
    ) -> Result<RasterImage> {
        let new_width = i64::from(source.width()) - (i64::from(left) + i64::from(right));
        let new_height = i64::from(source.height()) - (i64::from(top) + i64::from(bottom));

        if new_width <= 0 || new_height <= 0 {
            return Err(EngineError::InvalidDimension(format!(
                "margins leave a {}x{} image",
                new_width, new_height
            )));
        }

        log::debug!(
            "cropping {}x{} by margins l{} r{} t{} b{} -> {}x{}",
            source.width(),
            source.height(),
            left,
            right,
            top,
            bottom,
            new_width,
            new_height
        );

        let cropped = source
            .as_image()
            .crop_imm(left, top, new_width as u32, new_height as u32);

        Ok(RasterImage::with_resolution(cropped, source.resolution()))
    }

    /// Symmetric convenience form: `x` off both sides, `y` off top and
    /// bottom.
    pub fn crop_symmetric(&self, source: &RasterImage, x: u32, y: u32) -> Result<RasterImage> {
        self.crop_margins(source, x, x, y, y)
    }
}
