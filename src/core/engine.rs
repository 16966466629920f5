// snapcrop/src/core/engine.rs
use super::{EngineConfig, RasterImage, Result, TransformFailure};
use crate::transforms::{FitCropper, MarginCropper, Resampler};

/// Facade wiring the transform components from one [`EngineConfig`].
///
/// Holds no mutable state; a single engine may serve calls from many
/// threads.
pub struct GeometryEngine {
    resampler: Resampler,
    cropper: MarginCropper,
    fit_cropper: FitCropper,
}

impl GeometryEngine {
    pub fn new(config: EngineConfig) -> Self {
        let resampler = Resampler::new(config.edge_policy);
        let fit_cropper =
            FitCropper::new(config.target_aspect).with_reencode_quality(config.reencode_quality);

        Self {
            resampler,
            cropper: MarginCropper::new(),
            fit_cropper,
        }
    }

    pub fn resize(&self, source: &RasterImage, width: u32, height: u32) -> Result<RasterImage> {
        self.resampler.resize(source, width, height)
    }

    pub fn resize_to_height(&self, source: &RasterImage, height: u32) -> Result<RasterImage> {
        self.resampler.resize_to_height(source, height)
    }

    pub fn resize_to_width(&self, source: &RasterImage, width: u32) -> Result<RasterImage> {
        self.resampler.resize_to_width(source, width)
    }

    pub fn crop_margins(
        &self,
        source: &RasterImage,
        left: u32,
        right: u32,
        top: u32,
        bottom: u32,
    ) -> Result<RasterImage> {
        self.cropper.crop_margins(source, left, right, top, bottom)
    }

    pub fn crop_symmetric(&self, source: &RasterImage, x: u32, y: u32) -> Result<RasterImage> {
        self.cropper.crop_symmetric(source, x, y)
    }

    pub fn fit_crop(
        &self,
        source: &RasterImage,
    ) -> std::result::Result<RasterImage, TransformFailure> {
        self.fit_cropper.fit_crop(source)
    }
}

impl Default for GeometryEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
