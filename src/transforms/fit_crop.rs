// snapcrop/src/transforms/fit_crop.rs
use super::resampler::Resampler;
use crate::core::{
    EdgePolicy, EngineError, RasterImage, Region, Resolution, Result, TargetAspect,
    TransformFailure,
};
use crate::utils::{centered_origin, fit_window};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// Resolution stamped onto the fit-crop intermediate, inherited by the
/// final thumbnail. Legacy pipeline behavior.
const INTERMEDIATE_DPI: Resolution = Resolution {
    horizontal: 72.0,
    vertical: 72.0,
};

/// Crops the largest centered window matching a fixed aspect ratio and
/// resamples it to exactly that target size.
///
/// The pipeline is best-effort: any internal error is swallowed into the
/// opaque [`TransformFailure`] sentinel.
pub struct FitCropper {
    aspect: TargetAspect,
    resampler: Resampler,
    reencode_quality: u8,
}

impl FitCropper {
    pub fn new(aspect: TargetAspect) -> Self {
        Self {
            aspect,
            // The legacy crop path never set the tile-flip wrap, so taps
            // past the edge repeat the border here.
            resampler: Resampler::new(EdgePolicy::Clamp),
            reencode_quality: 75,
        }
    }

    pub fn with_reencode_quality(mut self, quality: u8) -> Self {
        self.reencode_quality = quality.clamp(1, 100);
        self
    }

    pub fn aspect(&self) -> TargetAspect {
        self.aspect
    }

    /// Produce a thumbnail of exactly the configured aspect dimensions,
    /// center-weighted over the source content.
    pub fn fit_crop(
        &self,
        source: &RasterImage,
    ) -> std::result::Result<RasterImage, TransformFailure> {
        self.run(source).map_err(|err| {
            log::warn!("aspect-fit crop failed: {}", err);
            TransformFailure
        })
    }

    fn run(&self, source: &RasterImage) -> Result<RasterImage> {
        if source.width() == 0 || source.height() == 0 {
            return Err(EngineError::DegenerateSource(format!(
                "source is {}x{}",
                source.width(),
                source.height()
            )));
        }

        let (window_width, window_height) = fit_window(source.width(), source.height(), self.aspect);
        let window = Region::new(
            centered_origin(source.width(), window_width),
            centered_origin(source.height(), window_height),
            window_width,
            window_height,
        );

        log::debug!(
            "fit-crop {}x{}: window {}x{}+{}+{} -> {}x{}",
            source.width(),
            source.height(),
            window.width,
            window.height,
            window.x,
            window.y,
            self.aspect.width,
            self.aspect.height
        );

        let intermediate =
            self.resampler
                .resample_region(source, window, window.width, window.height)?;
        let intermediate = self.reencode(intermediate)?;

        self.resampler
            .resize(&intermediate, self.aspect.width, self.aspect.height)
    }

    // Lossy JPEG round-trip retained from the legacy pipeline. Drops alpha
    // (the intermediate is 24-bit RGB) and stamps 72 dpi; the only other
    // observable effect is quantization of the intermediate.
    fn reencode(&self, raster: RasterImage) -> Result<RasterImage> {
        let rgb = DynamicImage::ImageRgb8(raster.into_image().to_rgb8());

        let mut buffer = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buffer, self.reencode_quality);
        rgb.write_with_encoder(encoder)?;

        let decoded = image::load_from_memory_with_format(buffer.get_ref(), ImageFormat::Jpeg)?;
        Ok(RasterImage::with_resolution(decoded, INTERMEDIATE_DPI))
    }
}

impl Default for FitCropper {
    fn default() -> Self {
        Self::new(TargetAspect::default())
    }
}
