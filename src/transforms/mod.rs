// snapcrop/src/transforms/mod.rs
mod cropper;
mod fit_crop;
mod resampler;

pub use cropper::MarginCropper;
pub use fit_crop::FitCropper;
pub use resampler::Resampler;

use crate::core::{RasterImage, Result, TransformFailure};

// Free-function surface running default-configured components. Each call
// is stateless; construction is cheap.

/// Resample `image` to exactly `width` x `height`.
pub fn resize(image: &RasterImage, width: u32, height: u32) -> Result<RasterImage> {
    Resampler::default().resize(image, width, height)
}

/// Resize preserving aspect ratio so the result is exactly `height` tall.
pub fn resize_to_height(image: &RasterImage, height: u32) -> Result<RasterImage> {
    Resampler::default().resize_to_height(image, height)
}

/// Resize preserving aspect ratio so the result is exactly `width` wide.
pub fn resize_to_width(image: &RasterImage, width: u32) -> Result<RasterImage> {
    Resampler::default().resize_to_width(image, width)
}

/// Remove fixed margins from each edge.
pub fn crop_margins(
    image: &RasterImage,
    left: u32,
    right: u32,
    top: u32,
    bottom: u32,
) -> Result<RasterImage> {
    MarginCropper::new().crop_margins(image, left, right, top, bottom)
}

/// Remove `x` pixels from both sides and `y` from top and bottom.
pub fn crop_symmetric(image: &RasterImage, x: u32, y: u32) -> Result<RasterImage> {
    MarginCropper::new().crop_symmetric(image, x, y)
}

/// Centered aspect-fit crop to the default 500x200 target.
pub fn fit_crop(image: &RasterImage) -> std::result::Result<RasterImage, TransformFailure> {
    FitCropper::default().fit_crop(image)
}

pub mod prelude {
    pub use super::{FitCropper, MarginCropper, Resampler};
}
