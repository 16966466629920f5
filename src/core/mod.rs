// snapcrop/src/core/mod.rs
mod engine;

pub use engine::GeometryEngine;

use image::DynamicImage;
use thiserror::Error;

/// Raster resolution metadata in dots per inch.
///
/// Carried through every transformation but never consulted by the
/// geometry math itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Resolution {
    /// Default screen resolution assigned to rasters constructed without
    /// explicit metadata.
    pub const SCREEN: Resolution = Resolution {
        horizontal: 96.0,
        vertical: 96.0,
    };

    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::SCREEN
    }
}

/// An immutable in-memory raster: pixel buffer plus resolution metadata.
///
/// Transformations never mutate a `RasterImage` in place; every operation
/// allocates and returns a fully independent result. The pixel buffer is
/// owned, so sources may be shared read-only across threads.
#[derive(Debug, Clone)]
pub struct RasterImage {
    image: DynamicImage,
    resolution: Resolution,
}

impl RasterImage {
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image,
            resolution: Resolution::default(),
        }
    }

    pub fn with_resolution(image: DynamicImage, resolution: Resolution) -> Self {
        Self { image, resolution }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn as_image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}

impl From<DynamicImage> for RasterImage {
    fn from(image: DynamicImage) -> Self {
        Self::new(image)
    }
}

/// Axis-aligned source window, in pixels. Transient parameter only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Fixed output aspect pair for the aspect-fit crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetAspect {
    pub width: u32,
    pub height: u32,
}

impl TargetAspect {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for TargetAspect {
    fn default() -> Self {
        // Banner thumbnail dimensions inherited from the first deployment.
        Self {
            width: 500,
            height: 200,
        }
    }
}

/// Policy for resampling-kernel taps that fall outside the source bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Mirror-tile the source (tile-flip wrap). Matches the legacy
    /// platform default for exact resizes.
    #[default]
    MirrorTile,
    /// Repeat the nearest edge pixel.
    Clamp,
}

impl EdgePolicy {
    /// Map a possibly out-of-bounds tap index into `0..len`.
    ///
    /// `len` must be positive; callers validate source dimensions first.
    pub fn map_index(self, index: i64, len: u32) -> u32 {
        let len = i64::from(len);
        match self {
            EdgePolicy::Clamp => index.clamp(0, len - 1) as u32,
            EdgePolicy::MirrorTile => {
                let period = 2 * len;
                let phase = index.rem_euclid(period);
                let mapped = if phase < len { phase } else { period - 1 - phase };
                mapped as u32
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub edge_policy: EdgePolicy,
    pub target_aspect: TargetAspect,
    pub reencode_quality: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            edge_policy: EdgePolicy::MirrorTile,
            target_aspect: TargetAspect::default(),
            reencode_quality: 75,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target_aspect.width == 0 || self.target_aspect.height == 0 {
            return Err(EngineError::InvalidDimension(
                "target aspect dimensions must be positive".to_string(),
            ));
        }

        if self.target_aspect.width > 100_000 || self.target_aspect.height > 100_000 {
            return Err(EngineError::InvalidDimension(
                "target aspect too large (max 100,000 pixels)".to_string(),
            ));
        }

        if self.reencode_quality == 0 || self.reencode_quality > 100 {
            return Err(EngineError::InvalidDimension(
                "re-encode quality must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("degenerate source: {0}")]
    DegenerateSource(String),

    #[error("codec error: {0}")]
    Codec(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Opaque outcome of a failed aspect-fit crop. The pipeline swallows the
/// underlying cause; callers only learn that the crop did not happen.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("aspect-fit crop failed")]
pub struct TransformFailure;

pub fn validate_config(config: &EngineConfig) -> Result<()> {
    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_tile_reflects_within_first_period() {
        let policy = EdgePolicy::MirrorTile;
        // For len = 4 the column left of zero mirrors column zero.
        assert_eq!(policy.map_index(-1, 4), 0);
        assert_eq!(policy.map_index(-2, 4), 1);
        assert_eq!(policy.map_index(4, 4), 3);
        assert_eq!(policy.map_index(5, 4), 2);
    }

    #[test]
    fn mirror_tile_has_period_of_twice_len() {
        let policy = EdgePolicy::MirrorTile;
        for index in -20i64..20 {
            assert_eq!(policy.map_index(index, 5), policy.map_index(index + 10, 5));
        }
    }

    #[test]
    fn clamp_repeats_edges() {
        let policy = EdgePolicy::Clamp;
        assert_eq!(policy.map_index(-7, 4), 0);
        assert_eq!(policy.map_index(0, 4), 0);
        assert_eq!(policy.map_index(3, 4), 3);
        assert_eq!(policy.map_index(9, 4), 3);
    }

    #[test]
    fn in_bounds_indices_map_to_themselves() {
        for policy in [EdgePolicy::MirrorTile, EdgePolicy::Clamp] {
            for index in 0..6i64 {
                assert_eq!(policy.map_index(index, 6), index as u32);
            }
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_aspect_dimension_rejected() {
        let config = EngineConfig {
            target_aspect: TargetAspect::new(0, 200),
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidDimension(_))
        ));
    }

    #[test]
    fn out_of_range_quality_rejected() {
        let config = EngineConfig {
            reencode_quality: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            reencode_quality: 101,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn raster_carries_resolution() {
        let raster = RasterImage::with_resolution(
            DynamicImage::ImageRgba8(image::RgbaImage::new(4, 4)),
            Resolution::new(300.0, 300.0),
        );
        assert_eq!(raster.resolution(), Resolution::new(300.0, 300.0));
        assert_eq!(raster.dimensions(), (4, 4));
    }
}
