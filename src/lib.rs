mod core;
mod transforms;
mod utils;

pub use crate::core::{
    EdgePolicy, EngineConfig, EngineError, GeometryEngine, RasterImage, Region, Resolution,
    Result, TargetAspect, TransformFailure, validate_config,
};
pub use crate::transforms::{
    FitCropper, MarginCropper, Resampler, crop_margins, crop_symmetric, fit_crop, resize,
    resize_to_height, resize_to_width,
};
pub use crate::utils::{
    calculate_aspect_ratio, centered_origin, fit_window, proportional_height, proportional_width,
    validate_target,
};

pub mod prelude {
    pub use crate::{
        EngineConfig, GeometryEngine, RasterImage,
        FitCropper, MarginCropper, Resampler,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
