// snapcrop/src/utils/mod.rs
use crate::core::{EngineError, Result, TargetAspect};

/// Upper bound on any produced dimension, matching the loader-side limit
/// the rest of the toolchain enforces.
pub const MAX_DIMENSION: u32 = 100_000;

pub fn calculate_aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        0.0
    } else {
        width as f32 / height as f32
    }
}

pub fn validate_target(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimension(
            "target width and height must be positive".to_string(),
        ));
    }

    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(EngineError::InvalidDimension(
            "dimensions too large (max 100,000 pixels)".to_string(),
        ));
    }

    Ok(())
}

/// Width that keeps the source aspect ratio at `target_height`.
///
/// Truncating integer math: `floor(target_height * width / height)`. The
/// truncation (rather than rounding to nearest) is deliberate and
/// observable in the output dimensions.
pub fn proportional_width(target_height: u32, source_width: u32, source_height: u32) -> Result<u32> {
    if source_height == 0 {
        return Err(EngineError::DegenerateSource(
            "source height is zero".to_string(),
        ));
    }

    if target_height == 0 {
        return Err(EngineError::InvalidDimension(
            "target height must be positive".to_string(),
        ));
    }

    let width = (u64::from(target_height) * u64::from(source_width)) / u64::from(source_height);

    if width == 0 {
        return Err(EngineError::InvalidDimension(format!(
            "computed width truncates to zero at target height {}",
            target_height
        )));
    }

    if width > u64::from(MAX_DIMENSION) {
        return Err(EngineError::InvalidDimension(
            "dimensions too large (max 100,000 pixels)".to_string(),
        ));
    }

    Ok(width as u32)
}

/// Height that keeps the source aspect ratio at `target_width`. Same
/// truncation policy as [`proportional_width`].
pub fn proportional_height(target_width: u32, source_width: u32, source_height: u32) -> Result<u32> {
    if source_width == 0 {
        return Err(EngineError::DegenerateSource(
            "source width is zero".to_string(),
        ));
    }

    if target_width == 0 {
        return Err(EngineError::InvalidDimension(
            "target width must be positive".to_string(),
        ));
    }

    let height = (u64::from(target_width) * u64::from(source_height)) / u64::from(source_width);

    if height == 0 {
        return Err(EngineError::InvalidDimension(format!(
            "computed height truncates to zero at target width {}",
            target_width
        )));
    }

    if height > u64::from(MAX_DIMENSION) {
        return Err(EngineError::InvalidDimension(
            "dimensions too large (max 100,000 pixels)".to_string(),
        ));
    }

    Ok(height as u32)
}

/// Largest window matching `aspect` that fits the source on its binding
/// axis, never smaller than the aspect dimensions themselves.
pub fn fit_window(source_width: u32, source_height: u32, aspect: TargetAspect) -> (u32, u32) {
    let width_ratio = f64::from(source_width) / f64::from(aspect.width);
    let height_ratio = f64::from(source_height) / f64::from(aspect.height);

    // The smaller ratio is the binding axis.
    let ratio = if height_ratio > width_ratio {
        width_ratio
    } else {
        height_ratio
    };

    let window_width = (ratio * f64::from(aspect.width)).round() as u32;
    let window_height = (ratio * f64::from(aspect.height)).round() as u32;

    (
        window_width.max(aspect.width),
        window_height.max(aspect.height),
    )
}

/// Origin that centers a window of `window_extent` inside `source_extent`,
/// truncated, floored at zero when the window overhangs the source.
pub fn centered_origin(source_extent: u32, window_extent: u32) -> u32 {
    source_extent.saturating_sub(window_extent) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineError;

    #[test]
    fn proportional_width_truncates() {
        // 499 * 1024 / 768 = 665.33… → 665, not 666.
        assert_eq!(proportional_width(499, 1024, 768).unwrap(), 665);
    }

    #[test]
    fn proportional_height_truncates() {
        // 665 * 768 / 1024 = 498.75 → 498, not 499.
        assert_eq!(proportional_height(665, 1024, 768).unwrap(), 498);
    }

    #[test]
    fn proportional_width_zero_source_height_is_degenerate() {
        assert!(matches!(
            proportional_width(100, 1024, 0),
            Err(EngineError::DegenerateSource(_))
        ));
    }

    #[test]
    fn proportional_height_zero_source_width_is_degenerate() {
        assert!(matches!(
            proportional_height(100, 0, 768),
            Err(EngineError::DegenerateSource(_))
        ));
    }

    #[test]
    fn proportional_zero_target_is_invalid() {
        assert!(matches!(
            proportional_width(0, 1024, 768),
            Err(EngineError::InvalidDimension(_))
        ));
        assert!(matches!(
            proportional_height(0, 1024, 768),
            Err(EngineError::InvalidDimension(_))
        ));
    }

    #[test]
    fn proportional_rejects_truncation_to_zero() {
        // Extremely wide source: 2 * 1 / 1000 truncates to 0.
        assert!(matches!(
            proportional_height(2, 1000, 1),
            Err(EngineError::InvalidDimension(_))
        ));
    }

    #[test]
    fn fit_window_constrains_by_width_for_tall_sources() {
        // 1000x1000 against 500x200: height ratio 5.0 > width ratio 2.0,
        // so the width ratio binds → 1000x400.
        let aspect = TargetAspect::default();
        assert_eq!(fit_window(1000, 1000, aspect), (1000, 400));
    }

    #[test]
    fn fit_window_constrains_by_height_for_wide_sources() {
        // 2000x300 against 500x200: width ratio 4.0 > height ratio 1.5,
        // so the height ratio binds → 750x300.
        let aspect = TargetAspect::default();
        assert_eq!(fit_window(2000, 300, aspect), (750, 300));
    }

    #[test]
    fn fit_window_never_shrinks_below_aspect() {
        let aspect = TargetAspect::default();
        assert_eq!(fit_window(100, 100, aspect), (500, 200));
        assert_eq!(fit_window(499, 199, aspect), (500, 200));
    }

    #[test]
    fn fit_window_exact_aspect_source() {
        let aspect = TargetAspect::default();
        assert_eq!(fit_window(1000, 400, aspect), (1000, 400));
    }

    #[test]
    fn centered_origin_splits_slack() {
        assert_eq!(centered_origin(1000, 400), 300);
        // Odd slack truncates.
        assert_eq!(centered_origin(1001, 400), 300);
    }

    #[test]
    fn centered_origin_floors_at_zero() {
        assert_eq!(centered_origin(100, 500), 0);
    }

    #[test]
    fn validate_target_rejects_zero_and_oversize() {
        assert!(validate_target(0, 100).is_err());
        assert!(validate_target(100, 0).is_err());
        assert!(validate_target(MAX_DIMENSION + 1, 100).is_err());
        assert!(validate_target(800, 450).is_ok());
    }

    #[test]
    fn aspect_ratio_handles_zero_height() {
        assert_eq!(calculate_aspect_ratio(1024, 0), 0.0);
        assert!((calculate_aspect_ratio(1024, 768) - 1.333_333_3).abs() < 1e-6);
    }
}
