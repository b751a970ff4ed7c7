//! Color conversion helpers.
//!
//! Colors stay linear and unclamped through the whole render. These
//! helpers are applied once, at final pixel write.

use crate::Vec3;

/// Color type alias (linear RGB, channels nominally 0-1)
pub type Color = Vec3;

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Clamp a value to [0, 1] range. NaN maps to 0.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Convert a linear color to gamma-corrected 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (256.0 * clamp_01(linear_to_gamma(c)).min(0.999)) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_clamp_01() {
        assert_eq!(clamp_01(-0.5), 0.0);
        assert_eq!(clamp_01(0.5), 0.5);
        assert_eq!(clamp_01(7.0), 1.0);
        assert_eq!(clamp_01(f32::NAN), 0.0);
    }

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(color_to_rgb8(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb8(Color::splat(4.0)), [255, 255, 255]);
        assert_eq!(color_to_rgb8(Color::new(0.25, 0.0, 0.0)), [128, 0, 0]);
    }
}
