use crate::{Interval, Vec3};

/// A ray in 3D space with origin, direction, and valid parametric range.
///
/// Rays represent the half-line `origin + t * direction` for `t` inside
/// `t_range`. The direction is not required to be normalized. Rays are
/// created fresh per camera sample or scatter event and never mutated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    t_range: Interval,
}

impl Ray {
    /// Create a new ray valid for all positive `t`.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self::with_range(origin, direction, Interval::POSITIVE)
    }

    /// Create a new ray restricted to `t_range`.
    #[inline]
    pub fn with_range(origin: Vec3, direction: Vec3, t_range: Interval) -> Self {
        Self {
            origin,
            direction,
            t_range,
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the parametric interval in which hits are considered.
    #[inline]
    pub fn t_range(&self) -> Interval {
        self.t_range
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
