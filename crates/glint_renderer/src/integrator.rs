//! Recursive path tracing integrator.

use crate::{Environment, Hittable};
use glint_math::{near_zero, Color, Interval, Ray};
use rand::RngCore;

/// Smallest accepted hit distance for shading rays.
///
/// Keeps a scattered ray from re-hitting the surface it just left.
pub const HIT_EPSILON: f32 = 0.001;

/// Compute the color seen by a ray.
///
/// Each level of recursion is one light bounce. The recursion stops when
/// `depth` reaches zero (black), when a material absorbs the ray (black),
/// or when the ray escapes to the environment.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    environment: &Environment,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    // Out of bounces: no more light is gathered
    if depth == 0 {
        return Color::ZERO;
    }

    // Degenerate direction carries no light
    if near_zero(ray.direction()) {
        return Color::ZERO;
    }

    let range = ray.t_range();
    let ray_t = Interval::new(range.min.max(HIT_EPSILON), range.max);

    let Some(rec) = world.hit(ray, ray_t) else {
        return environment.color(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(scatter) => {
            scatter.attenuation
                * ray_color(&scatter.scattered, world, environment, depth - 1, rng)
        }
        None => Color::ZERO,
    }
}
