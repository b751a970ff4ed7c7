//! Glint math - vectors, colors, rays and bounding boxes.
//!
//! `Vec3` comes straight from glam and doubles as point, direction and
//! linear RGB color. Everything in this crate is a plain value type.

// Re-export glam for convenience
pub use glam::*;

mod aabb;
mod color;
mod interval;
mod ray;
mod vector;

pub use aabb::Aabb;
pub use color::{clamp_01, color_to_rgb8, linear_to_gamma, Color};
pub use interval::Interval;
pub use ray::Ray;
pub use vector::{near_zero, reflect, refract, unit_vector};
