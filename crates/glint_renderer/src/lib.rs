//! Glint Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for spheres with diffuse, metal and glass
//! materials. Rendering is split into buckets that run in parallel on
//! rayon; every pixel draws from its own seeded random stream, so the
//! output only depends on the scene and the seed.

mod bucket;
mod bvh;
mod camera;
mod environment;
mod hittable;
mod integrator;
mod material;
mod renderer;
mod sampling;
mod scene;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use bvh::BvhNode;
pub use camera::{Camera, CameraBuilder};
pub use environment::Environment;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use integrator::{ray_color, HIT_EPSILON};
pub use material::{Dielectric, Lambertian, Material, Metal, Scatter};
pub use renderer::{render, render_pixel, ImageBuffer, RenderConfig, RenderControl, RenderError};
pub use sampling::pixel_rng;
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export the math types used throughout the public API
pub use glint_math::{Aabb, Color, Interval, Ray, Vec3};
