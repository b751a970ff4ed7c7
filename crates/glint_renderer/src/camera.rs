//! Camera for ray generation.

use crate::sampling::random_in_unit_disk;
use glint_core::{CameraDescription, ImageSettings};
use glint_math::{unit_vector, Ray, Vec3};
use rand::RngCore;

/// Thin-lens camera.
///
/// All viewport geometry is derived once when the camera is built; the
/// camera is immutable afterwards and shared by every render thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Build the camera described by a scene file.
    ///
    /// The description is expected to be validated already.
    pub fn from_description(desc: &CameraDescription, image: &ImageSettings) -> Self {
        CameraBuilder::new()
            .with_position(desc.look_from, desc.look_at, desc.vup)
            .with_lens(desc.vfov, desc.aperture, desc.resolved_focus_dist())
            .with_aspect_ratio(desc.resolved_aspect_ratio(image))
            .build()
    }

    /// Generate a ray through image-plane coordinates `(s, t)`.
    ///
    /// `s` runs left to right and `t` bottom to top, both over [0, 1].
    /// The origin is jittered over the lens disk only when the aperture is
    /// open, so a pinhole camera draws no random numbers here.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3::ZERO
        };

        let origin = self.origin + offset;
        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        Ray::new(origin, target - origin)
    }

    /// Eye position.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }
}

impl Default for Camera {
    fn default() -> Self {
        CameraBuilder::new().build()
    }
}

/// Builder for [`Camera`].
///
/// Defaults to a pinhole camera at the origin looking down -Z with a
/// 90 degree vertical field of view and a square image.
#[derive(Debug, Clone)]
pub struct CameraBuilder {
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,
    vfov: f32,          // Vertical field of view in degrees
    aperture: f32,      // Lens diameter
    focus_dist: f32,    // Distance from camera to plane of perfect focus
    aspect_ratio: f32,
}

impl CameraBuilder {
    pub fn new() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vfov: 90.0,
            aperture: 0.0,
            focus_dist: 1.0,
            aspect_ratio: 1.0,
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, aperture: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Set the width / height ratio of the viewport.
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn build(self) -> Camera {
        // Calculate viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = self.aspect_ratio * viewport_height;

        // Calculate camera basis vectors
        let w = unit_vector(self.look_from - self.look_at);
        let u = unit_vector(self.vup.cross(w));
        let v = w.cross(u);

        // Viewport spans live on the focus plane
        let horizontal = self.focus_dist * viewport_width * u;
        let vertical = self.focus_dist * viewport_height * v;
        let lower_left_corner =
            self.look_from - horizontal / 2.0 - vertical / 2.0 - self.focus_dist * w;

        Camera {
            origin: self.look_from,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: self.aperture / 2.0,
        }
    }
}

impl Default for CameraBuilder {
    fn default() -> Self {
        Self::new()
    }
}
