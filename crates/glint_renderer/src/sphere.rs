//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use glint_math::{Aabb, Interval, Ray, Vec3};
use std::sync::Arc;

/// A sphere primitive sharing its material with other surfaces.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
    bbox: Aabb,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius is expected to be positive; scene validation rejects
    /// anything else before spheres are built.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        let rvec = Vec3::splat(radius.abs());
        let bbox = Aabb::from_points(center - rvec, center + rvec);

        Self {
            center,
            radius,
            material,
            bbox,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // Solve |origin + t*dir - center|^2 = r^2 using the half-b form.
        // In f64: for large radii `|oc|^2 - r^2` cancels in f32 and puts
        // hit points inside the surface.
        let origin = ray.origin().as_dvec3();
        let direction = ray.direction().as_dvec3();
        let center = self.center.as_dvec3();
        let radius = f64::from(self.radius);

        let oc = center - origin;
        let a = direction.length_squared();
        if a == 0.0 {
            return None;
        }
        let h = direction.dot(oc);
        let c = oc.length_squared() - radius * radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root as f32) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root as f32) {
                return None;
            }
        }

        let outward_normal = ((origin + root * direction - center) / radius).as_vec3();
        Some(HitRecord::new(ray, root as f32, outward_normal, &self.material))
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::HIT_EPSILON;
    use crate::material::Lambertian;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn unit_sphere_at(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(
            center,
            radius,
            Arc::new(Lambertian::new(Vec3::new(0.5, 0.5, 0.5)).into()),
        )
    }

    fn forward() -> Interval {
        Interval::new(0.001, f32::INFINITY)
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, forward()).unwrap();
        assert!((rec.t - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!(rec.front_face);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, forward()).is_none());

        // Sphere entirely behind the ray origin
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.hit(&ray, forward()).is_none());
    }

    #[test]
    fn test_sphere_tangent_ray() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -1.0), 0.5);
        // Grazes the top of the sphere; must not produce NaN
        let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 0.0, -1.0));
        if let Some(rec) = sphere.hit(&ray, forward()) {
            assert!(rec.p.is_finite());
            assert!(rec.normal.is_finite());
        }
    }

    #[test]
    fn test_sphere_zero_direction() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(sphere.hit(&ray, forward()).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = unit_sphere_at(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, forward()).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-5);
        assert!(!rec.front_face);
        // Normal faces back toward the origin
        assert!((rec.normal - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_center_ray_normal_parallel_to_direction() {
        let centers = [
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(3.0, -2.0, 5.0),
            Vec3::new(-10.0, 4.0, 0.5),
        ];
        let origin = Vec3::new(0.2, 0.1, 8.0);

        for (i, center) in centers.into_iter().enumerate() {
            let sphere = unit_sphere_at(center, 0.25 + i as f32);
            let direction = center - origin;
            let ray = Ray::new(origin, direction);

            let rec = sphere.hit(&ray, forward()).unwrap();
            assert!((rec.normal.length() - 1.0).abs() < 1e-4);
            assert!(rec.normal.cross(direction.normalize()).length() < 1e-4);
            assert!(rec.normal.dot(direction) < 0.0);
        }
    }

    #[test]
    fn test_diffuse_bounce_leaves_large_sphere() {
        // Ground sphere of the random preset seen from its camera
        let ground = unit_sphere_at(Vec3::new(0.0, -1000.0, 0.0), 1000.0);
        let eye = Vec3::new(13.0, 2.0, 3.0);
        let mut rng = StdRng::seed_from_u64(17);

        let mut rehits = 0;
        for _ in 0..20_000 {
            let target = Vec3::new(rng.gen_range(-11.0..11.0), 0.0, rng.gen_range(-11.0..11.0));
            let ray = Ray::new(eye, target - eye);
            let rec = ground.hit(&ray, forward()).unwrap();
            assert!(rec.front_face);

            let scatter = rec.material.scatter(&ray, &rec, &mut rng).unwrap();
            let bounce = Interval::new(HIT_EPSILON, f32::INFINITY);
            if ground.hit(&scatter.scattered, bounce).is_some() {
                rehits += 1;
            }
        }
        assert_eq!(rehits, 0);
    }

    #[test]
    fn test_large_sphere_hit_point_on_surface() {
        let ground = unit_sphere_at(Vec3::new(0.0, -1000.0, 0.0), 1000.0);
        let ray = Ray::new(Vec3::new(13.0, 2.0, 3.0), Vec3::new(-9.0, -2.0, -7.5));

        let rec = ground.hit(&ray, forward()).unwrap();
        let distance = (rec.p.as_dvec3() - ground.center().as_dvec3()).length();
        assert!((distance - 1000.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_is_idempotent() {
        let sphere = unit_sphere_at(Vec3::new(0.3, -0.2, -3.0), 1.1);
        let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.1, -0.2, -1.0));

        let first = sphere.hit(&ray, forward());
        let second = sphere.hit(&ray, forward());
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
