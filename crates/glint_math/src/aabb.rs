use crate::{Interval, Ray, Vec3};

/// Minimum box thickness along any axis.
const MIN_EXTENT: f32 = 0.0001;

/// Axis-aligned bounding box for the BVH.
///
/// Stored as opposite corners so the slab test runs on whole vectors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Contains nothing; the identity for [`Aabb::surrounding`].
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Create an AABB from two corner points.
    ///
    /// Axes thinner than a small minimum are padded symmetrically so flat
    /// boxes can still be hit.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let mut min = a.min(b);
        let mut max = a.max(b);
        let pad = (Vec3::splat(MIN_EXTENT) - (max - min)).max(Vec3::ZERO) * 0.5;
        min -= pad;
        max += pad;
        Self { min, max }
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            min: box0.min.min(box1.min),
            max: box0.max.max(box1.max),
        }
    }

    /// Test if a ray intersects this AABB within the given interval.
    ///
    /// Slab method on all three axes at once. A zero direction component
    /// gives infinite slab distances, so parallel rays are accepted only
    /// when their origin lies strictly between that axis' planes.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> bool {
        let inv_dir = r.direction().recip();
        let t0 = (self.min - r.origin()) * inv_dir;
        let t1 = (self.max - r.origin()) * inv_dir;

        let t_enter = t0.min(t1).max_element().max(ray_t.min);
        let t_exit = t0.max(t1).min_element().min(ray_t.max);
        t_enter < t_exit
    }

    /// Edge lengths along each axis.
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns the index (0=X, 1=Y, 2=Z) of the axis with the longest extent.
    pub fn longest_axis(&self) -> usize {
        let e = self.extent();
        if e.x > e.y && e.x > e.z {
            0
        } else if e.y > e.z {
            1
        } else {
            2
        }
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(Vec3::new(10.0, 0.0, 10.0), Vec3::new(0.0, 10.0, 0.0));

        assert_eq!(aabb.min, Vec3::ZERO);
        assert_eq!(aabb.max, Vec3::splat(10.0));
    }

    #[test]
    fn test_aabb_flat_box_is_padded() {
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
        assert!(aabb.extent().z > 0.0);
        assert_eq!(aabb.extent().x, 1.0);
        assert_eq!(aabb.centroid().z, 0.0);
    }

    #[test]
    fn test_aabb_surrounding() {
        let box1 = Aabb::from_points(Vec3::ZERO, Vec3::new(5.0, 5.0, 5.0));
        let box2 = Aabb::from_points(Vec3::new(3.0, 3.0, 3.0), Vec3::new(10.0, 10.0, 10.0));
        let surrounding = Aabb::surrounding(&box1, &box2);

        assert_eq!(surrounding.min, Vec3::ZERO);
        assert_eq!(surrounding.max, Vec3::splat(10.0));
        assert_eq!(Aabb::surrounding(&Aabb::EMPTY, &box1), box1);
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        // Ray pointing at center
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Ray pointing away
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Ray missing the box
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Box lies beyond the interval
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(!aabb.hit(&ray, Interval::new(0.0, 2.0)));

        // Origin inside the box
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.3, -0.2, 1.0));
        assert!(aabb.hit(&ray, Interval::new(0.001, f32::INFINITY)));
    }

    #[test]
    fn test_aabb_hit_parallel_ray() {
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::ONE);
        // Never moves in x: hit only if x is already inside the slab
        let inside = Ray::new(Vec3::new(0.5, 0.5, -2.0), Vec3::Z);
        let outside = Ray::new(Vec3::new(1.5, 0.5, -2.0), Vec3::Z);
        assert!(aabb.hit(&inside, Interval::new(0.0, 10.0)));
        assert!(!aabb.hit(&outside, Interval::new(0.0, 10.0)));
    }

    #[test]
    fn test_aabb_centroid() {
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::new(10.0, 10.0, 10.0));
        assert_eq!(aabb.centroid(), Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_aabb_longest_axis() {
        let aabb_x = Aabb::from_points(Vec3::ZERO, Vec3::new(10.0, 1.0, 1.0));
        assert_eq!(aabb_x.longest_axis(), 0);

        let aabb_y = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 10.0, 1.0));
        assert_eq!(aabb_y.longest_axis(), 1);

        let aabb_z = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 1.0, 10.0));
        assert_eq!(aabb_z.longest_axis(), 2);
    }
}
