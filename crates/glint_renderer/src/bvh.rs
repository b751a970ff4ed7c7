//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! Binary tree of boxes over the scene's hittables. A ray is tested
//! against a node's box before anything inside it, so most of the scene
//! is rejected with a few slab tests.

use crate::{HitRecord, Hittable};
use glint_math::{Aabb, Interval, Ray};

/// Maximum primitives per leaf node before splitting.
const LEAF_MAX_SIZE: usize = 4;

/// BVH node - either a branch with two children or a leaf with primitives.
///
/// Using an enum keeps traversal free of dynamic dispatch until a leaf is
/// reached.
pub enum BvhNode {
    /// Internal node with two children.
    Branch {
        left: Box<BvhNode>,
        right: Box<BvhNode>,
        bbox: Aabb,
    },
    /// Leaf node with a small number of primitives.
    Leaf {
        objects: Vec<Box<dyn Hittable>>,
        bbox: Aabb,
    },
    /// Empty node (for edge cases).
    Empty,
}

impl BvhNode {
    /// Create a BVH from a list of hittable objects.
    pub fn new(objects: Vec<Box<dyn Hittable>>) -> Self {
        if objects.is_empty() {
            return BvhNode::Empty;
        }
        let count = objects.len();
        let bvh = Self::build(objects);
        log::debug!(
            "Built BVH over {} objects: {} nodes, depth {}",
            count,
            bvh.node_count(),
            bvh.depth()
        );
        bvh
    }

    /// Recursive BVH construction.
    ///
    /// Median split: sort objects by centroid on the longest axis of the
    /// centroid bounds, split in half, recurse.
    fn build(mut objects: Vec<Box<dyn Hittable>>) -> Self {
        let n = objects.len();

        let bounds = objects.iter().fold(Aabb::EMPTY, |acc, o| {
            Aabb::surrounding(&acc, &o.bounding_box())
        });

        // Create leaf for small sets
        if n <= LEAF_MAX_SIZE {
            return BvhNode::Leaf {
                objects,
                bbox: bounds,
            };
        }

        // Choose split axis based on centroid spread
        let centroid_bounds = objects.iter().fold(Aabb::EMPTY, |acc, obj| {
            let c = obj.bounding_box().centroid();
            Aabb::surrounding(&acc, &Aabb::from_points(c, c))
        });
        let axis = centroid_bounds.longest_axis();

        objects.sort_unstable_by(|a, b| {
            let a_val = a.bounding_box().centroid()[axis];
            let b_val = b.bounding_box().centroid()[axis];
            a_val.total_cmp(&b_val)
        });

        // Split at midpoint
        let right_objects = objects.split_off(n / 2);
        let left = Self::build(objects);
        let right = Self::build(right_objects);

        BvhNode::Branch {
            left: Box::new(left),
            right: Box::new(right),
            bbox: bounds,
        }
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            BvhNode::Empty => 0,
            BvhNode::Leaf { .. } => 1,
            BvhNode::Branch { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            BvhNode::Empty => 0,
            BvhNode::Leaf { .. } => 1,
            BvhNode::Branch { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl Hittable for BvhNode {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            BvhNode::Empty => None,

            BvhNode::Leaf { objects, bbox } => {
                if !bbox.hit(ray, ray_t) {
                    return None;
                }

                let mut closest: Option<HitRecord<'_>> = None;
                for obj in objects {
                    let max = closest.as_ref().map_or(ray_t.max, |rec| rec.t);
                    if let Some(rec) = obj.hit(ray, ray_t.with_max(max)) {
                        closest = Some(rec);
                    }
                }
                closest
            }

            BvhNode::Branch { left, right, bbox } => {
                if !bbox.hit(ray, ray_t) {
                    return None;
                }

                let hit_left = left.hit(ray, ray_t);

                // Only check right up to closest hit
                let right_max = hit_left.as_ref().map_or(ray_t.max, |rec| rec.t);
                let hit_right = right.hit(ray, ray_t.with_max(right_max));

                hit_right.or(hit_left)
            }
        }
    }

    fn bounding_box(&self) -> Aabb {
        match self {
            BvhNode::Empty => Aabb::EMPTY,
            BvhNode::Leaf { bbox, .. } => *bbox,
            BvhNode::Branch { bbox, .. } => *bbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HittableList, Lambertian, Material, Sphere};
    use glint_math::{Color, Vec3};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Arc;

    fn grey() -> Arc<Material> {
        Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)).into())
    }

    fn forward() -> Interval {
        Interval::new(0.001, f32::INFINITY)
    }

    #[test]
    fn test_bvh_empty() {
        let bvh = BvhNode::new(vec![]);
        assert!(matches!(bvh, BvhNode::Empty));
        assert!(bvh.hit(&Ray::new(Vec3::ZERO, Vec3::X), forward()).is_none());
    }

    #[test]
    fn test_bvh_single_sphere() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());

        let objects: Vec<Box<dyn Hittable>> = vec![Box::new(sphere)];
        let bvh = BvhNode::new(objects);

        // Should create a leaf
        assert!(matches!(bvh, BvhNode::Leaf { .. }));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(bvh.hit(&ray, forward()).is_some());
    }

    #[test]
    fn test_bvh_multiple_spheres() {
        let material = grey();
        let spheres: Vec<Box<dyn Hittable>> = (0..10)
            .map(|i| {
                let sphere = Sphere::new(Vec3::new(i as f32, 0.0, -5.0), 0.5, material.clone());
                Box::new(sphere) as Box<dyn Hittable>
            })
            .collect();

        let bvh = BvhNode::new(spheres);
        assert!(matches!(bvh, BvhNode::Branch { .. }));
        assert!(bvh.depth() >= 2);

        // Test ray that hits sphere at x=5
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = bvh.hit(&ray, forward()).unwrap();

        // Hit point should be near z = -4.5 (sphere at z=-5, radius 0.5)
        assert!((rec.p.z - (-4.5)).abs() < 0.01);
    }

    #[test]
    fn test_bvh_matches_linear_list() {
        let mut rng = StdRng::seed_from_u64(42);
        let material = grey();
        let make_spheres = |rng: &mut StdRng| -> Vec<(Vec3, f32)> {
            (0..60)
                .map(|_| {
                    let center = Vec3::new(
                        rng.gen_range(-10.0..10.0),
                        rng.gen_range(-10.0..10.0),
                        rng.gen_range(-20.0..-5.0),
                    );
                    (center, rng.gen_range(0.2..1.5))
                })
                .collect()
        };
        let layout = make_spheres(&mut rng);

        let boxed = |layout: &[(Vec3, f32)]| -> Vec<Box<dyn Hittable>> {
            layout
                .iter()
                .map(|(c, r)| Box::new(Sphere::new(*c, *r, material.clone())) as Box<dyn Hittable>)
                .collect()
        };
        let bvh = BvhNode::new(boxed(&layout));
        let list = HittableList::from(boxed(&layout));

        for _ in 0..500 {
            let direction = Vec3::new(
                rng.gen_range(-0.8..0.8),
                rng.gen_range(-0.8..0.8),
                -1.0,
            );
            let ray = Ray::new(Vec3::ZERO, direction);

            let from_bvh = bvh.hit(&ray, forward()).map(|rec| rec.t);
            let from_list = list.hit(&ray, forward()).map(|rec| rec.t);
            assert_eq!(from_bvh, from_list);
        }
    }
}
