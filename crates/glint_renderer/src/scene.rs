//! The immutable scene handed to the renderer.

use crate::{BvhNode, Camera, Environment, Hittable, HittableList, Material, Sphere};
use glint_core::{SceneDescription, SceneError};
use log::info;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Everything needed to shade a pixel.
///
/// Built once before rendering and only read afterwards, so it can be
/// shared across worker threads by reference.
pub struct Scene {
    world: Box<dyn Hittable>,
    camera: Camera,
    environment: Environment,
    width: u32,
    height: u32,
}

impl Scene {
    pub fn new(
        world: Box<dyn Hittable>,
        camera: Camera,
        environment: Environment,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            world,
            camera,
            environment,
            width,
            height,
        }
    }

    /// Validate a description and build the render scene from it.
    ///
    /// Each named material is created once and shared by every sphere that
    /// references it.
    pub fn from_description(desc: &SceneDescription) -> Result<Self, SceneError> {
        let start = Instant::now();
        desc.validate()?;

        let materials: HashMap<&str, Arc<Material>> = desc
            .materials
            .iter()
            .map(|(name, m)| (name.as_str(), Arc::new(Material::from(m))))
            .collect();

        let mut objects: Vec<Box<dyn Hittable>> = Vec::with_capacity(desc.spheres.len());
        for (index, sphere) in desc.spheres.iter().enumerate() {
            let material = materials
                .get(sphere.material.as_str())
                .cloned()
                .ok_or_else(|| SceneError::UnknownMaterial {
                    index,
                    name: sphere.material.clone(),
                })?;
            objects.push(Box::new(Sphere::new(sphere.center, sphere.radius, material)));
        }

        let world: Box<dyn Hittable> = if desc.render.use_bvh {
            Box::new(BvhNode::new(objects))
        } else {
            Box::new(HittableList::from(objects))
        };

        let scene = Self::new(
            world,
            Camera::from_description(&desc.camera, &desc.image),
            Environment::from(&desc.environment),
            desc.image.width,
            desc.image.height,
        );

        info!(
            "Built scene: {} spheres, {} materials, {} in {:.2?}",
            desc.spheres.len(),
            materials.len(),
            if desc.render.use_bvh { "BVH" } else { "linear list" },
            start.elapsed()
        );

        Ok(scene)
    }

    /// Root of the geometry.
    pub fn world(&self) -> &dyn Hittable {
        self.world.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}
