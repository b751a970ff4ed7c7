//! Built-in scenes.

use glint_math::{Color, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::scene::{
    CameraDescription, EnvironmentDescription, ImageSettings, MaterialDescription,
    RenderSettings, SceneDescription,
};

/// One grey sphere in front of a camera at the origin looking down -Z.
///
/// 100x100, 90 degree field of view, 1 sample, depth 1.
pub fn single_sphere() -> SceneDescription {
    let mut scene = SceneDescription::new(
        ImageSettings {
            width: 100,
            height: 100,
        },
        CameraDescription::looking_at(Vec3::ZERO, Vec3::NEG_Z),
    );
    scene.render = RenderSettings {
        samples_per_pixel: 1,
        max_depth: 1,
        ..RenderSettings::default()
    };
    scene.add_material(
        "grey",
        MaterialDescription::Lambertian {
            albedo: Color::splat(0.5),
        },
    );
    scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, "grey");
    scene
}

/// The classic field of small random spheres around three large ones.
///
/// Layout and material mix are fully determined by `seed`.
pub fn random_spheres(seed: u64) -> SceneDescription {
    let mut rng = StdRng::seed_from_u64(seed);

    let width = 1200;
    let height = width * 9 / 16;
    let aspect_ratio = 16.0 / 9.0;
    let camera = CameraDescription {
        look_from: Vec3::new(13.0, 2.0, 3.0),
        look_at: Vec3::ZERO,
        vup: Vec3::Y,
        vfov: 20.0,
        aspect_ratio: Some(aspect_ratio),
        aperture: 0.1,
        focus_dist: Some(10.0),
    };
    let mut scene = SceneDescription::new(
        ImageSettings { width, height },
        camera,
    );
    scene.render = RenderSettings {
        samples_per_pixel: 500,
        max_depth: 50,
        seed,
        ..RenderSettings::default()
    };
    scene.environment = EnvironmentDescription::default();

    scene.add_material(
        "ground",
        MaterialDescription::Lambertian {
            albedo: Color::splat(0.5),
        },
    );
    scene.add_sphere(Vec3::new(0.0, -1000.0, 0.0), 1000.0, "ground");

    // Every small glass sphere shares one material
    scene.add_material(
        "glass",
        MaterialDescription::Dielectric {
            refractive_index: 1.5,
        },
    );

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat: f32 = rng.gen();
            let center = Vec3::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );

            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let name = format!("small_{}_{}", a, b);
            if choose_mat < 0.8 {
                // Diffuse
                let albedo = random_color(&mut rng, 0.0, 1.0) * random_color(&mut rng, 0.0, 1.0);
                scene.add_material(name.clone(), MaterialDescription::Lambertian { albedo });
                scene.add_sphere(center, 0.2, name);
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = random_color(&mut rng, 0.5, 1.0);
                let fuzz = rng.gen_range(0.0..0.5);
                scene.add_material(name.clone(), MaterialDescription::Metal { albedo, fuzz });
                scene.add_sphere(center, 0.2, name);
            } else {
                scene.add_sphere(center, 0.2, "glass");
            }
        }
    }

    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, "glass");

    scene.add_material(
        "brown",
        MaterialDescription::Lambertian {
            albedo: Color::new(0.4, 0.2, 0.1),
        },
    );
    scene.add_sphere(Vec3::new(-4.0, 1.0, 0.0), 1.0, "brown");

    scene.add_material(
        "bronze",
        MaterialDescription::Metal {
            albedo: Color::new(0.7, 0.6, 0.5),
            fuzz: 0.0,
        },
    );
    scene.add_sphere(Vec3::new(4.0, 1.0, 0.0), 1.0, "bronze");

    log::debug!(
        "Generated random sphere scene with {} spheres (seed {})",
        scene.spheres.len(),
        seed
    );
    scene
}

fn random_color(rng: &mut StdRng, min: f32, max: f32) -> Color {
    Color::new(
        rng.gen_range(min..max),
        rng.gen_range(min..max),
        rng.gen_range(min..max),
    )
}
