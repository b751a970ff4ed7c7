//! Background radiance for rays that leave the scene.

use glint_core::EnvironmentDescription;
use glint_math::{unit_vector, Color, Ray};

/// What a ray sees when it hits nothing.
///
/// Evaluation depends only on the ray direction, never on randomness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    /// Constant color in every direction.
    Solid(Color),
    /// Linear blend on the direction's Y component: `bottom` straight
    /// down, `top` straight up.
    Gradient { bottom: Color, top: Color },
}

impl Environment {
    /// The classic white to sky blue gradient.
    pub fn sky() -> Self {
        Environment::Gradient {
            bottom: Color::ONE,
            top: Color::new(0.5, 0.7, 1.0),
        }
    }

    /// Radiance arriving along `ray`.
    pub fn color(&self, ray: &Ray) -> Color {
        match *self {
            Environment::Solid(color) => color,
            Environment::Gradient { bottom, top } => {
                let unit_direction = unit_vector(ray.direction());
                let a = 0.5 * (unit_direction.y + 1.0);
                bottom * (1.0 - a) + top * a
            }
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::sky()
    }
}

impl From<&EnvironmentDescription> for Environment {
    fn from(desc: &EnvironmentDescription) -> Self {
        match *desc {
            EnvironmentDescription::Solid { color } => Environment::Solid(color),
            EnvironmentDescription::Gradient { bottom, top } => {
                Environment::Gradient { bottom, top }
            }
        }
    }
}
