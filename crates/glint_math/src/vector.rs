//! Direction helpers used by the scattering models.

use crate::Vec3;

/// Components below this magnitude count as zero.
const NEAR_ZERO: f32 = 1e-8;

/// Normalize `v`, returning the zero vector when `v` has no length.
///
/// Degenerate input never yields NaN; callers can test the result with
/// [`near_zero`] if they need to tell the two cases apart.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// True if every component is within a tiny distance of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.x.abs() < NEAR_ZERO && v.y.abs() < NEAR_ZERO && v.z.abs() < NEAR_ZERO
}

/// Reflect a vector about a normal.
/// r = v - 2(v.n)n
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with normal `n`.
///
/// `etai_over_etat` is the ratio of the incident index over the transmitted
/// index. Returns `None` on total internal reflection.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Option<Vec3> {
    let cos_theta = (-uv).dot(n).min(1.0);
    let sin_theta_sq = (1.0 - cos_theta * cos_theta).max(0.0);
    if etai_over_etat * etai_over_etat * sin_theta_sq > 1.0 {
        return None;
    }

    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    Some(r_out_perp + r_out_parallel)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_unit_vector_zero_sentinel() {
        assert_eq!(unit_vector(Vec3::ZERO), Vec3::ZERO);
        let v = unit_vector(Vec3::new(3.0, 0.0, 4.0));
        assert!((v.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::ZERO));
        assert!(near_zero(Vec3::splat(1e-9)));
        assert!(!near_zero(Vec3::new(0.0, 1e-3, 0.0)));
    }

    #[test]
    fn test_reflect_preserves_length_and_flips_normal_component() {
        let normals = [
            Vec3::Y,
            Vec3::new(1.0, 1.0, 0.0).normalize(),
            Vec3::new(-0.3, 0.2, 0.9).normalize(),
        ];
        let vectors = [
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.5, 2.0, -3.0),
            Vec3::new(-4.0, 0.1, 0.7),
        ];

        for n in normals {
            for v in vectors {
                let r = reflect(v, n);
                assert!((r.length() - v.length()).abs() < EPS);
                assert!((r.dot(n) + v.dot(n)).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_refract_index_one_is_straight() {
        let uv = Vec3::new(1.0, -1.0, 0.0).normalize();
        let out = refract(uv, Vec3::Y, 1.0).unwrap();
        assert!((out - uv).length() < EPS);
    }

    #[test]
    fn test_refract_snell() {
        // 45 degrees into glass: sin(t) = sin(45) / 1.5
        let uv = Vec3::new(1.0, -1.0, 0.0).normalize();
        let out = refract(uv, Vec3::Y, 1.0 / 1.5).unwrap();
        let sin_out = out.x / out.length();
        assert!((sin_out - (0.5f32.sqrt() / 1.5)).abs() < 1e-4);
        assert!(out.y < 0.0);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Leaving glass at a grazing angle
        let uv = Vec3::new(1.0, -0.2, 0.0).normalize();
        assert!(refract(uv, Vec3::Y, 1.5).is_none());
    }
}
