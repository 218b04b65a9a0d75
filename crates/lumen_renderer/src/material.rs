//! Materials describing how light scatters off a surface.
//!
//! The set of materials is closed, so dispatch is a `match` over
//! [`Material`] rather than a trait object. Spheres share materials
//! through `Arc<Material>`.

use std::sync::Arc;

use crate::hittable::HitRecord;
use crate::sampling::{gen_f32, random_in_unit_sphere};
use lumen_math::{unit_vector, Ray, Vec3};
use rand::RngCore;

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// Outcome of a successful scatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Fraction of each colour channel carried by the scattered ray
    pub attenuation: Color,
    /// The continuation ray, starting at the hit point
    pub scattered: Ray,
}

/// Surface material.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
}

impl Material {
    /// Shared diffuse material.
    pub fn lambertian(albedo: Color) -> Arc<Self> {
        Arc::new(Self::Lambertian(Lambertian::new(albedo)))
    }

    /// Shared metal material. `fuzz` is clamped to [0, 1].
    pub fn metal(albedo: Color, fuzz: f32) -> Arc<Self> {
        Arc::new(Self::Metal(Metal::new(albedo, fuzz)))
    }

    /// Shared glass-like material.
    pub fn dielectric(ior: f32) -> Arc<Self> {
        Arc::new(Self::Dielectric(Dielectric::new(ior)))
    }

    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    pub fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<Scatter> {
        match self {
            Material::Lambertian(m) => m.scatter(ray_in, rec, rng),
            Material::Metal(m) => m.scatter(ray_in, rec, rng),
            Material::Dielectric(m) => m.scatter(ray_in, rec, rng),
        }
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<Scatter> {
        // Aim at a random point in the unit sphere tangent to the hit point
        let target = rec.p + rec.normal + random_in_unit_sphere(rng);
        Some(Scatter {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, target - rec.p),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }

    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<Scatter> {
        let reflected = reflect(unit_vector(ray_in.direction()), rec.normal);
        let direction = reflected + self.fuzz * random_in_unit_sphere(rng);

        // Fuzz can push the reflection below the surface
        if direction.dot(rec.normal) > 0.0 {
            Some(Scatter {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, direction),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Dielectric {
    /// Index of refraction
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f32) -> Self {
        Self { ior }
    }

    pub fn ior(&self) -> f32 {
        self.ior
    }

    /// Probability of reflection at the given incidence cosine.
    ///
    /// An index-matched interface does not reflect at all.
    fn reflectance(&self, cosine: f32) -> f32 {
        if (self.ior - 1.0).abs() < f32::EPSILON {
            return 0.0;
        }
        schlick(cosine, self.ior)
    }

    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<Scatter> {
        let direction = ray_in.direction();
        let d_dot_n = direction.dot(rec.normal);

        // The stored normal points out of the sphere; a positive dot means
        // the ray is leaving the material.
        let (outward_normal, ratio, cosine) = if d_dot_n > 0.0 {
            (-rec.normal, self.ior, self.ior * d_dot_n / direction.length())
        } else {
            (rec.normal, 1.0 / self.ior, -d_dot_n / direction.length())
        };

        let scattered_dir = match refract(direction, outward_normal, ratio) {
            Some(refracted) if gen_f32(rng) >= self.reflectance(cosine) => refracted,
            // Fresnel reflection, or total internal reflection
            _ => reflect(direction, rec.normal),
        };

        Some(Scatter {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, scattered_dir),
        })
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface with relative index `ratio`.
///
/// Returns `None` on total internal reflection.
#[inline]
fn refract(v: Vec3, n: Vec3, ratio: f32) -> Option<Vec3> {
    let uv = unit_vector(v);
    let dt = uv.dot(n);
    let discriminant = 1.0 - ratio * ratio * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ratio * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation for reflectance
#[inline]
fn schlick(cosine: f32, ior: f32) -> f32 {
    let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(material: &Material, p: Vec3, normal: Vec3) -> HitRecord<'_> {
        HitRecord {
            t: 1.0,
            p,
            normal,
            material,
        }
    }

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_metal_fuzz_is_clamped() {
        assert_eq!(Metal::new(Color::ONE, 3.0).fuzz(), 1.0);
        assert_eq!(Metal::new(Color::ONE, -1.0).fuzz(), 0.0);
        assert_eq!(Metal::new(Color::ONE, 0.3).fuzz(), 0.3);
    }

    #[test]
    fn test_lambertian_attenuation_and_origin() {
        let albedo = Color::new(0.8, 0.3, 0.1);
        let material = Material::Lambertian(Lambertian::new(albedo));
        let p = Vec3::new(0.0, 0.0, -0.5);
        let rec = record(&material, p, Vec3::Z);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..100 {
            let s = material.scatter(&ray, &rec, &mut rng).expect("lambertian always scatters");
            assert_eq!(s.attenuation, albedo);
            assert_eq!(s.scattered.origin(), p);
            // Direction stays within the unit sphere around the normal tip
            assert!((s.scattered.direction() - Vec3::Z).length() < 1.0);
        }
    }

    #[test]
    fn test_metal_mirror_head_on() {
        let material = Material::Metal(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0));
        let rec = record(&material, Vec3::new(0.0, 0.0, 1.0), Vec3::Z);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -4.0));
        let mut rng = StdRng::seed_from_u64(2);

        let s = material.scatter(&ray, &rec, &mut rng).expect("mirror scatters");
        assert_eq!(s.scattered.direction(), Vec3::Z);
        assert_eq!(s.attenuation, Color::new(0.7, 0.6, 0.5));
    }

    #[test]
    fn test_metal_mirror_oblique() {
        let material = Material::Metal(Metal::new(Color::ONE, 0.0));
        let rec = record(&material, Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let mut rng = StdRng::seed_from_u64(2);

        let s = material.scatter(&ray, &rec, &mut rng).expect("mirror scatters");
        assert_close(s.scattered.direction(), Vec3::new(1.0, 1.0, 0.0).normalize());
    }

    #[test]
    fn test_metal_absorbs_below_surface() {
        // Grazing hit with maximum fuzz: roughly half the perturbations
        // point below the surface
        let material = Material::Metal(Metal::new(Color::ONE, 1.0));
        let rec = record(&material, Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(-1.0, 0.01, 0.0), Vec3::new(1.0, -0.01, 0.0));
        let mut rng = StdRng::seed_from_u64(11);
        let mut absorbed = false;
        for _ in 0..200 {
            if material.scatter(&ray, &rec, &mut rng).is_none() {
                absorbed = true;
                break;
            }
        }
        assert!(absorbed);
    }

    #[test]
    fn test_dielectric_index_matched_passes_straight_through() {
        let material = Material::Dielectric(Dielectric::new(1.0));
        let rec = record(&material, Vec3::ZERO, Vec3::Y);
        let incoming = Vec3::new(0.3, -1.0, 0.2);
        let ray = Ray::new(Vec3::new(-0.3, 1.0, -0.2), incoming);
        // Draws near 0 would pick reflection for any non-zero reflectance
        let mut rng = StepRng::new(0, 0);

        let s = material.scatter(&ray, &rec, &mut rng).expect("dielectric always scatters");
        assert_close(s.scattered.direction().normalize(), incoming.normalize());
        assert_eq!(s.attenuation, Color::ONE);
    }

    #[test]
    fn test_dielectric_index_matched_grazing() {
        let material = Material::Dielectric(Dielectric::new(1.0));
        let rec = record(&material, Vec3::ZERO, Vec3::Y);
        let incoming = Vec3::new(1.0, -0.05, 0.0);
        let ray = Ray::new(Vec3::new(-1.0, 0.05, 0.0), incoming);
        let mut rng = StepRng::new(0, 0);

        let s = material.scatter(&ray, &rec, &mut rng).unwrap();
        assert_close(s.scattered.direction().normalize(), incoming.normalize());
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        let material = Material::Dielectric(Dielectric::new(1.5));
        // Leaving the glass at a shallow angle
        let rec = record(&material, Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(-1.0, -0.1, 0.0), Vec3::new(1.0, 0.1, 0.0));
        // Draws near 1 would pick refraction if it were possible
        let mut rng = StepRng::new(u64::MAX, 0);

        let s = material.scatter(&ray, &rec, &mut rng).unwrap();
        assert_close(s.scattered.direction(), Vec3::new(1.0, -0.1, 0.0));
        assert_eq!(s.attenuation, Color::ONE);
    }

    #[test]
    fn test_dielectric_entering_bends_toward_normal() {
        let material = Material::Dielectric(Dielectric::new(1.5));
        let rec = record(&material, Vec3::ZERO, Vec3::Y);
        let incoming = Vec3::new(1.0, -1.0, 0.0);
        let ray = Ray::new(Vec3::new(-1.0, 1.0, 0.0), incoming);
        // High draw: refract whenever refraction is possible
        let mut rng = StepRng::new(u64::MAX, 0);

        let s = material.scatter(&ray, &rec, &mut rng).unwrap();
        let out = s.scattered.direction().normalize();
        let sin_in = incoming.normalize().x;
        let sin_out = out.x;
        assert!(out.y < 0.0);
        assert!((sin_in - 1.5 * sin_out).abs() < 1e-5);
    }

    #[test]
    fn test_dielectric_fresnel_reflection_on_low_draw() {
        let material = Material::Dielectric(Dielectric::new(1.5));
        let rec = record(&material, Vec3::ZERO, Vec3::Y);
        let incoming = Vec3::new(1.0, -1.0, 0.0);
        let ray = Ray::new(Vec3::new(-1.0, 1.0, 0.0), incoming);
        // Refraction is possible here, but a zero draw is below any reflectance
        let mut rng = StepRng::new(0, 0);

        let s = material.scatter(&ray, &rec, &mut rng).unwrap();
        assert_close(s.scattered.direction(), reflect(incoming, Vec3::Y));
        assert_close(s.scattered.direction(), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(s.attenuation, Color::ONE);
    }

    #[test]
    fn test_dielectric_exiting_bends_away_from_normal() {
        let material = Material::Dielectric(Dielectric::new(1.5));
        let rec = record(&material, Vec3::ZERO, Vec3::Y);
        // Leaving the glass well below the critical angle
        let incoming = Vec3::new(0.3, 1.0, 0.0);
        let ray = Ray::new(Vec3::new(-0.3, -1.0, 0.0), incoming);
        let mut rng = StepRng::new(u64::MAX, 0);

        let s = material.scatter(&ray, &rec, &mut rng).unwrap();
        let out = s.scattered.direction().normalize();
        let sin_in = incoming.normalize().x;
        let sin_out = out.x;
        assert!(out.y > 0.0);
        assert!(sin_out > sin_in);
        assert!((1.5 * sin_in - sin_out).abs() < 1e-5);
    }

    #[test]
    fn test_schlick_bounds() {
        let r0 = schlick(1.0, 1.5);
        assert!((r0 - 0.04).abs() < 1e-6);
        assert!((schlick(0.0, 1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_refract_none_on_tir() {
        let v = Vec3::new(1.0, -0.1, 0.0);
        assert!(refract(v, Vec3::Y, 1.5).is_none());
        assert!(refract(v, Vec3::Y, 1.0 / 1.5).is_some());
    }
}
