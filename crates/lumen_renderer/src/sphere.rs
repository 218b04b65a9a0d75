//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::hittable::HitRecord;
use crate::Material;
use lumen_math::{Interval, Ray, Vec3};

/// A sphere primitive.
///
/// A negative radius is kept as given: it flips the normal inward, which
/// makes a hollow shell when nested inside a positive sphere of glass.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Nearest intersection strictly inside `ray_t`.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let root = [(h - sqrtd) / a, (h + sqrtd) / a]
            .into_iter()
            .find(|&t| ray_t.surrounds(t))?;

        let p = ray.at(root);
        Some(HitRecord {
            t: root,
            p,
            normal: (p - self.center) / self.radius,
            material: self.material.as_ref(),
        })
    }
}
