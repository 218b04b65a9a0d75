//! Hittable scene graph and HitRecord for ray-object intersection.

use crate::{Material, Sphere};
use lumen_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Borrows the material from the scene, so it cannot outlive the object
/// that produced it.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, pointing out of the object
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

/// Objects that can be hit by rays.
///
/// A tree: lists own their children exclusively.
#[derive(Debug, Clone)]
pub enum Hittable {
    Sphere(Sphere),
    List(HittableList),
}

impl Hittable {
    /// Test if a ray hits this object strictly inside `ray_t`.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Hittable::Sphere(sphere) => sphere.hit(ray, ray_t),
            Hittable::List(list) => list.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Hittable {
    fn from(sphere: Sphere) -> Self {
        Hittable::Sphere(sphere)
    }
}

impl From<HittableList> for Hittable {
    fn from(list: HittableList) -> Self {
        Hittable::List(list)
    }
}

/// A list of hittable objects.
#[derive(Debug, Clone, Default)]
pub struct HittableList {
    objects: Vec<Hittable>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Hittable>) {
        self.objects.push(object.into());
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over the direct children.
    pub fn iter(&self) -> impl Iterator<Item = &Hittable> {
        self.objects.iter()
    }

    /// Closest hit across all children.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            let bound = closest.map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(ray, ray_t.with_max(bound)) {
                closest = Some(rec);
            }
        }

        closest
    }
}

impl<H: Into<Hittable>> FromIterator<H> for HittableList {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn sphere_at(z: f32, radius: f32) -> Sphere {
        Sphere::new(
            Vec3::new(0.0, 0.0, z),
            radius,
            Material::lambertian(Color::splat(0.5)),
        )
    }

    fn forward_ray() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    fn interval() -> Interval {
        Interval::new(0.001, f32::INFINITY)
    }

    #[test]
    fn test_empty_list_never_hits() {
        let list = HittableList::new();
        assert!(list.is_empty());
        assert!(list.hit(&forward_ray(), interval()).is_none());
    }

    #[test]
    fn test_list_returns_closest_regardless_of_order() {
        let near = sphere_at(-2.0, 0.5);
        let far = sphere_at(-5.0, 0.5);

        let a: HittableList = vec![far.clone(), near.clone()].into_iter().collect();
        let b: HittableList = vec![near, far].into_iter().collect();

        for list in [a, b] {
            let rec = list.hit(&forward_ray(), interval()).expect("should hit");
            assert!((rec.t - 1.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_list_single_hit() {
        let mut list = HittableList::new();
        list.add(sphere_at(-3.0, 0.5));
        // Off to the side, missed by the forward ray
        list.add(Sphere::new(
            Vec3::new(5.0, 0.0, -3.0),
            0.5,
            Material::lambertian(Color::ONE),
        ));

        let rec = list.hit(&forward_ray(), interval()).expect("should hit");
        assert!((rec.t - 2.5).abs() < 1e-5);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_list_none_when_nothing_hits() {
        let list: HittableList = vec![sphere_at(3.0, 0.5), sphere_at(6.0, 1.0)]
            .into_iter()
            .collect();
        assert!(list.hit(&forward_ray(), interval()).is_none());
    }

    #[test]
    fn test_list_respects_t_max() {
        let list: HittableList = vec![sphere_at(-5.0, 0.5)].into_iter().collect();
        assert!(list.hit(&forward_ray(), Interval::new(0.001, 4.0)).is_none());
    }

    #[test]
    fn test_nested_lists() {
        let inner: HittableList = vec![sphere_at(-2.0, 0.5)].into_iter().collect();
        let mut outer = HittableList::new();
        outer.add(sphere_at(-5.0, 0.5));
        outer.add(inner);

        let rec = outer.hit(&forward_ray(), interval()).expect("should hit");
        assert!((rec.t - 1.5).abs() < 1e-5);

        let root = Hittable::from(outer);
        assert!(root.hit(&forward_ray(), interval()).is_some());
    }

    #[test]
    fn test_hit_carries_material() {
        let material = Material::metal(Color::new(0.9, 0.1, 0.1), 0.2);
        let list: HittableList = vec![Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, material.clone())]
            .into_iter()
            .collect();

        let rec = list.hit(&forward_ray(), interval()).expect("should hit");
        assert_eq!(rec.material, material.as_ref());
    }
}
