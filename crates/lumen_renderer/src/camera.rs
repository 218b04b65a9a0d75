//! Thin-lens camera for ray generation.

use crate::sampling::random_in_unit_disk;
use lumen_math::{Ray, Vec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Placement and lens parameters a [`Camera`] is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Image width divided by image height
    pub aspect: f32,
    /// Lens diameter; 0 gives a pinhole camera
    pub aperture: f32,
    /// Distance from camera to plane of perfect focus
    pub focus_dist: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Vec3::new(13.0, 2.0, 3.0),
            look_at: Vec3::ZERO,
            vup: Vec3::Y,
            vfov: 20.0,
            aspect: 800.0 / 600.0,
            aperture: 0.1,
            focus_dist: 10.0,
        }
    }
}

impl CameraSettings {
    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, aperture: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Set the aspect ratio.
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn build(&self) -> Camera {
        Camera::new(self)
    }
}

/// Camera for generating rays into the scene.
///
/// Immutable once built; every derived value is computed in [`Camera::new`].
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Build the camera basis and focus-plane viewport.
    pub fn new(settings: &CameraSettings) -> Self {
        let theta = settings.vfov.to_radians();
        let half_height = (theta / 2.0).tan() * settings.focus_dist;
        let half_width = settings.aspect * half_height;

        // Calculate camera basis vectors
        let w = (settings.look_from - settings.look_at).normalize();
        let u = settings.vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = settings.look_from;
        let horizontal = 2.0 * half_width * u;
        let vertical = 2.0 * half_height * v;
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - settings.focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: settings.aperture / 2.0,
        }
    }

    /// Generate a ray through normalized image coordinates `(s, t)`.
    ///
    /// `(0, 0)` is the lower-left corner of the image and `(1, 1)` the
    /// upper-right. The origin is jittered across the lens disk.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
        )
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }

    /// Unit vector pointing from the scene back toward the camera.
    pub fn w(&self) -> Vec3 {
        self.w
    }
}
