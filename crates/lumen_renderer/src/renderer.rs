//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a hard depth cap
//! - Sky gradient background
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction

use crate::{Camera, Color, Hittable, ImageBuffer};
use crate::sampling::gen_f32;
use lumen_math::{unit_vector, Interval, Ray};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Lower bound on hit distance, to avoid self-intersection ("shadow acne").
pub const T_MIN: f32 = 0.001;

/// Default number of scatter steps before a path is cut off.
pub const MAX_DEPTH: u32 = 50;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            samples_per_pixel: 10,
            max_depth: MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Width divided by height.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Compute the color seen by a ray.
///
/// `depth` counts the scatter steps taken so far and starts at 0. Once it
/// reaches `config.max_depth` any further hit contributes black.
pub fn ray_color(
    ray: &Ray,
    world: &Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = world.hit(ray, Interval::new(T_MIN, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    if depth >= config.max_depth {
        return Color::ZERO;
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(s) => s.attenuation * ray_color(&s.scattered, world, depth + 1, config, rng),
        // Absorbed
        None => Color::ZERO,
    }
}

/// Compute sky gradient background.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = unit_vector(ray.direction());
    let t = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - t) * white + t * blue
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Render a single pixel with multi-sampling.
///
/// `(i, j)` are pixel coordinates with `j = 0` at the bottom row. Returns
/// the gamma-corrected average.
pub fn render_pixel(
    camera: &Camera,
    world: &Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (i as f32 + gen_f32(rng)) / config.width as f32;
        let v = (j as f32 + gen_f32(rng)) / config.height as f32;
        let ray = camera.get_ray(u, v, rng);
        pixel_color += ray_color(&ray, world, 0, config, rng);
    }

    // Average the samples
    pixel_color /= config.samples_per_pixel as f32;
    Color::new(
        linear_to_gamma(pixel_color.x),
        linear_to_gamma(pixel_color.y),
        linear_to_gamma(pixel_color.z),
    )
}

/// Render the entire scene to an image buffer.
///
/// Rows are scanned top to bottom (`j` from `height - 1` down to 0) and
/// columns left to right; pixels are stored in that order.
pub fn render(
    camera: &Camera,
    world: &Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.width, config.height);

    log::info!(
        "Rendering {}x{} @ {} spp (max depth {})",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth
    );

    for (row, j) in (0..config.height).rev().enumerate() {
        for i in 0..config.width {
            let color = render_pixel(camera, world, i, j, config, rng);
            image.set(i, row as u32, color);
        }
        log::debug!(
            "{:.1}% done",
            (row + 1) as f32 / config.height as f32 * 100.0
        );
    }

    image
}
