//! Random sampling helpers shared by materials and the camera.
//!
//! Every function takes the random source explicitly so callers can seed
//! it (or swap in a mock) instead of relying on global state.

use lumen_math::Vec3;
use rand::{Rng, RngCore};

/// Rejections allowed before a sampler gives up on its random source.
pub const MAX_REJECTION_ATTEMPTS: u32 = 64;

/// Uniform draw in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Sample a random point inside the unit sphere by rejection from the
/// [-1, 1]^3 cube.
///
/// A healthy source accepts within a couple of draws. If the source keeps
/// producing points outside the sphere the sampler falls back to the
/// origin, which is still inside.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = Vec3::new(
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }

    log::warn!(
        "random_in_unit_sphere rejected {} samples, falling back to origin",
        MAX_REJECTION_ATTEMPTS
    );
    Vec3::ZERO
}

/// Sample a random point inside the unit disk (z = 0).
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = Vec3::new(gen_f32(rng) * 2.0 - 1.0, gen_f32(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }

    log::warn!(
        "random_in_unit_disk rejected {} samples, falling back to origin",
        MAX_REJECTION_ATTEMPTS
    );
    Vec3::ZERO
}
