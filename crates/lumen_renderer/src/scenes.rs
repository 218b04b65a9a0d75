//! Built-in scene presets.
//!
//! Every preset sits on a large ground sphere at `(0, -1000, 0)` and is
//! framed by the default camera looking from `(13, 2, 3)` at the origin.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::RenderError;
use crate::sampling::gen_f32;
use crate::{Color, HittableList, Material, Sphere};
use lumen_math::Vec3;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A named scene layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenePreset {
    /// Grid of small random spheres around three large ones
    #[default]
    Random,
    /// Mirror floor with one rough yellow metal ball
    Metal,
    /// Mirror floor with ten small metal balls
    MetalRandom,
    /// Grey floor with one red diffuse ball
    Lambert,
    /// Grey floor with one glass ball
    Dielectric,
}

impl ScenePreset {
    pub const ALL: [ScenePreset; 5] = [
        ScenePreset::Random,
        ScenePreset::Metal,
        ScenePreset::MetalRandom,
        ScenePreset::Lambert,
        ScenePreset::Dielectric,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScenePreset::Random => "random",
            ScenePreset::Metal => "metal",
            ScenePreset::MetalRandom => "metal_random",
            ScenePreset::Lambert => "lambert",
            ScenePreset::Dielectric => "dielectric",
        }
    }

    /// Build the scene. Random presets draw from `rng`.
    pub fn build(&self, rng: &mut dyn RngCore) -> HittableList {
        let world = match self {
            ScenePreset::Random => random_scene(rng),
            ScenePreset::Metal => metal_scene(),
            ScenePreset::MetalRandom => metal_scene_random(rng),
            ScenePreset::Lambert => lambert_scene(),
            ScenePreset::Dielectric => dielectric_scene(),
        };
        log::info!("Created {} spheres for scene '{}'", world.len(), self);
        world
    }
}

impl fmt::Display for ScenePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenePreset {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenePreset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RenderError::InvalidSettings(format!("unknown scene '{s}'")))
    }
}

fn ground(material: Arc<Material>) -> Sphere {
    Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, material)
}

/// The classic cover scene: a 22x22 grid of small spheres with mixed
/// materials, plus glass, diffuse and metal hero spheres.
pub fn random_scene(rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();
    world.add(ground(Material::lambertian(Color::splat(0.5))));

    let glass = Material::dielectric(1.5);

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );

            // Keep clear of the metal hero sphere
            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                // Diffuse
                let albedo = Color::new(
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                );
                Material::lambertian(albedo)
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = Color::new(
                    0.5 * (1.0 + gen_f32(rng)),
                    0.5 * (1.0 + gen_f32(rng)),
                    0.5 * (1.0 + gen_f32(rng)),
                );
                Material::metal(albedo, 0.5 * gen_f32(rng))
            } else {
                Arc::clone(&glass)
            };
            world.add(Sphere::new(center, 0.2, material));
        }
    }

    world.add(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, glass));
    world.add(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Material::lambertian(Color::new(0.4, 0.2, 0.1)),
    ));
    world.add(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Material::metal(Color::new(0.7, 0.6, 0.5), 0.0),
    ));

    world
}

pub fn metal_scene() -> HittableList {
    let mut world = HittableList::new();
    world.add(ground(Material::metal(Color::splat(0.5), 0.0)));
    world.add(Sphere::new(
        Vec3::new(0.0, 0.5, 0.0),
        0.5,
        Material::metal(Color::new(1.0, 1.0, 0.0), 1.0),
    ));
    world
}

pub fn metal_scene_random(rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();
    world.add(ground(Material::metal(Color::splat(0.5), 0.0)));

    for _ in 0..10 {
        let pos = Vec3::new(gen_f32(rng), 0.2, gen_f32(rng)) * Vec3::new(3.0, 1.0, 3.0);
        let albedo = Color::new(
            gen_f32(rng) * gen_f32(rng),
            gen_f32(rng) * gen_f32(rng),
            gen_f32(rng) * gen_f32(rng),
        );
        world.add(Sphere::new(pos, 0.2, Material::metal(albedo, 0.1)));
    }

    world
}

pub fn lambert_scene() -> HittableList {
    let mut world = HittableList::new();
    world.add(ground(Material::lambertian(Color::splat(0.5))));
    world.add(Sphere::new(
        Vec3::new(0.0, 0.5, 0.0),
        0.5,
        Material::lambertian(Color::new(1.0, 0.0, 0.0)),
    ));
    world
}

pub fn dielectric_scene() -> HittableList {
    let mut world = HittableList::new();
    world.add(ground(Material::lambertian(Color::splat(0.5))));
    world.add(Sphere::new(Vec3::new(0.0, 0.5, 0.0), 0.5, Material::dielectric(1.5)));
    world
}
