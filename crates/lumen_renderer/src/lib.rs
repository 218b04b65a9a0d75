//! Lumen Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for scenes of spheres lit by a sky gradient.
//! Diffuse, metal and glass materials; thin-lens depth of field.
//!
//! # Example
//!
//! ```no_run
//! use lumen_renderer::{render, Hittable, RenderSettings, ScenePreset};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let settings = RenderSettings {
//!     width: 200,
//!     height: 150,
//!     scene: ScenePreset::Lambert,
//!     ..RenderSettings::default()
//! };
//! let mut rng = StdRng::seed_from_u64(1);
//! let world: Hittable = settings.scene.build(&mut rng).into();
//! let image = render(&settings.camera(), &world, &settings.render_config(), &mut rng);
//! image.save("lambert.png")?;
//! # Ok::<(), lumen_renderer::RenderError>(())
//! ```

mod camera;
mod error;
mod hittable;
mod material;
mod output;
mod renderer;
pub mod sampling;
pub mod scenes;
mod settings;
mod sphere;

pub use camera::{Camera, CameraSettings};
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, Scatter};
pub use output::{color_to_rgb, quantize, ImageBuffer};
pub use renderer::{
    linear_to_gamma, ray_color, render, render_pixel, sky_gradient, RenderConfig, MAX_DEPTH,
    T_MIN,
};
pub use scenes::ScenePreset;
pub use settings::RenderSettings;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
