//! Simple path tracer example.
//!
//! Builds a small scene by hand, one sphere per material, and saves it
//! as a PPM.

use lumen_renderer::{
    render, CameraSettings, Color, Hittable, HittableList, Material, RenderConfig, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), lumen_renderer::RenderError> {
    println!("Lumen Path Tracer - Simple Example");
    println!("==================================");

    let world = build_scene();

    let config = RenderConfig {
        width: 400,
        height: 200,
        samples_per_pixel: 50,
        ..RenderConfig::default()
    };

    let camera = CameraSettings::default()
        .with_position(
            Vec3::new(3.0, 3.0, 2.0),  // look_from
            Vec3::new(0.0, 0.0, -1.0), // look_at
            Vec3::new(0.0, 1.0, 0.0),  // vup
        )
        .with_lens(20.0, 2.0, (Vec3::new(3.0, 3.0, 2.0) - Vec3::new(0.0, 0.0, -1.0)).length())
        .with_aspect(config.aspect())
        .build();

    println!(
        "Rendering {}x{} @ {} spp...",
        config.width, config.height, config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let mut rng = StdRng::seed_from_u64(2024);
    let image = render(&camera, &world, &config, &mut rng);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    image.save(filename)?;
    println!("Saved to {}", filename);
    Ok(())
}

fn build_scene() -> Hittable {
    let glass = Material::dielectric(1.5);

    let mut world = HittableList::new();
    world.add(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Material::lambertian(Color::new(0.8, 0.8, 0.0)),
    ));
    world.add(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Material::lambertian(Color::new(0.1, 0.2, 0.5)),
    ));
    world.add(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Material::metal(Color::new(0.8, 0.6, 0.2), 0.3),
    ));
    // Hollow glass bubble: the inner sphere's negative radius flips its normals
    world.add(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass.clone()));
    world.add(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), -0.45, glass));

    println!("Created {} objects", world.len());
    world.into()
}
