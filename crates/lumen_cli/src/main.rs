use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_renderer::{render, Hittable, RenderSettings, ScenePreset};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Render a scene of spheres with a CPU path tracer.
///
/// Flags override values from `--config`. Set `RUST_LOG=debug` to see
/// per-scanline progress.
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about)]
struct Args {
    /// JSON render settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Samples per pixel
    #[arg(short, long)]
    samples: Option<u32>,

    /// Scene preset: random, metal, metal_random, lambert, dielectric
    #[arg(long)]
    scene: Option<ScenePreset>,

    /// Seed for reproducible renders
    #[arg(long)]
    seed: Option<u64>,

    /// Output path; `.ppm` writes ASCII PPM, other extensions use the
    /// matching image format
    #[arg(short, long, default_value = "image.ppm")]
    output: PathBuf,
}

impl Args {
    /// Load the base settings and apply command line overrides.
    fn settings(&self) -> Result<RenderSettings> {
        let mut settings = match &self.config {
            Some(path) => RenderSettings::from_json_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => RenderSettings::default(),
        };

        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(samples) = self.samples {
            settings.samples_per_pixel = samples;
        }
        if let Some(scene) = self.scene {
            settings.scene = scene;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }

        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let settings = args.settings()?;

    let mut rng: Box<dyn RngCore> = match settings.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(StdRng::from_entropy()),
    };

    // Build the scene
    let start = Instant::now();
    let world: Hittable = settings.scene.build(rng.as_mut()).into();
    log::info!("Scene built in {:?}", start.elapsed());

    let camera = settings.camera();
    let config = settings.render_config();

    let start = Instant::now();
    let image = render(&camera, &world, &config, rng.as_mut());
    log::info!("Rendered in {:?}", start.elapsed());

    image
        .save(&args.output)
        .with_context(|| format!("Failed to save image to {}", args.output.display()))?;

    Ok(())
}
