//! Kiln command line renderer.
//!
//! Builds one of the demo scenes, renders it single-threaded with a seeded
//! RNG and writes a PPM stream (stdout or file) or a PNG.

use anyhow::{bail, Context, Result};
use clap::Parser;
use kiln_renderer::output::{write_ppm, Encoding, PpmFormat};
use kiln_renderer::{render, Camera, CameraConfig, ImageBuffer};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

mod cli;
mod scenes;

use cli::Args;

fn camera_config(args: &Args) -> CameraConfig {
    CameraConfig::default()
        .with_resolution(args.width, args.aspect_ratio)
        .with_quality(args.samples, args.max_depth)
        .with_position(args.lookfrom, args.lookat, args.up)
        .with_lens(args.vfov, args.defocus_angle, args.focus_dist)
}

fn write_output(image: &ImageBuffer, args: &Args) -> Result<()> {
    let encoding = Encoding {
        format: if args.binary {
            PpmFormat::Binary
        } else {
            PpmFormat::Plain
        },
        gamma: !args.no_gamma,
    };

    let Some(path) = args.output.as_deref() else {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        return write_ppm(&mut out, image, encoding).context("Failed to write image to stdout");
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => image
            .save_png(path)
            .with_context(|| format!("Failed to save {}", path.display())),
        Some("ppm") => save_ppm(image, path, encoding),
        _ => bail!(
            "Unsupported output extension for {}; use .ppm or .png",
            path.display()
        ),
    }
}

fn save_ppm(image: &ImageBuffer, path: &Path, encoding: Encoding) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, image, encoding)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Saved to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let camera = Camera::new(camera_config(&args)).context("Invalid camera configuration")?;
    let scene = scenes::build(args.scene).context("Failed to build scene")?;
    info!("Scene {:?}: {} primitives, seed {}", args.scene, scene.len(), args.seed);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let image = render(&camera, &scene, &mut rng);

    write_output(&image, &args)
}
