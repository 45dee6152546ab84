use clap::{Parser, ValueEnum};
use kiln_math::Vec3;
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneChoice {
    /// Gray ground plane with a single diffuse sphere
    GroundSphere,
    /// Ground plane with a diffuse, a metal and a glass sphere
    Showcase,
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "kiln")]
#[command(about = "Offline Monte Carlo path tracer")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "showcase")]
    pub scene: SceneChoice,

    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Width over height
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect_ratio: f32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    pub vfov: f32,

    /// Defocus cone angle in degrees (0 disables depth of field)
    #[arg(long, default_value_t = 0.0)]
    pub defocus_angle: f32,

    /// Distance to the plane of perfect focus
    #[arg(long, default_value_t = 10.0)]
    pub focus_dist: f32,

    /// Samples per pixel
    #[arg(long, short = 's', default_value_t = 10)]
    pub samples: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = 10)]
    pub max_depth: u32,

    /// Camera position as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "0,0,0", allow_hyphen_values = true)]
    pub lookfrom: Vec3,

    /// Point the camera looks at as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "0,0,-1", allow_hyphen_values = true)]
    pub lookat: Vec3,

    /// Camera up direction as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "0,1,0", allow_hyphen_values = true)]
    pub up: Vec3,

    /// Seed for the random number generator
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Output file (.ppm or .png); plain PPM on stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write binary (P6) instead of plain (P3) PPM
    #[arg(long)]
    pub binary: bool,

    /// Skip gamma correction in PPM output
    #[arg(long)]
    pub no_gamma: bool,

    /// Logging level (RUST_LOG still applies on top)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Parse "x,y,z" into a vector.
pub fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid vector '{}': {}", s, e))?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected 3 comma separated numbers, got '{}'", s)),
    }
}
