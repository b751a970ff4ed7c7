use clap::{Parser, ValueEnum};
use glint_core::{presets, SceneDescription};
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable on the command line
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
pub enum Preset {
    /// Field of small random spheres around three large ones
    Random,
    /// One grey sphere, 100x100, 1 sample, depth 1
    Single,
}

impl Preset {
    /// Scene description for this preset; `seed` drives the random layout.
    pub fn description(self, seed: u64) -> SceneDescription {
        match self {
            Preset::Random => presets::random_spheres(seed),
            Preset::Single => presets::single_sphere(),
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "glint", version)]
#[command(about = "Offline CPU path tracer for sphere scenes")]
pub struct Args {
    /// JSON scene file; the random preset is rendered when omitted
    pub scene: Option<PathBuf>,

    /// Render a built-in scene instead of a file
    #[arg(long, value_enum, conflicts_with = "scene")]
    pub preset: Option<Preset>,

    /// Output image (.png, .jpg/.jpeg or .ppm)
    #[arg(short, long, default_value = "image.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Image aspect ratio (width / height); the height is derived from it
    #[arg(short, long, value_parser = positive_f32, conflicts_with = "height")]
    pub aspect_ratio: Option<f32>,

    /// Vertical field of view in degrees
    #[arg(short = 'v', long = "vertical-field-of-view", visible_alias = "vfov")]
    pub vfov: Option<f32>,

    /// Number of samples per pixel
    #[arg(short, long)]
    pub samples: Option<u32>,

    /// Maximum number of ray bounces
    #[arg(short = 'd', long)]
    pub max_depth: Option<u32>,

    /// Random seed for sampling (and for the random preset's layout)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Test every sphere per ray instead of building a BVH
    #[arg(long)]
    pub no_bvh: bool,

    /// Abort the render if it runs longer than this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Set the logging level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command line overrides on top of a loaded description.
    ///
    /// Giving only one of width or height keeps the image's aspect ratio,
    /// unless `--aspect-ratio` says otherwise. Whenever the image shape
    /// changes the camera follows it.
    pub fn apply_overrides(&self, desc: &mut SceneDescription) {
        let aspect = self
            .aspect_ratio
            .unwrap_or_else(|| desc.image.aspect_ratio());
        let image = &mut desc.image;
        match (self.width, self.height) {
            (Some(width), Some(height)) => {
                image.width = width;
                image.height = height;
            }
            (width, None) if width.is_some() || self.aspect_ratio.is_some() => {
                image.width = width.unwrap_or(image.width);
                image.height = ((image.width as f32 / aspect).round() as u32).max(1);
            }
            (None, Some(height)) => {
                image.height = height;
                image.width = ((height as f32 * aspect).round() as u32).max(1);
            }
            _ => {}
        }
        if self.width.is_some() || self.height.is_some() || self.aspect_ratio.is_some() {
            desc.camera.aspect_ratio = None;
        }

        if let Some(vfov) = self.vfov {
            desc.camera.vfov = vfov;
        }
        if let Some(samples) = self.samples {
            desc.render.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            desc.render.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            desc.render.seed = seed;
        }
        if self.no_bvh {
            desc.render.use_bvh = false;
        }
    }
}

fn positive_f32(value: &str) -> Result<f32, String> {
    match value.parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        Ok(v) => Err(format!("must be a positive number, got {}", v)),
        Err(e) => Err(e.to_string()),
    }
}
