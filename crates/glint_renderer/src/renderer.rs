//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Jittered multi-sampling per pixel for anti-aliasing
//! - Bucket-parallel rendering on the rayon thread pool
//! - Cancellation through a shared flag or a deadline

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::integrator::ray_color;
use crate::sampling::gen_f32;
use crate::{Color, Scene};
use glint_core::{RenderSettings, SceneError};
use glint_math::color_to_rgb8;
use log::{debug, info, warn};
use rand::RngCore;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Seed mixed into every pixel's random stream
    pub seed: u64,
    /// Bucket edge length in pixels
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::from(&RenderSettings::default())
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            samples_per_pixel: settings.samples_per_pixel,
            max_depth: settings.max_depth,
            seed: settings.seed,
            bucket_size: settings.bucket_size,
        }
    }
}

/// Errors that abort a render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Render cancelled")]
    Cancelled,

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Shared stop signal for a running render.
///
/// Workers poll it before starting each bucket; a bucket already in
/// progress always finishes.
#[derive(Debug, Default)]
pub struct RenderControl {
    cancelled: AtomicBool,
    deadline: Option<Instant>,
}

impl RenderControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop automatically once `timeout` has elapsed from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Request the render to stop.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether remaining work should be skipped.
    pub fn should_stop(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Render a single pixel with multi-sampling.
///
/// Returns the average of `samples_per_pixel` jittered samples in linear
/// color. Row 0 is the top of the image.
pub fn render_pixel(
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if config.samples_per_pixel == 0 {
        return Color::ZERO;
    }

    let width = scene.width() as f32;
    let height = scene.height() as f32;
    // Image rows go down, the camera's t axis goes up
    let row_from_bottom = scene.height().saturating_sub(1).saturating_sub(y) as f32;

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let s = (x as f32 + gen_f32(rng)) / width;
        let t = (row_from_bottom + gen_f32(rng)) / height;
        let ray = scene.camera().get_ray(s, t, rng);
        pixel_color += ray_color(
            &ray,
            scene.world(),
            scene.environment(),
            config.max_depth,
            rng,
        );
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Rendered image in linear color.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major, top row first
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a finished bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (row, chunk) in result.pixels.chunks(bucket.width as usize).enumerate() {
            let start = self.index(bucket.x, bucket.y + row as u32);
            self.pixels[start..start + chunk.len()].copy_from_slice(chunk);
        }
    }

    /// Gamma-corrected 8-bit RGB bytes, ready for an encoder.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color_to_rgb8(*color))
            .collect()
    }
}

/// Render the entire scene to an image buffer.
///
/// Buckets are distributed over the rayon thread pool. If `control` trips
/// before every bucket has started, the partial image is discarded and
/// `RenderError::Cancelled` is returned.
pub fn render(
    scene: &Scene,
    config: &RenderConfig,
    control: &RenderControl,
) -> Result<ImageBuffer, RenderError> {
    if scene.width() == 0 || scene.height() == 0 {
        return Err(SceneError::InvalidDimensions {
            width: scene.width(),
            height: scene.height(),
        }
        .into());
    }
    if config.samples_per_pixel == 0 {
        return Err(SceneError::InvalidSamples(config.samples_per_pixel).into());
    }
    if config.bucket_size == 0 {
        return Err(SceneError::InvalidBucketSize(config.bucket_size).into());
    }

    let start = Instant::now();
    let buckets = generate_buckets(scene.width(), scene.height(), config.bucket_size);
    let total = buckets.len();
    info!(
        "Rendering {}x{} at {} spp, max depth {}, {} buckets",
        scene.width(),
        scene.height(),
        config.samples_per_pixel,
        config.max_depth,
        total
    );

    let completed = AtomicUsize::new(0);
    let results: Option<Vec<BucketResult>> = buckets
        .par_iter()
        .map(|bucket| {
            if control.should_stop() {
                return None;
            }
            let result = render_bucket(bucket, scene, config);
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            debug!("Bucket {}/{} done", done, total);
            Some(result)
        })
        .collect();

    let Some(results) = results else {
        warn!(
            "Render cancelled after {} of {} buckets ({:.2?})",
            completed.load(Ordering::Relaxed),
            total,
            start.elapsed()
        );
        return Err(RenderError::Cancelled);
    };

    let mut image = ImageBuffer::new(scene.width(), scene.height());
    for result in &results {
        image.write_bucket(result);
    }

    info!("Render finished in {:.2?}", start.elapsed());
    Ok(image)
}
