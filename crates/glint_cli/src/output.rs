//! Image file output.
//!
//! The renderer hands over linear colors; conversion to gamma-corrected
//! 8-bit RGB happens in `ImageBuffer::to_rgb8`, encoding happens here.

use anyhow::{Context, Result};
use glint_renderer::ImageBuffer;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ColorType, ImageEncoder, ImageFormat};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Supported output encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    /// Plain-text P3 pixmap
    Ppm,
}

impl OutputFormat {
    /// Format implied by the file extension, if it is one we know.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "ppm" => Some(OutputFormat::Ppm),
            _ => None,
        }
    }
}

/// Encode `image` to `path`, choosing the format from the extension.
///
/// Unknown extensions fall back to PNG with a warning.
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<OutputFormat> {
    let format = OutputFormat::from_extension(path).unwrap_or_else(|| {
        warn!(
            "Unrecognised image extension for {}, writing PNG",
            path.display()
        );
        OutputFormat::Png
    });

    let bytes = image.to_rgb8();
    let (width, height) = (image.width, image.height);

    match format {
        OutputFormat::Png | OutputFormat::Jpeg => {
            let image_format = if format == OutputFormat::Png {
                ImageFormat::Png
            } else {
                ImageFormat::Jpeg
            };
            image::save_buffer_with_format(
                path,
                &bytes,
                width,
                height,
                ColorType::Rgb8,
                image_format,
            )
            .with_context(|| format!("Failed to encode {:?}", format))?;
        }
        OutputFormat::Ppm => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            PnmEncoder::new(&mut writer)
                .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Ascii))
                .write_image(&bytes, width, height, ColorType::Rgb8)
                .context("Failed to encode PPM")?;
            writer.flush()?;
        }
    }

    debug!("Wrote {}x{} {:?} to {}", width, height, format, path.display());
    Ok(format)
}
