//! PNG encoding and file output.

use super::figure::Figure;
use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

const METERS_PER_INCH: f64 = 0.0254;

/// PNG `pHYs` density for a dpi value.
pub fn dpi_to_pixels_per_meter(dpi: u32) -> u32 {
    (dpi as f64 / METERS_PER_INCH).round() as u32
}

/// Encode the figure as 8-bit RGB PNG with its dpi recorded.
///
/// Encoding is deterministic: the same figure always yields the same bytes.
pub fn encode_png(figure: &Figure) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, figure.width(), figure.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let ppm = dpi_to_pixels_per_meter(figure.dpi);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: png::Unit::Meter,
        }));

        let mut writer = encoder.write_header().context("Failed to write PNG header")?;
        writer
            .write_image_data(figure.image.as_raw())
            .context("Failed to encode PNG image data")?;
        writer.finish().context("Failed to finish PNG stream")?;
    }
    Ok(bytes)
}

/// Write encoded bytes to `path`, creating parent directories.
pub fn save_png(bytes: &[u8], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, bytes).with_context(|| format!("Failed to save {}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    Ok(())
}
