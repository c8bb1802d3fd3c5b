use std::path::Path;

use anyhow::{Context, Result};
use beam_tracer::PixelBuffer;

/// Save the buffer as an 8-bit RGBA PNG.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let image = image::RgbaImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.to_rgba8(),
    )
    .context("Pixel buffer size does not match its dimensions")?;

    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Saved {}", path.display());
    Ok(())
}
