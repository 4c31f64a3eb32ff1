use crate::render::IconRenderer;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// The standard batch: the primary 1024px artwork plus the downscaled set.
pub const DEFAULT_SIZES: [u32; 7] = [1024, 512, 256, 128, 64, 32, 16];

/// Render and write one PNG per requested size.
///
/// The first size in the sequence is the primary artifact and is written as
/// `icon.png`; every other size gets an `icon_<S>x<S>.png` name. Sizes are
/// processed in the given order and the batch stops on the first error,
/// leaving any artifacts already written in place.
pub fn export_all(
    renderer: &IconRenderer,
    sizes: &[u32],
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    let mut written = Vec::with_capacity(sizes.len());
    for (index, &size) in sizes.iter().enumerate() {
        let filename = if index == 0 {
            println!("Creating {size}x{size} icon...");
            "icon.png".to_string()
        } else {
            format!("icon_{size}x{size}.png")
        };

        let canvas = renderer.render(size)?;
        let path = out_dir.join(&filename);
        write_png(&canvas, &path)?;
        println!("✓ Created {}", path.display());
        written.push(path);
    }

    Ok(written)
}

// Encode the canvas as PNG with best lossless compression
fn write_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let mut out_file = BufWriter::new(
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
    );
    let encoder = PngEncoder::new_with_quality(
        &mut out_file,
        CompressionType::Best,
        PngFilterType::Adaptive,
    );
    encoder
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ColorType::Rgba8,
        )
        .with_context(|| format!("Failed to write {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}
