use anyhow::Result;
use clap::Parser;
use image::Rgba;
use std::path::PathBuf;
use std::str::FromStr;
use wallet_icon_gen::{export_all, IconRenderer, IconStyle, DEFAULT_SIZES};

#[derive(Debug, Parser)]
#[clap(
    name = "wallet-icon-gen",
    about = "Render the wallet app icon as PNG files at multiple resolutions"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Custom PNG icon sizes to generate. When set, only these sizes are
    /// generated; the first one becomes the unsuffixed icon.png.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    png: Option<Vec<u32>>,

    /// Gradient edge color, also used for the seam and letter mark (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#6366f1")]
    primary: String,

    /// Gradient center color (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#8b5cf6")]
    secondary: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let style = IconStyle {
        primary: parse_color(&args.primary)?,
        secondary: parse_color(&args.secondary)?,
    };
    let renderer = IconRenderer::new(style);

    let sizes = args.png.unwrap_or_else(|| DEFAULT_SIZES.to_vec());
    export_all(&renderer, &sizes, &args.output)?;

    Ok(())
}

fn parse_color(color: &str) -> Result<Rgba<u8>> {
    css_color::Srgb::from_str(color)
        .map(|c| {
            Rgba([
                (c.red * 255.) as u8,
                (c.green * 255.) as u8,
                (c.blue * 255.) as u8,
                255,
            ])
        })
        .map_err(|_| anyhow::anyhow!("Invalid CSS color: {color}"))
}
