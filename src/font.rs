use crate::render::blend_coverage;
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::fs;

/// System fonts tried in order for the letter mark. The Arial Bold locations
/// cover macOS; the DejaVu and Liberation paths cover most Linux installs.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

/// Outcome of the font fallback chain.
///
/// Resolution never fails: when no system font loads, a built-in blocky
/// letterform is used, at the cost of glyph fidelity.
pub enum ResolvedFont {
    Truetype(Font<'static>),
    Builtin,
}

/// Walk the fallback chain: each system path in order, then the built-in
/// letterform as the guaranteed last resort.
pub fn resolve_font() -> ResolvedFont {
    for path in SYSTEM_FONT_PATHS {
        if let Ok(data) = fs::read(path) {
            if let Some(font) = Font::try_from_vec(data) {
                return ResolvedFont::Truetype(font);
            }
        }
    }
    ResolvedFont::Builtin
}

/// Draw `ch` at `px` em size, horizontally centered on `center_x`, with the
/// top of the ink at `top_y`. Anti-aliased coverage is blended; the built-in
/// fallback paints hard-edged cells.
pub fn draw_glyph(
    canvas: &mut RgbaImage,
    font: &ResolvedFont,
    ch: char,
    px: i32,
    center_x: i32,
    top_y: i32,
    color: Rgba<u8>,
) {
    if px <= 0 {
        return;
    }

    match font {
        ResolvedFont::Truetype(f) => {
            let scale = Scale::uniform(px as f32);
            let glyph = f.glyph(ch).scaled(scale).positioned(point(0.0, 0.0));
            if let Some(bb) = glyph.pixel_bounding_box() {
                let left = center_x - bb.width() / 2;
                glyph.draw(|gx, gy, v| {
                    blend_coverage(canvas, left + gx as i32, top_y + gy as i32, color, v);
                });
            }
        }
        ResolvedFont::Builtin => draw_builtin_glyph(canvas, ch, px, center_x, top_y, color),
    }
}

/// 5×7 cell grid per letterform, one row per byte, high bit leftmost.
const BUILTIN_H: [u8; 7] = [
    0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001,
];

/// Pixel size of one grid cell for a given em size. A seventh of the em would
/// overshoot the canvas at the glyph's anchor, so the letterform occupies
/// roughly the cap height (0.7 em) like a real bold face.
pub fn builtin_cell(px: i32) -> i32 {
    (px / 10).max(1)
}

fn draw_builtin_glyph(
    canvas: &mut RgbaImage,
    ch: char,
    px: i32,
    center_x: i32,
    top_y: i32,
    color: Rgba<u8>,
) {
    let rows = match ch {
        'H' => &BUILTIN_H,
        // Only the wallet letter mark is in the built-in set
        _ => return,
    };

    let cell = builtin_cell(px);
    let left = center_x - (5 * cell) / 2;

    for (row, bits) in rows.iter().enumerate() {
        for col in 0..5 {
            if *bits & (0b10000 >> col) != 0 {
                for dy in 0..cell {
                    for dx in 0..cell {
                        blend_coverage(
                            canvas,
                            left + col as i32 * cell + dx,
                            top_y + row as i32 * cell + dy,
                            color,
                            1.0,
                        );
                    }
                }
            }
        }
    }
}
