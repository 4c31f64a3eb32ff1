use crate::font::{self, ResolvedFont};
use anyhow::Result;
use image::{Rgba, RgbaImage};

/// Gradient colors for the icon face.
///
/// `primary` is the disc edge color and the hue reused (at lower alpha) for
/// the opening seam and the letter mark; `secondary` is the disc center color.
#[derive(Debug, Clone, Copy)]
pub struct IconStyle {
    pub primary: Rgba<u8>,
    pub secondary: Rgba<u8>,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            // Indigo #6366f1 -> purple #8b5cf6
            primary: Rgba([99, 102, 241, 255]),
            secondary: Rgba([139, 92, 246, 255]),
        }
    }
}

/// Inclusive pixel rectangle, `[x0, y0]..=[x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }
}

/// All geometry derived from the requested icon size.
///
/// Every field is a truncated fraction of `size`, so two specs built from the
/// same size are identical and element sizes scale linearly (within the one
/// pixel lost to truncation).
#[derive(Debug, Clone, Copy)]
pub struct ShapeSpec {
    pub center: i32,
    pub radius: i32,
    pub wallet: Rect,
    pub corner_radius: i32,
    pub flap_apex_y: i32,
    pub seam_y: i32,
    pub seam_thickness: i32,
    pub slots: [Rect; 2],
    pub slot_radius: i32,
    pub glyph_px: i32,
    pub glyph_top: i32,
    pub shine: Rect,
}

impl ShapeSpec {
    pub fn for_size(size: u32) -> Self {
        let s = size as f32;
        let center = (size / 2) as i32;

        let radius = (s * 0.45) as i32;

        let wallet_w = (s * 0.5) as i32;
        let wallet_h = (s * 0.375) as i32;
        let wallet_x = center - wallet_w / 2;
        let wallet_y = center - wallet_h / 2 + (s * 0.05) as i32;
        let wallet = Rect {
            x0: wallet_x,
            y0: wallet_y,
            x1: wallet_x + wallet_w,
            y1: wallet_y + wallet_h,
        };

        let slot_w = (wallet_w as f32 * 0.75) as i32;
        let slot_h = (s * 0.047) as i32;
        let slot_x = center - slot_w / 2;
        let slot_y1 = wallet_y + (s * 0.16) as i32;
        let slot_y2 = wallet_y + (s * 0.24) as i32;
        let slots = [
            Rect {
                x0: slot_x,
                y0: slot_y1,
                x1: slot_x + slot_w,
                y1: slot_y1 + slot_h,
            },
            Rect {
                x0: slot_x,
                y0: slot_y2,
                x1: slot_x + (slot_w as f32 * 0.83) as i32,
                y1: slot_y2 + slot_h,
            },
        ];

        let shine_x = wallet_x + (wallet_w as f32 * 0.2) as i32;
        let shine_y = wallet_y + (wallet_h as f32 * 0.15) as i32;
        let shine_size = (s * 0.12) as i32;
        let shine = Rect {
            x0: shine_x,
            y0: shine_y,
            x1: shine_x + shine_size,
            y1: shine_y + (shine_size as f32 * 0.7) as i32,
        };

        Self {
            center,
            radius,
            wallet,
            corner_radius: (s * 0.03) as i32,
            flap_apex_y: wallet_y - (s * 0.1) as i32,
            seam_y: wallet_y + (s * 0.08) as i32,
            seam_thickness: (s * 0.008) as i32,
            slots,
            slot_radius: (s * 0.008) as i32,
            glyph_px: (s * 0.2) as i32,
            glyph_top: wallet.y1 + (s * 0.08) as i32,
            shine,
        }
    }
}

/// Renders the icon at any requested size.
///
/// The font is resolved once at construction, so every `render` call in a
/// batch uses the same glyph source and output is deterministic per size.
pub struct IconRenderer {
    style: IconStyle,
    font: ResolvedFont,
}

impl IconRenderer {
    pub fn new(style: IconStyle) -> Self {
        Self {
            style,
            font: font::resolve_font(),
        }
    }

    /// Produce the fully composed `size`×`size` RGBA canvas.
    pub fn render(&self, size: u32) -> Result<RgbaImage> {
        if size == 0 {
            anyhow::bail!("Icon size must be a positive number of pixels");
        }

        let shape = ShapeSpec::for_size(size);
        let mut canvas = RgbaImage::new(size, size);

        paint_gradient_disc(&mut canvas, &shape, &self.style);

        // Wallet body
        fill_rounded_rect(
            &mut canvas,
            shape.wallet,
            shape.corner_radius,
            Rgba([255, 255, 255, 240]),
        );

        // Flap over the top edge, apex raised above the body
        fill_triangle(
            &mut canvas,
            (shape.wallet.x0, shape.wallet.y0),
            (shape.center, shape.flap_apex_y),
            (shape.wallet.x1, shape.wallet.y0),
            Rgba([255, 255, 255, 220]),
        );

        // Opening seam; below S=125 the thickness truncates to zero and the
        // seam is simply not drawn
        if shape.seam_thickness > 0 {
            let y0 = shape.seam_y - shape.seam_thickness / 2;
            fill_rect(
                &mut canvas,
                Rect {
                    x0: shape.wallet.x0,
                    y0,
                    x1: shape.wallet.x1,
                    y1: y0 + shape.seam_thickness - 1,
                },
                with_alpha(self.style.primary, 100),
            );
        }

        // Card slots, the lower one narrower and fainter
        fill_rounded_rect(
            &mut canvas,
            shape.slots[0],
            shape.slot_radius,
            Rgba([229, 231, 235, 150]),
        );
        fill_rounded_rect(
            &mut canvas,
            shape.slots[1],
            shape.slot_radius,
            Rgba([229, 231, 235, 100]),
        );

        // Letter mark centered under the wallet
        font::draw_glyph(
            &mut canvas,
            &self.font,
            'H',
            shape.glyph_px,
            shape.center,
            shape.glyph_top,
            with_alpha(self.style.primary, 200),
        );

        // Specular shine on the upper-left of the body
        fill_ellipse(&mut canvas, shape.shine, Rgba([255, 255, 255, 80]));

        Ok(canvas)
    }
}

fn with_alpha(color: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], alpha])
}

/// Color of gradient ring `ring` (1..=radius), counted from the center out.
///
/// Channels interpolate from `primary` at the edge to `secondary` at the
/// center; alpha is opaque in the outer 10% and ramps down to zero at the
/// center, giving the disc a soft edge. Interpolated values are truncated,
/// not rounded; the slight banding is part of the look.
pub fn ring_color(ring: u32, radius: u32, style: &IconStyle) -> Rgba<u8> {
    let ratio = ring as f32 / radius as f32;
    let lerp = |edge: u8, center: u8| {
        (edge as f32 + (center as f32 - edge as f32) * (1.0 - ratio)) as u8
    };

    let soft_edge = radius as f32 * 0.9;
    let alpha = if ring as f32 > soft_edge {
        255
    } else {
        (255.0 * ring as f32 / soft_edge) as u8
    };

    Rgba([
        lerp(style.primary[0], style.secondary[0]),
        lerp(style.primary[1], style.secondary[1]),
        lerp(style.primary[2], style.secondary[2]),
        alpha,
    ])
}

/// Paint the background disc: concentric rings from radius down to 1, inner
/// rings overpainting outer ones. Each pixel ends up colored by the smallest
/// ring that covers it, so one pass over the canvas suffices.
fn paint_gradient_disc(canvas: &mut RgbaImage, shape: &ShapeSpec, style: &IconStyle) {
    let radius = shape.radius;
    if radius < 1 {
        return;
    }

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let dx = (x as i32 - shape.center) as i64;
        let dy = (y as i32 - shape.center) as i64;
        let d2 = dx * dx + dy * dy;

        let ring = ((d2 as f64).sqrt().ceil() as i32).max(1);
        if ring <= radius {
            *pixel = ring_color(ring as u32, radius as u32, style);
        }
    }
}

/// Overpaint a pixel, clipping to the canvas.
fn put_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

fn fill_rect(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    for y in rect.y0..=rect.y1 {
        for x in rect.x0..=rect.x1 {
            put_pixel(canvas, x, y, color);
        }
    }
}

fn fill_rounded_rect(canvas: &mut RgbaImage, rect: Rect, radius: i32, color: Rgba<u8>) {
    let r = radius.max(0);
    let r2 = (r as i64) * (r as i64);

    for y in rect.y0..=rect.y1 {
        for x in rect.x0..=rect.x1 {
            // Outside the corner arcs the rectangle test alone applies
            let dx = if x < rect.x0 + r {
                (rect.x0 + r - x) as i64
            } else if x > rect.x1 - r {
                (x - (rect.x1 - r)) as i64
            } else {
                0
            };
            let dy = if y < rect.y0 + r {
                (rect.y0 + r - y) as i64
            } else if y > rect.y1 - r {
                (y - (rect.y1 - r)) as i64
            } else {
                0
            };
            if dx * dx + dy * dy <= r2 {
                put_pixel(canvas, x, y, color);
            }
        }
    }
}

fn fill_triangle(
    canvas: &mut RgbaImage,
    a: (i32, i32),
    b: (i32, i32),
    c: (i32, i32),
    color: Rgba<u8>,
) {
    let edge = |p: (i32, i32), q: (i32, i32), x: i32, y: i32| -> i64 {
        (q.0 - p.0) as i64 * (y - p.1) as i64 - (q.1 - p.1) as i64 * (x - p.0) as i64
    };

    let min_x = a.0.min(b.0).min(c.0);
    let max_x = a.0.max(b.0).max(c.0);
    let min_y = a.1.min(b.1).min(c.1);
    let max_y = a.1.max(b.1).max(c.1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let d0 = edge(a, b, x, y);
            let d1 = edge(b, c, x, y);
            let d2 = edge(c, a, x, y);
            // Edges count as inside regardless of winding
            let all_neg = d0 <= 0 && d1 <= 0 && d2 <= 0;
            let all_pos = d0 >= 0 && d1 >= 0 && d2 >= 0;
            if all_neg || all_pos {
                put_pixel(canvas, x, y, color);
            }
        }
    }
}

fn fill_ellipse(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    // Semi-axes of at least half a pixel so degenerate 1-pixel spans still paint
    let a = ((rect.x1 - rect.x0) as f32 / 2.0).max(0.5);
    let b = ((rect.y1 - rect.y0) as f32 / 2.0).max(0.5);
    let cx = rect.x0 as f32 + (rect.x1 - rect.x0) as f32 / 2.0;
    let cy = rect.y0 as f32 + (rect.y1 - rect.y0) as f32 / 2.0;

    for y in rect.y0..=rect.y1 {
        for x in rect.x0..=rect.x1 {
            let nx = (x as f32 - cx) / a;
            let ny = (y as f32 - cy) / b;
            if nx * nx + ny * ny <= 1.0 {
                put_pixel(canvas, x, y, color);
            }
        }
    }
}

/// Blend `color` into the canvas weighted by glyph coverage `v` (0.0..=1.0).
pub(crate) fn blend_coverage(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, v: f32) {
    if v <= 0.0 || x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }
    let v = v.min(1.0);
    let dst = canvas.get_pixel_mut(x as u32, y as u32);
    for ch in 0..4 {
        dst[ch] = (dst[ch] as f32 * (1.0 - v) + color[ch] as f32 * v) as u8;
    }
}
