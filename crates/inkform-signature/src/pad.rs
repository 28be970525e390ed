use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::error::SignatureError;

/// Pen ink, near-black.
const INK: Rgba<u8> = Rgba([17, 24, 39, 255]);

/// The blank, opaque background the pad presents and exports over.
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Pen stroke width in surface units.
const PEN_WIDTH: f32 = 2.5;

/// Ink detection samples every Nth pixel in both axes.
const INK_SAMPLE_STRIDE: usize = 4;

/// A raster signature surface.
///
/// The surface is sized in layout units (`width` x `height`) and backed by a
/// pixel buffer scaled by the device pixel ratio for sharp rendering.
/// Strokes accumulate on a transparent ink layer over an opaque background:
/// the ink layer's alpha channel is what [`SignaturePad::has_ink`] samples,
/// and [`SignaturePad::export_png`] composites ink over the background.
///
/// Pointer protocol: while the pointer is down, consecutive sample points
/// are connected with stamped line segments. Moves while the pointer is up
/// are ignored, and a down/up pair with no movement draws nothing; a
/// stroke must have non-zero length to leave ink.
pub struct SignaturePad {
    ink: RgbaImage,
    width: u32,
    height: u32,
    scale: f32,
    pointer_down: bool,
    last_point: Option<(f32, f32)>,
}

impl SignaturePad {
    /// Create a blank pad. `device_pixel_ratio` values that are not finite
    /// and positive fall back to 1.0.
    pub fn new(width: u32, height: u32, device_pixel_ratio: f32) -> Result<Self, SignatureError> {
        if width == 0 || height == 0 {
            return Err(SignatureError::EmptySurface { width, height });
        }
        let scale = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let (pixel_w, pixel_h) = scaled_dimensions(width, height, scale);

        Ok(Self {
            ink: RgbaImage::new(pixel_w, pixel_h),
            width,
            height,
            scale,
            pointer_down: false,
            last_point: None,
        })
    }

    /// Surface size in layout units.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Backing buffer size in physical pixels.
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        self.ink.dimensions()
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.scale
    }

    /// Begin a stroke at `(x, y)` in surface units. Nothing is drawn until
    /// the pointer moves.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer_down = true;
        self.last_point = Some((x, y));
    }

    /// Extend the current stroke to `(x, y)`. Ignored while the pointer is
    /// up.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.pointer_down {
            return;
        }
        if let Some(last) = self.last_point {
            self.stamp_segment(last, (x, y));
        }
        self.last_point = Some((x, y));
    }

    /// End the current stroke.
    pub fn pointer_up(&mut self) {
        self.pointer_down = false;
        self.last_point = None;
    }

    /// Wipe all strokes back to the blank background.
    pub fn clear(&mut self) {
        let (pixel_w, pixel_h) = self.ink.dimensions();
        self.ink = RgbaImage::new(pixel_w, pixel_h);
        self.last_point = None;
    }

    /// Re-initialize the surface at a new size. Any in-progress drawing is
    /// lost.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SignatureError> {
        if width == 0 || height == 0 {
            return Err(SignatureError::EmptySurface { width, height });
        }
        let (pixel_w, pixel_h) = scaled_dimensions(width, height, self.scale);
        self.width = width;
        self.height = height;
        self.ink = RgbaImage::new(pixel_w, pixel_h);
        self.pointer_down = false;
        self.last_point = None;
        Ok(())
    }

    /// True if any sampled pixel of the ink layer is non-transparent.
    ///
    /// Samples every [`INK_SAMPLE_STRIDE`]th pixel in both axes. This is a
    /// heuristic: a mark narrower than the stride that falls entirely
    /// between sample points can be missed, but pen strokes are wider than
    /// that in practice.
    pub fn has_ink(&self) -> bool {
        let (pixel_w, pixel_h) = self.ink.dimensions();
        for y in (0..pixel_h).step_by(INK_SAMPLE_STRIDE) {
            for x in (0..pixel_w).step_by(INK_SAMPLE_STRIDE) {
                if self.ink.get_pixel(x, y)[3] != 0 {
                    return true;
                }
            }
        }
        false
    }

    /// PNG-encode the surface: ink composited over the opaque background.
    pub fn export_png(&self) -> Result<Vec<u8>, SignatureError> {
        let (pixel_w, pixel_h) = self.ink.dimensions();
        let mut surface = RgbaImage::from_pixel(pixel_w, pixel_h, BACKGROUND);

        for (x, y, pixel) in self.ink.enumerate_pixels() {
            let alpha = pixel[3] as u16;
            if alpha == 0 {
                continue;
            }
            let out = surface.get_pixel_mut(x, y);
            for channel in 0..3 {
                let ink_c = pixel[channel] as u16;
                let bg_c = out[channel] as u16;
                out[channel] = ((ink_c * alpha + bg_c * (255 - alpha)) / 255) as u8;
            }
            out[3] = 255;
        }

        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(surface).write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }

    /// Connect two surface-unit points with a stamped round-pen segment.
    fn stamp_segment(&mut self, from: (f32, f32), to: (f32, f32)) {
        let (x0, y0) = (from.0 * self.scale, from.1 * self.scale);
        let (x1, y1) = (to.0 * self.scale, to.1 * self.scale);
        let (dx, dy) = (x1 - x0, y1 - y0);
        let length = (dx * dx + dy * dy).sqrt();
        if length == 0.0 {
            return;
        }

        let radius = (PEN_WIDTH * self.scale / 2.0).max(0.5);
        let steps = length.ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp_dot(x0 + dx * t, y0 + dy * t, radius);
        }
    }

    /// Fill a disc of `radius` pixels centered at pixel-space `(cx, cy)`.
    fn stamp_dot(&mut self, cx: f32, cy: f32, radius: f32) {
        let (pixel_w, pixel_h) = self.ink.dimensions();
        let min_x = (cx - radius).floor() as i64;
        let max_x = (cx + radius).ceil() as i64;
        let min_y = (cy - radius).floor() as i64;
        let max_y = (cy + radius).ceil() as i64;

        for py in min_y..=max_y {
            if py < 0 || py >= pixel_h as i64 {
                continue;
            }
            for px in min_x..=max_x {
                if px < 0 || px >= pixel_w as i64 {
                    continue;
                }
                let fx = px as f32 + 0.5 - cx;
                let fy = py as f32 + 0.5 - cy;
                if fx * fx + fy * fy <= radius * radius {
                    self.ink.put_pixel(px as u32, py as u32, INK);
                }
            }
        }
    }
}

fn scaled_dimensions(width: u32, height: u32, scale: f32) -> (u32, u32) {
    let pixel_w = ((width as f32) * scale).round().max(1.0) as u32;
    let pixel_h = ((height as f32) * scale).round().max(1.0) as u32;
    (pixel_w, pixel_h)
}
