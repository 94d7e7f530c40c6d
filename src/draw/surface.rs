//! The paintable raster surface.

use super::color::Color;

/// The paintable pixel buffer and its dimensions.
///
/// Pixels are stored row-major as 8-bit RGBA, four bytes per pixel. The
/// buffer length always equals `width * height * 4`; [`Surface::resize`]
/// re-establishes this before any further paint call.
///
/// All paint primitives silently clip to the surface bounds, and degenerate
/// sizes (zero or negative diameter/side) are no-ops rather than errors.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Creates a fully transparent surface of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA pixel buffer, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the RGBA value at (x, y), or `None` when out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    fn put_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Paints a filled disk of `diameter` centered at (cx, cy).
    ///
    /// Pixel centers within `diameter / 2` of the point are painted, so the
    /// disk spans exactly `diameter` pixels across. No effect when
    /// `diameter <= 0`.
    pub fn stamp_circle(&mut self, cx: i32, cy: i32, diameter: i32, color: Color) {
        if diameter <= 0 {
            return;
        }
        let rgba = color.to_rgba8();
        let radius = diameter as f64 / 2.0;
        let r2 = radius * radius;
        let half = (diameter + 1) / 2;
        for y in (cy - half)..=(cy + half) {
            for x in (cx - half)..=(cx + half) {
                let dx = x as f64 + 0.5 - cx as f64;
                let dy = y as f64 + 0.5 - cy as f64;
                if dx * dx + dy * dy <= r2 {
                    self.put_pixel(x, y, rgba);
                }
            }
        }
    }

    /// Clears an axis-aligned square of `side` pixels centered at (cx, cy)
    /// to fully transparent. No effect when `side <= 0`.
    pub fn clear_square(&mut self, cx: i32, cy: i32, side: i32) {
        if side <= 0 {
            return;
        }
        // Pixel centers within [c - side/2, c + side/2) are cleared, which
        // covers exactly `side` pixels per axis.
        let x0 = cx - (side + 1) / 2;
        let y0 = cy - (side + 1) / 2;
        for y in y0..(y0 + side) {
            for x in x0..(x0 + side) {
                self.put_pixel(x, y, [0, 0, 0, 0]);
            }
        }
    }

    /// Overwrites every pixel with `color`, fully opaque.
    pub fn fill_all(&mut self, color: Color) {
        let mut rgba = color.to_rgba8();
        rgba[3] = 255;
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Resets every pixel to fully transparent.
    pub fn clear_all(&mut self) {
        self.pixels.fill(0);
    }

    /// Resizes the surface, preserving existing content.
    ///
    /// Old content is copied back at the origin; any newly exposed area is
    /// transparent and content outside the new bounds is discarded. Callable
    /// at any time, including before any paint has occurred and mid-stroke.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width == self.width && new_height == self.height {
            return;
        }
        let mut new_pixels = vec![0u8; new_width as usize * new_height as usize * 4];
        let copy_w = self.width.min(new_width) as usize * 4;
        let copy_h = self.height.min(new_height) as usize;
        for row in 0..copy_h {
            let src = row * self.width as usize * 4;
            let dst = row * new_width as usize * 4;
            new_pixels[dst..dst + copy_w].copy_from_slice(&self.pixels[src..src + copy_w]);
        }
        self.width = new_width;
        self.height = new_height;
        self.pixels = new_pixels;
    }
}
