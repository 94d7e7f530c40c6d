//! minifb window frontend.
//!
//! Plays the role of the page hosting the widget: it presents the surface in
//! a window, turns raw mouse input into [`DeviceEvent`]s for the pointer
//! tracker, and wires the external collaborators (tool selector, palette,
//! brush size, clear, export) to keyboard and mouse commands:
//!
//! - `B` / `E` / `F` - brush / eraser / fill
//! - click a swatch or press `1`-`8` - pick a color
//! - `+` / `-` - adjust brush size
//! - `C` - clear the surface
//! - `S` - export to PNG
//! - `Escape` - quit
//!
//! Resizing the window is the viewport-resize notification; the surface is
//! recomputed per the responsive sizing policy on every change. Touch input
//! has no minifb equivalent, so the tracker's touch path is exercised only
//! by tests.

use anyhow::{Context, Result};
use log::{error, info};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::config::Config;
use crate::draw::color::PALETTE;
use crate::draw::Surface;
use crate::export::{self, FileSaveConfig};
use crate::input::{DeviceEvent, InputState, PointerTracker, SurfaceRect, Tool};
use crate::util;

/// Padding between the window edge and the surface, in pixels.
const SURFACE_MARGIN: usize = 16;
/// Swatch square side length.
const SWATCH_SIZE: usize = 22;
/// Vertical distance between swatch tops.
const SWATCH_STRIDE: usize = 30;
/// Page background color (0RGB).
const BACKGROUND: u32 = 0x00e8e8e8;
/// Border color for the surface and swatches (0RGB).
const BORDER: u32 = 0x00404040;

/// The windowed frontend state.
pub struct WindowBackend {
    window: Window,
    tracker: PointerTracker,
    input: InputState,
    save_config: FileSaveConfig,
    frame: Vec<u32>,
    frame_size: (usize, usize),
    // Previous-frame mouse state for edge detection.
    was_down: bool,
    was_inside: bool,
    last_pos: Option<(f32, f32)>,
}

impl WindowBackend {
    /// Creates the window and the drawing session from config defaults.
    pub fn new(config: &Config, viewport_width: Option<u32>) -> Result<Self> {
        let viewport_width = viewport_width.unwrap_or(config.ui.viewport_width);
        let (surface_w, surface_h) = util::surface_size(viewport_width);

        // Tall enough for the palette column even when the surface is short.
        let window_h = (surface_h as usize + 2 * SURFACE_MARGIN)
            .max(2 * SURFACE_MARGIN + PALETTE.len() * SWATCH_STRIDE);

        let window = Window::new(
            "Inkpad",
            viewport_width as usize,
            window_h,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .context("Failed to create window")?;

        // Unknown tool names were already replaced during config validation.
        let tool = config
            .drawing
            .default_tool
            .parse::<Tool>()
            .unwrap_or(Tool::Brush);

        let input = InputState::with_defaults(
            Surface::new(surface_w, surface_h),
            tool,
            config.drawing.default_color.to_color(),
            config.drawing.brush_size,
        );

        Ok(Self {
            window,
            tracker: PointerTracker::new(),
            input,
            save_config: config.file_save_config(),
            frame: Vec::new(),
            frame_size: (0, 0),
            was_down: false,
            was_inside: false,
            last_pos: None,
        })
    }

    /// Runs the event loop until the window closes or Escape is pressed.
    pub fn run(&mut self) -> Result<()> {
        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            let (win_w, win_h) = self.window.get_size();

            // The window width is the viewport; recompute the surface on
            // every change (no-op when dimensions are unchanged).
            self.input.resize_viewport(win_w as u32);

            self.handle_keys();
            self.handle_mouse();

            if self.input.needs_redraw || self.frame_size != (win_w, win_h) {
                self.compose_frame(win_w, win_h);
                self.input.needs_redraw = false;
            }

            self.window
                .update_with_buffer(&self.frame, win_w, win_h)
                .context("Failed to update window buffer")?;
        }
        Ok(())
    }

    /// The surface's current on-screen rectangle, in window coordinates.
    ///
    /// Queried fresh for every event batch rather than cached, so pointer
    /// mapping stays correct across resizes.
    fn surface_rect(&self) -> SurfaceRect {
        SurfaceRect {
            left: SURFACE_MARGIN as f64,
            top: SURFACE_MARGIN as f64,
            width: self.input.surface.width() as f64,
            height: self.input.surface.height() as f64,
        }
    }

    /// Top-left corner of the swatch with the given palette index.
    fn swatch_origin(&self, index: usize) -> (usize, usize) {
        let x = SURFACE_MARGIN + self.input.surface.width() as usize + SURFACE_MARGIN;
        let y = SURFACE_MARGIN + index * SWATCH_STRIDE;
        (x, y)
    }

    /// Returns the palette index under the given window coordinate, if any.
    fn swatch_at(&self, x: f32, y: f32) -> Option<usize> {
        if !self.input.palette_visible {
            return None;
        }
        (0..PALETTE.len()).find(|&i| {
            let (sx, sy) = self.swatch_origin(i);
            (x as usize) >= sx
                && (x as usize) < sx + SWATCH_SIZE
                && (y as usize) >= sy
                && (y as usize) < sy + SWATCH_SIZE
        })
    }

    fn handle_keys(&mut self) {
        if self.window.is_key_pressed(Key::B, KeyRepeat::No) {
            self.input.set_tool(Tool::Brush);
        }
        if self.window.is_key_pressed(Key::E, KeyRepeat::No) {
            self.input.set_tool(Tool::Eraser);
        }
        if self.window.is_key_pressed(Key::F, KeyRepeat::No) {
            self.input.set_tool(Tool::Fill);
        }
        if self.window.is_key_pressed(Key::C, KeyRepeat::No) {
            self.input.clear();
        }
        if self.window.is_key_pressed(Key::S, KeyRepeat::No) {
            self.export_drawing();
        }
        if self.window.is_key_pressed(Key::Equal, KeyRepeat::Yes)
            || self.window.is_key_pressed(Key::NumPadPlus, KeyRepeat::Yes)
        {
            self.input.adjust_brush_size(1);
        }
        if self.window.is_key_pressed(Key::Minus, KeyRepeat::Yes)
            || self.window.is_key_pressed(Key::NumPadMinus, KeyRepeat::Yes)
        {
            self.input.adjust_brush_size(-1);
        }

        const DIGITS: [Key; 8] = [
            Key::Key1,
            Key::Key2,
            Key::Key3,
            Key::Key4,
            Key::Key5,
            Key::Key6,
            Key::Key7,
            Key::Key8,
        ];
        for (i, key) in DIGITS.iter().enumerate() {
            if self.window.is_key_pressed(*key, KeyRepeat::No) && self.input.palette_visible {
                self.input.set_color(PALETTE[i].1);
            }
        }
    }

    /// Turns polled mouse state into the raw device event stream.
    fn handle_mouse(&mut self) {
        let rect = self.surface_rect();
        let pos = self.window.get_mouse_pos(MouseMode::Pass);
        let down = self.window.get_mouse_down(MouseButton::Left);

        let inside = pos.is_some_and(|(x, y)| rect.contains(x as f64, y as f64));
        let mut events = Vec::new();

        if self.was_inside && !inside {
            events.push(DeviceEvent::MouseOut);
        }

        if down && !self.was_down {
            if let Some((x, y)) = pos {
                if let Some(i) = self.swatch_at(x, y) {
                    // Palette collaborator: swatch chosen.
                    self.input.set_color(PALETTE[i].1);
                } else {
                    events.push(DeviceEvent::MouseDown {
                        x: x as f64,
                        y: y as f64,
                    });
                }
            }
        } else if down && self.was_down {
            if let Some((x, y)) = pos
                && self.last_pos != Some((x, y))
            {
                events.push(DeviceEvent::MouseMove {
                    x: x as f64,
                    y: y as f64,
                });
            }
        } else if !down && self.was_down {
            events.push(DeviceEvent::MouseUp);
        }

        for event in &events {
            // minifb has no default gestures, so suppress_default is moot here.
            let normalized = self.tracker.normalize(event, rect);
            if let Some(pointer) = normalized.event {
                self.input.on_pointer_event(pointer);
            }
        }

        self.was_down = down;
        self.was_inside = inside;
        self.last_pos = pos;
    }

    fn export_drawing(&mut self) {
        let encoded = match export::encode_png(&self.input.surface) {
            Ok(bytes) => bytes,
            Err(err) => {
                error!("Export failed: {err}");
                return;
            }
        };
        match export::save_drawing(&encoded, &self.save_config) {
            Ok(path) => info!("Drawing saved to {}", path.display()),
            Err(err) => error!("Failed to save drawing: {err}"),
        }
    }

    // ------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------

    /// Rebuilds the 0RGB frame buffer for the current window size.
    fn compose_frame(&mut self, win_w: usize, win_h: usize) {
        self.frame.clear();
        self.frame.resize(win_w * win_h, BACKGROUND);
        self.frame_size = (win_w, win_h);

        self.blit_surface(win_w, win_h);

        if self.input.palette_visible {
            for (i, (_, color)) in PALETTE.iter().enumerate() {
                let (x, y) = self.swatch_origin(i);
                self.fill_rect(x, y, SWATCH_SIZE, SWATCH_SIZE, pack(color.to_rgba8()));
                self.stroke_rect(x, y, SWATCH_SIZE, SWATCH_SIZE, BORDER);
            }
        }

        // Active-color indicator below the palette column.
        let (ix, _) = self.swatch_origin(0);
        let iy = SURFACE_MARGIN + PALETTE.len() * SWATCH_STRIDE + SURFACE_MARGIN / 2;
        self.fill_rect(
            ix,
            iy,
            SWATCH_SIZE,
            SWATCH_SIZE,
            pack(self.input.active_color.to_rgba8()),
        );
        self.stroke_rect(ix, iy, SWATCH_SIZE, SWATCH_SIZE, BORDER);
    }

    /// Draws the surface composited over white, with a 1px border.
    fn blit_surface(&mut self, win_w: usize, win_h: usize) {
        let sw = self.input.surface.width() as usize;
        let sh = self.input.surface.height() as usize;
        let pixels = self.input.surface.pixels();

        for sy in 0..sh {
            let wy = SURFACE_MARGIN + sy;
            if wy >= win_h {
                break;
            }
            for sx in 0..sw {
                let wx = SURFACE_MARGIN + sx;
                if wx >= win_w {
                    break;
                }
                let idx = (sy * sw + sx) * 4;
                let a = pixels[idx + 3] as u32;
                // Composite over a white page background.
                let r = (pixels[idx] as u32 * a + 255 * (255 - a)) / 255;
                let g = (pixels[idx + 1] as u32 * a + 255 * (255 - a)) / 255;
                let b = (pixels[idx + 2] as u32 * a + 255 * (255 - a)) / 255;
                self.frame[wy * win_w + wx] = (r << 16) | (g << 8) | b;
            }
        }

        if sw > 0 && sh > 0 {
            self.stroke_rect(SURFACE_MARGIN - 1, SURFACE_MARGIN - 1, sw + 2, sh + 2, BORDER);
        }
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let (win_w, win_h) = self.frame_size;
        for py in y..(y + h).min(win_h) {
            for px in x..(x + w).min(win_w) {
                self.frame[py * win_w + px] = color;
            }
        }
    }

    fn stroke_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        self.fill_rect(x, y, w, 1, color);
        self.fill_rect(x, y + h.saturating_sub(1), w, 1, color);
        self.fill_rect(x, y, 1, h, color);
        self.fill_rect(x + w.saturating_sub(1), y, 1, h, color);
    }
}

/// Packs straight RGBA8 into minifb's 0RGB layout (alpha dropped).
fn pack(rgba: [u8; 4]) -> u32 {
    ((rgba[0] as u32) << 16) | ((rgba[1] as u32) << 8) | rgba[2] as u32
}
