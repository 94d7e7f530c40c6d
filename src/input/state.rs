//! Stroke-session state machine and tool state management.

use log::{debug, warn};

use super::events::{PointerEvent, PointerEventKind, Position};
use super::tool::Tool;
use crate::draw::{Color, Surface};
use crate::util;

/// Valid range for the brush size control, in pixels.
pub const BRUSH_SIZE_RANGE: std::ops::RangeInclusive<i32> = 1..=64;

/// Current stroke-session state machine.
///
/// Tracks whether a continuous paint gesture is live. Transitions occur on
/// press and release; while `Idle`, move events are ignored entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    /// Not painting - waiting for a press on the surface
    Idle,
    /// A press-to-release gesture is live; moves paint
    Active,
}

/// Main input state containing all drawing session state.
///
/// Owns the [`Surface`], the active tool, color, and brush size, plus the
/// stroke-session state machine. It processes the unified pointer stream to
/// mutate the surface and flags when the display needs repainting.
pub struct InputState {
    /// The paintable raster surface
    pub surface: Surface,
    /// Current tool mode (changed only by explicit user selection)
    pub tool: Tool,
    /// Current drawing color (relevant for Brush and Fill)
    pub active_color: Color,
    /// Brush diameter / eraser side length in pixels
    pub brush_size: i32,
    /// Current stroke-session state machine
    pub state: StrokeState,
    /// Whether the color palette is relevant to the active tool
    pub palette_visible: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl InputState {
    /// Creates a new InputState around an existing surface.
    ///
    /// `palette_visible` is derived from the initial tool; the session
    /// starts idle with a redraw pending.
    pub fn with_defaults(surface: Surface, tool: Tool, color: Color, brush_size: i32) -> Self {
        Self {
            surface,
            tool,
            active_color: color,
            brush_size,
            state: StrokeState::Idle,
            palette_visible: tool.uses_palette(),
            needs_redraw: true,
        }
    }

    /// Processes one unified pointer event, in delivery order.
    ///
    /// # Behavior
    /// - Press while Idle: with the Fill tool, performs exactly one
    ///   whole-surface fill and stays Idle (fill is a single discrete
    ///   action); otherwise starts a stroke and paints at the press point.
    /// - Move: paints at the position only while a stroke is live.
    /// - Release: ends the stroke.
    pub fn on_pointer_event(&mut self, event: PointerEvent) {
        match event.kind {
            PointerEventKind::Press => {
                if self.state != StrokeState::Idle {
                    return;
                }
                if self.tool == Tool::Fill {
                    // Single discrete action; the session never activates,
                    // so moves during this gesture cannot fill again.
                    self.surface.fill_all(self.active_color);
                    self.needs_redraw = true;
                    return;
                }
                self.state = StrokeState::Active;
                if let Some(position) = event.position {
                    self.handle_paint_request(position);
                }
            }
            PointerEventKind::Move => {
                if self.state != StrokeState::Active {
                    return;
                }
                if let Some(position) = event.position {
                    self.handle_paint_request(position);
                }
            }
            PointerEventKind::Release => {
                self.state = StrokeState::Idle;
            }
        }
    }

    /// Dispatches one paint request at `position` per the active tool.
    ///
    /// Brush stamps a filled disk of the current size and color; Eraser
    /// clears a square of the current size. A brush size of zero or negative
    /// makes both a no-op at the surface level.
    pub fn handle_paint_request(&mut self, position: Position) {
        match self.tool {
            Tool::Brush => {
                self.surface
                    .stamp_circle(position.x, position.y, self.brush_size, self.active_color);
            }
            Tool::Eraser => {
                self.surface
                    .clear_square(position.x, position.y, self.brush_size);
            }
            // Fill is dispatched on press only (see on_pointer_event); kept
            // here so direct callers get the same tool semantics.
            Tool::Fill => {
                self.surface.fill_all(self.active_color);
            }
        }
        self.needs_redraw = true;
    }

    /// Switches the active tool and recomputes palette visibility.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }
        debug!("Tool switched to {tool}");
        self.tool = tool;
        self.palette_visible = tool.uses_palette();
        self.needs_redraw = true;
    }

    /// Switches tool by selector string ("brush", "eraser", "fill").
    ///
    /// An unrecognized string retains the previous valid tool with a
    /// warning; the state machine never enters an undefined tool mode.
    pub fn set_tool_name(&mut self, name: &str) {
        match name.parse::<Tool>() {
            Ok(tool) => self.set_tool(tool),
            Err(err) => warn!("{err}; keeping '{}'", self.tool),
        }
    }

    /// Switches the active color.
    ///
    /// The frontend reads `active_color` back to refresh its color
    /// indicator, so a redraw is flagged even though no pixels changed.
    pub fn set_color(&mut self, color: Color) {
        self.active_color = color;
        self.needs_redraw = true;
    }

    /// Sets the brush size, clamped to the valid control range.
    pub fn set_brush_size(&mut self, size: i32) {
        let clamped = size.clamp(*BRUSH_SIZE_RANGE.start(), *BRUSH_SIZE_RANGE.end());
        if clamped != size {
            warn!("Brush size {size} out of range, clamping to {clamped}");
        }
        self.brush_size = clamped;
        self.needs_redraw = true;
    }

    /// Adjusts the brush size by a delta, clamping to the valid range.
    pub fn adjust_brush_size(&mut self, delta: i32) {
        self.brush_size =
            (self.brush_size + delta).clamp(*BRUSH_SIZE_RANGE.start(), *BRUSH_SIZE_RANGE.end());
        self.needs_redraw = true;
        debug!("Brush size adjusted to {}px", self.brush_size);
    }

    /// Clears the entire surface back to transparent.
    pub fn clear(&mut self) {
        self.surface.clear_all();
        self.needs_redraw = true;
    }

    /// Recomputes the surface dimensions for a new viewport width.
    ///
    /// Applies the responsive sizing policy and resizes the surface,
    /// preserving content. Safe to call mid-stroke; the live gesture keeps
    /// painting on the resized buffer.
    pub fn resize_viewport(&mut self, viewport_width: u32) {
        let (width, height) = util::surface_size(viewport_width);
        if width == self.surface.width() && height == self.surface.height() {
            return;
        }
        debug!("Surface resized to {width}x{height}");
        self.surface.resize(width, height);
        self.needs_redraw = true;
    }
}
