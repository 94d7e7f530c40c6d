//! Drawing tool selection.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Drawing tool selection.
///
/// The active tool determines what happens when the user presses and drags
/// on the surface. Exactly one tool is active at a time, changed only by
/// explicit user selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand painting - stamps filled disks along the pointer path (default)
    Brush,
    /// Erases squares along the pointer path back to transparent
    Eraser,
    /// Repaints the entire surface in the active color on a single press
    Fill,
}

impl Tool {
    /// Whether the color palette is relevant to this tool.
    ///
    /// The palette is shown for Brush and Fill and hidden for Eraser, which
    /// ignores the active color entirely.
    pub fn uses_palette(self) -> bool {
        matches!(self, Tool::Brush | Tool::Fill)
    }

    /// The selector string for this tool, as emitted by the tool picker.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Brush => "brush",
            Tool::Eraser => "eraser",
            Tool::Fill => "fill",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a tool selector string is not recognized.
///
/// Callers keep the previous valid tool rather than transitioning, so an
/// undefined tool mode can never be entered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool mode '{0}'")]
pub struct UnknownToolError(pub String);

impl FromStr for Tool {
    type Err = UnknownToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brush" => Ok(Tool::Brush),
            "eraser" => Ok(Tool::Eraser),
            "fill" => Ok(Tool::Fill),
            _ => Err(UnknownToolError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selector_strings() {
        assert_eq!("brush".parse::<Tool>(), Ok(Tool::Brush));
        assert_eq!("eraser".parse::<Tool>(), Ok(Tool::Eraser));
        assert_eq!("Fill".parse::<Tool>(), Ok(Tool::Fill));
    }

    #[test]
    fn rejects_unknown_selector() {
        let err = "spraycan".parse::<Tool>().unwrap_err();
        assert_eq!(err, UnknownToolError("spraycan".into()));
    }

    #[test]
    fn palette_relevance_per_tool() {
        assert!(Tool::Brush.uses_palette());
        assert!(Tool::Fill.uses_palette());
        assert!(!Tool::Eraser.uses_palette());
    }
}
