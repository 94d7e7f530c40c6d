//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use super::enums::ColorSpec;

/// Drawing-related settings.
///
/// Controls the tool, color, and brush size the pad starts with. Users can
/// change all of these at runtime from the widget itself.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DrawingConfig {
    /// Initial tool: "brush", "eraser", or "fill"
    #[serde(default = "default_tool")]
    pub default_tool: String,

    /// Initial color - either a named palette color (black, red, green, blue,
    /// yellow, orange, pink, white) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial brush diameter / eraser side in pixels (valid range: 1 - 64)
    #[serde(default = "default_brush_size")]
    pub brush_size: i32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_color: default_color(),
            brush_size: default_brush_size(),
        }
    }
}

/// Export settings.
///
/// Controls where exported drawings are written and how they are named.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExportConfig {
    /// Directory to save drawings to; `~` is expanded. Defaults to the
    /// user's pictures directory when unset.
    #[serde(default)]
    pub save_directory: Option<String>,

    /// Filename template with chrono format specifiers; the `.png`
    /// extension is appended automatically
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: None,
            filename_template: default_filename_template(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    /// Initial viewport (window) width in pixels (valid range: 100 - 4096)
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
        }
    }
}

fn default_tool() -> String {
    "brush".to_string()
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_brush_size() -> i32 {
    5
}

fn default_filename_template() -> String {
    "painting_%Y-%m-%d_%H%M%S".to_string()
}

fn default_viewport_width() -> u32 {
    600
}
