//! PNG export: encoding the surface and saving it to disk.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::Local;
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::draw::Surface;

/// Errors that can occur while exporting a drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The surface has a zero dimension, so there is nothing to encode.
    #[error("surface is empty ({width}x{height}), nothing to export")]
    EmptySurface { width: u32, height: u32 },
    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    /// Writing the file or creating the directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for saving exported drawings.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save drawings to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join("Inkpad"),
            filename_template: "painting_%Y-%m-%d_%H%M%S".to_string(),
        }
    }
}

/// Encodes the surface's current pixels as a PNG byte stream.
///
/// Lossless RGBA, side-effect-free: the surface is not modified and no file
/// is touched.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (surface.width(), surface.height());
    if width == 0 || height == 0 {
        return Err(ExportError::EmptySurface { width, height });
    }

    // The buffer invariant guarantees from_raw succeeds for live dimensions.
    let img = RgbaImage::from_raw(width, height, surface.pixels().to_vec())
        .expect("surface buffer matches its dimensions");

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Generate a filename based on the template and current time.
///
/// The `.png` extension is always appended; the export format is fixed.
pub fn generate_filename(template: &str) -> String {
    let now = Local::now();
    format!("{}.png", now.format(template))
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save an encoded drawing to a file.
///
/// # Arguments
/// * `image_data` - PNG bytes from [`encode_png`]
/// * `config` - Save directory and filename template
///
/// # Returns
/// Path to the saved file
pub fn save_drawing(image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;

    let filename = generate_filename(&config.filename_template);
    let file_path = directory.join(&filename);

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    log::debug!("File written: {} bytes", fs::metadata(&file_path)?.len());

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;
    use tempfile::TempDir;

    #[test]
    fn encode_png_round_trips_pixels() {
        let mut surface = Surface::new(16, 12);
        surface.stamp_circle(8, 6, 6, RED);
        let bytes = encode_png(&surface).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (16, 12));
        assert_eq!(decoded.get_pixel(8, 6).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn cleared_surface_exports_fully_transparent() {
        let mut surface = Surface::new(10, 8);
        surface.fill_all(RED);
        surface.clear_all();
        let bytes = encode_png(&surface).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (10, 8));
        assert!(decoded.pixels().all(|px| px.0[3] == 0));
    }

    #[test]
    fn encode_png_rejects_empty_surface() {
        let surface = Surface::new(0, 0);
        assert!(matches!(
            encode_png(&surface),
            Err(ExportError::EmptySurface { .. })
        ));
    }

    #[test]
    fn generate_filename_has_png_extension() {
        let filename = generate_filename("painting_%Y%m%d");
        assert!(filename.starts_with("painting_"));
        assert!(filename.ends_with(".png"));
    }

    #[test]
    fn save_drawing_writes_to_configured_directory() {
        let temp = TempDir::new().unwrap();
        let config = FileSaveConfig {
            save_directory: temp.path().join("drawings"),
            filename_template: "painting_%Y%m%d".to_string(),
        };

        let surface = Surface::new(4, 4);
        let bytes = encode_png(&surface).unwrap();
        let path = save_drawing(&bytes, &config).unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }
}
