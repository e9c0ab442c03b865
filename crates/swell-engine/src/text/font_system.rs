use std::fmt;
use std::path::Path;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned when a font cannot be loaded.
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Handle to a font loaded into a [`FontSystem`].
///
/// The default handle names the first font loaded.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct FontId(pub(crate) usize);

/// Owns the loaded fonts. Fonts are immutable after loading.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Loads the first readable and parseable font among `paths`.
    pub fn load_first<P: AsRef<Path>>(
        &mut self,
        paths: impl IntoIterator<Item = P>,
    ) -> Result<FontId, FontLoadError> {
        let mut tried = Vec::new();
        for p in paths {
            let p = p.as_ref();
            match std::fs::read(p) {
                Ok(bytes) => match self.load_font(&bytes) {
                    Ok(id) => {
                        log::info!("loaded font {}", p.display());
                        return Ok(id);
                    }
                    Err(e) => log::debug!("{}: {e}", p.display()),
                },
                Err(e) => log::debug!("{}: {e}", p.display()),
            }
            tried.push(p.display().to_string());
        }
        Err(FontLoadError(format!("no usable font among [{}]", tried.join(", "))))
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Size of one unwrapped line in logical pixels.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        self.measure_text_scaled(text, id, size, 1.0)
    }

    /// Like [`measure_text`](Self::measure_text) but lays out at `size * scale`
    /// and divides back, so widths match what the text renderer draws at the
    /// same raster scale.
    #[must_use]
    pub fn measure_text_scaled(
        &self,
        text: &str,
        id: FontId,
        size: f32,
        scale: f32,
    ) -> Vec2 {
        let line = Vec2::new(0.0, size * 1.2);
        let Some(font) = self.get(id) else {
            return line;
        };

        let scale = scale.max(0.01);
        let phys_size = size * scale;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, phys_size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return line;
        }

        // Pen position after the glyph, so trailing spacing counts toward the
        // width the way right-aligned readouts expect.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, phys_size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max)
            / scale;
        let h = layout.height().max(phys_size) / scale;
        Vec2::new(w, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let mut fs = FontSystem::new();
        assert!(fs.load_font(b"definitely not a font").is_err());
    }

    #[test]
    fn unknown_font_measures_one_line() {
        let fs = FontSystem::new();
        let m = fs.measure_text("hello", FontId(3), 10.0);
        assert_eq!(m, Vec2::new(0.0, 12.0));
    }

    #[test]
    fn load_first_reports_all_missing_paths() {
        let mut fs = FontSystem::new();
        let err = fs
            .load_first(["/nonexistent/a.ttf", "/nonexistent/b.ttf"])
            .unwrap_err();
        assert!(err.0.contains("a.ttf") && err.0.contains("b.ttf"));
    }
}
