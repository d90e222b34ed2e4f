//! The seams between the registry and the outside world
//!
//! - [`FontHandle`] - A parsed, renderable font
//! - [`ResourceLoader`] - Reads bundled font files and turns them into handles
//!
//! Neither is implemented here; `fancyicons-fontdb` ships the stock loaders.

use std::sync::Arc;

use crate::error::FontLoadError;

/// A font that has been parsed and can be handed to a renderer
///
/// ```ignore
/// struct MyFont {
///     data: Vec<u8>,
/// }
///
/// impl FontHandle for MyFont {
///     fn data(&self) -> &[u8] {
///         &self.data
///     }
///
///     fn units_per_em(&self) -> u16 {
///         1000
///     }
///
///     fn glyph_id(&self, ch: char) -> Option<u32> {
///         // Look the character up in the cmap
///         Some(42)
///     }
/// }
/// ```
pub trait FontHandle: Send + Sync {
    /// Raw font bytes as they live in the file
    fn data(&self) -> &[u8];

    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Find the glyph that represents this character
    ///
    /// Returns None when the font doesn't contain this character.
    fn glyph_id(&self, ch: char) -> Option<u32>;

    /// How many glyphs this font contains
    fn glyph_count(&self) -> Option<u32> {
        None // Not all implementations can provide this
    }
}

/// Reads a bundled font file and builds a [`FontHandle`] from it
///
/// The two steps are separate so callers can tell I/O failures from
/// format failures. Loaders never retry and never substitute another font;
/// that policy belongs to the caller (see [`crate::FallbackPolicy`]).
pub trait ResourceLoader: Send + Sync {
    /// Identify yourself in logs and error messages
    fn name(&self) -> &'static str;

    /// Read the raw bytes of the bundled resource `file_name`
    fn load_font_bytes(&self, file_name: &str) -> Result<Vec<u8>, FontLoadError>;

    /// Parse `bytes` (read from `file_name`) into a renderable font
    fn build_font(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Arc<dyn FontHandle>, FontLoadError>;
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for Arc<L> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn load_font_bytes(&self, file_name: &str) -> Result<Vec<u8>, FontLoadError> {
        (**self).load_font_bytes(file_name)
    }

    fn build_font(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Arc<dyn FontHandle>, FontLoadError> {
        (**self).build_font(file_name, bytes)
    }
}
