//! Realized fonts and what to do when one can't be realized

use std::fmt;
use std::sync::Arc;

use crate::catalog::IconEntry;
use crate::traits::FontHandle;

/// The renderable font backing a family
///
/// Cloning is cheap: the parsed handle is shared.
#[derive(Clone)]
pub struct FontAsset {
    file_name: String,
    byte_len: usize,
    handle: Arc<dyn FontHandle>,
}

impl FontAsset {
    pub fn new(file_name: impl Into<String>, handle: Arc<dyn FontHandle>) -> Self {
        let byte_len = handle.data().len();
        Self {
            file_name: file_name.into(),
            byte_len,
            handle,
        }
    }

    /// Name of the resource this font was read from
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Size of the source file in bytes
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn handle(&self) -> &Arc<dyn FontHandle> {
        &self.handle
    }

    /// Whether the font actually carries a glyph for `icon`
    pub fn has_glyph(&self, icon: &IconEntry) -> bool {
        self.handle.glyph_id(icon.code_point()).is_some()
    }

    /// True if both assets share the same parsed handle
    pub fn ptr_eq(&self, other: &FontAsset) -> bool {
        Arc::ptr_eq(&self.handle, &other.handle)
    }
}

impl fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontAsset")
            .field("file_name", &self.file_name)
            .field("byte_len", &self.byte_len)
            .field("units_per_em", &self.handle.units_per_em())
            .finish()
    }
}

/// What to hand back when a family's font fails to load
#[derive(Debug, Clone, Default)]
pub enum FallbackPolicy {
    /// Return the load failure to the caller
    #[default]
    Propagate,
    /// Log the failure and substitute this font. The substitute is never
    /// cached as the family's own font.
    UseFont(FontAsset),
}
