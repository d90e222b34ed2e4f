// this_file: crates/fancyicons-fontdb/src/face.rs

//! Parsed icon font faces
//!
//! Faces store their raw data and create a `FontRef` on demand for parsing,
//! so no self-referential borrows are needed. For TTC collections the
//! `face_index` picks the face.

use read_fonts::{FontRef as ReadFontRef, TableProvider};

use fancyicons_core::{FontHandle, FontLoadError};

/// An icon font that has passed validation
pub struct IconFontFace {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
}

impl IconFontFace {
    /// Validates `data` (read from `name`) as an OpenType font
    pub fn from_data(name: &str, data: Vec<u8>) -> Result<Self, FontLoadError> {
        Self::from_data_index(name, data, 0)
    }

    /// Validates one face of a font collection
    pub fn from_data_index(
        name: &str,
        data: Vec<u8>,
        face_index: u32,
    ) -> Result<Self, FontLoadError> {
        let font_ref = ReadFontRef::from_index(&data, face_index).map_err(|e| {
            FontLoadError::InvalidData {
                name: name.to_string(),
                reason: e.to_string(),
            }
        })?;

        // Icon fonts without a cmap can't map code points to anything
        if font_ref.cmap().is_err() {
            return Err(FontLoadError::InvalidData {
                name: name.to_string(),
                reason: "missing cmap table".to_string(),
            });
        }

        let units_per_em = font_ref
            .head()
            .map_err(|_| FontLoadError::InvalidData {
                name: name.to_string(),
                reason: "missing head table".to_string(),
            })?
            .units_per_em();

        Ok(IconFontFace {
            data,
            face_index,
            units_per_em,
        })
    }

    /// Returns the face index for TTC collections (0 for single fonts)
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }
}

impl FontHandle for IconFontFace {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
            // glyph 0 is .notdef
            .filter(|&gid| gid != 0)
    }

    fn glyph_count(&self) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.maxp().ok().map(|maxp| maxp.num_glyphs() as u32))
    }
}
