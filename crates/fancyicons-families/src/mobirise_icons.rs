//! Mobirise Icons, the line icon font of the Mobirise site builder

use fancyicons_core::{Result, Typeface, TypefaceMetadata};

pub const PREFIX: &str = "MBRI";
pub const FONT_FILE: &str = "mobirise-icons.ttf";

pub const METADATA: TypefaceMetadata = TypefaceMetadata {
    family_name: "Mobirise Icons",
    mapping_prefix: PREFIX,
    version: "1.0",
    author: "Mobirise",
    homepage_url: "https://mobiriseicons.com/",
    description: "Free line icons for websites and apps.",
    license: "Free for personal and commercial use",
    license_url: "https://mobiriseicons.com/",
};

pub static ICONS: &[(&str, char)] = &[
    ("MBRI_ADD_SUBMENU", '\u{e900}'),
    ("MBRI_ALERT", '\u{e901}'),
    ("MBRI_ALIGN_CENTER", '\u{e902}'),
    ("MBRI_ALIGN_JUSTIFY", '\u{e903}'),
    ("MBRI_ALIGN_LEFT", '\u{e904}'),
    ("MBRI_ALIGN_RIGHT", '\u{e905}'),
    ("MBRI_ARROW_DOWN", '\u{e906}'),
    ("MBRI_ARROW_UP", '\u{e907}'),
    ("MBRI_AUDIO", '\u{e908}'),
    ("MBRI_BROWSE", '\u{e909}'),
    ("MBRI_BULLETS", '\u{e90a}'),
    ("MBRI_CASH", '\u{e90b}'),
    ("MBRI_CHAT", '\u{e90c}'),
    ("MBRI_CLOCK", '\u{e90d}'),
    ("MBRI_CLOSE", '\u{e90e}'),
    ("MBRI_CODE", '\u{e90f}'),
    ("MBRI_COLORS", '\u{e910}'),
    ("MBRI_CROP", '\u{e911}'),
    ("MBRI_DESKTOP", '\u{e912}'),
    ("MBRI_DOWNLOAD", '\u{e913}'),
    ("MBRI_DRAG_N_DROP", '\u{e914}'),
    ("MBRI_DROPBOX", '\u{e915}'),
    ("MBRI_EDIT", '\u{e916}'),
    ("MBRI_EDIT2", '\u{e917}'),
    ("MBRI_FEEDBACK", '\u{e918}'),
    ("MBRI_FILE", '\u{e919}'),
    ("MBRI_FLAG", '\u{e91a}'),
    ("MBRI_GIFT", '\u{e91b}'),
    ("MBRI_GLOBE", '\u{e91c}'),
    ("MBRI_HEART", '\u{e91d}'),
    ("MBRI_HOME", '\u{e91e}'),
    ("MBRI_SEARCH", '\u{e91f}'),
    ("MBRI_USER", '\u{e920}'),
];

pub fn typeface() -> Result<Typeface> {
    Typeface::new(METADATA, FONT_FILE, ICONS)
}
