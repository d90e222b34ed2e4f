//! Themify Icons, pixel-perfect hand-crafted icons drawn on a 16px grid

use fancyicons_core::{Result, Typeface, TypefaceMetadata};

pub const PREFIX: &str = "THEI";
pub const FONT_FILE: &str = "themify.ttf";

pub const METADATA: TypefaceMetadata = TypefaceMetadata {
    family_name: "Themify Icons",
    mapping_prefix: PREFIX,
    version: "1.0.1",
    author: "Lemonade",
    homepage_url: "http://themify.me/themify-icons",
    description: "Themify Icons is a complete set of icons for use in web design and apps, \
                  consisting of 320+ pixel-perfect, hand-crafted icons.",
    license: "SIL OFL 1.1",
    license_url: "http://scripts.sil.org/OFL",
};

pub static ICONS: &[(&str, char)] = &[
    ("THEI_WAND", '\u{e600}'),
    ("THEI_VOLUME", '\u{e601}'),
    ("THEI_USER", '\u{e602}'),
    ("THEI_UNLOCK", '\u{e603}'),
    ("THEI_UNLINK", '\u{e604}'),
    ("THEI_TRASH", '\u{e605}'),
    ("THEI_THOUGHT", '\u{e606}'),
    ("THEI_TARGET", '\u{e607}'),
    ("THEI_TAG", '\u{e608}'),
    ("THEI_TABLET", '\u{e609}'),
    ("THEI_STAR", '\u{e60a}'),
    ("THEI_SPRAY", '\u{e60b}'),
    ("THEI_SIGNAL", '\u{e60c}'),
    ("THEI_SHOPPING_CART", '\u{e60d}'),
    ("THEI_SHOPPING_CART_FULL", '\u{e60e}'),
    ("THEI_SETTINGS", '\u{e60f}'),
    ("THEI_SEARCH", '\u{e610}'),
    ("THEI_ZOOM_IN", '\u{e611}'),
    ("THEI_ZOOM_OUT", '\u{e612}'),
    ("THEI_CUT", '\u{e613}'),
    ("THEI_RULER", '\u{e614}'),
    ("THEI_RULER_PENCIL", '\u{e615}'),
    ("THEI_RULER_ALT", '\u{e616}'),
    ("THEI_BOOKMARK", '\u{e617}'),
    ("THEI_BOOKMARK_ALT", '\u{e618}'),
    ("THEI_RELOAD", '\u{e619}'),
    ("THEI_PLUS", '\u{e61a}'),
    ("THEI_PIN", '\u{e61b}'),
    ("THEI_PENCIL", '\u{e61c}'),
    ("THEI_PENCIL_ALT", '\u{e61d}'),
    ("THEI_HOME", '\u{e69b}'),
];

pub fn typeface() -> Result<Typeface> {
    Typeface::new(METADATA, FONT_FILE, ICONS)
}
