//! Pixeden 7 Stroke, thin-stroke iOS 7 style icons

use fancyicons_core::{Result, Typeface, TypefaceMetadata};

pub const PREFIX: &str = "PE7I";
pub const FONT_FILE: &str = "pixeden-7-stroke.ttf";

pub const METADATA: TypefaceMetadata = TypefaceMetadata {
    family_name: "Pixeden 7 Stroke",
    mapping_prefix: PREFIX,
    version: "1.2",
    author: "Pixeden",
    homepage_url: "http://themes-pixeden.com/font-demos/7-stroke/",
    description: "202 thin stroke icons inspired by iOS 7.",
    license: "Free to use, attribution appreciated",
    license_url: "http://www.pixeden.com/icon-fonts/stroke-7-icon-font-set",
};

pub static ICONS: &[(&str, char)] = &[
    ("PE7I_ALBUM", '\u{e6aa}'),
    ("PE7I_ARC", '\u{e6ab}'),
    ("PE7I_BACK_2", '\u{e6ac}'),
    ("PE7I_BANDAID", '\u{e6ad}'),
    ("PE7I_CAR", '\u{e6ae}'),
    ("PE7I_DIAMOND", '\u{e6af}'),
    ("PE7I_DOOR_LOCK", '\u{e6b0}'),
    ("PE7I_EYEDROPPER", '\u{e6b1}'),
    ("PE7I_FEMALE", '\u{e6b2}'),
    ("PE7I_GYM", '\u{e6b3}'),
    ("PE7I_HAMMER", '\u{e6b4}'),
    ("PE7I_HEADPHONES", '\u{e6b5}'),
    ("PE7I_HELM", '\u{e6b6}'),
    ("PE7I_HOURGLASS", '\u{e6b7}'),
    ("PE7I_LEAF", '\u{e6b8}'),
    ("PE7I_MAGIC_WAND", '\u{e6b9}'),
    ("PE7I_MALE", '\u{e6ba}'),
    ("PE7I_MAP_2", '\u{e6bb}'),
    ("PE7I_NEXT_2", '\u{e6bc}'),
    ("PE7I_PAINT_BUCKET", '\u{e6bd}'),
    ("PE7I_PENDRIVE", '\u{e6be}'),
    ("PE7I_PHOTO", '\u{e6bf}'),
    ("PE7I_PIGGY", '\u{e6c0}'),
    ("PE7I_PLUGIN", '\u{e6c1}'),
    ("PE7I_REFRESH_2", '\u{e6c2}'),
    ("PE7I_ROCKET", '\u{e6c3}'),
    ("PE7I_SETTINGS", '\u{e6c4}'),
    ("PE7I_SHIELD", '\u{e6c5}'),
    ("PE7I_SMILE", '\u{e6c6}'),
    ("PE7I_USB", '\u{e6c7}'),
    ("PE7I_VECTOR", '\u{e6c8}'),
    ("PE7I_WINE", '\u{e6c9}'),
    ("PE7I_HOME", '\u{e66e}'),
];

pub fn typeface() -> Result<Typeface> {
    Typeface::new(METADATA, FONT_FILE, ICONS)
}
