//! Dripicons, a minimal line icon set

use fancyicons_core::{Result, Typeface, TypefaceMetadata};

pub const PREFIX: &str = "DRPI";
pub const FONT_FILE: &str = "dripicons-v2.ttf";

pub const METADATA: TypefaceMetadata = TypefaceMetadata {
    family_name: "Dripicons",
    mapping_prefix: PREFIX,
    version: "2.0",
    author: "Amit Jakhu",
    homepage_url: "http://demo.amitjakhu.com/dripicons/",
    description: "A completely free, vector line-icon font by Amit Jakhu.",
    license: "CC BY-SA 4.0",
    license_url: "https://creativecommons.org/licenses/by-sa/4.0/",
};

// Dripicons places its glyphs on ASCII letters
pub static ICONS: &[(&str, char)] = &[
    ("DRPI_ALARM", 'a'),
    ("DRPI_ALIGN_CENTER", 'b'),
    ("DRPI_ALIGN_JUSTIFY", 'c'),
    ("DRPI_ALIGN_LEFT", 'd'),
    ("DRPI_ALIGN_RIGHT", 'e'),
    ("DRPI_ANCHOR", 'f'),
    ("DRPI_ARCHIVE", 'g'),
    ("DRPI_ARROW_DOWN", 'h'),
    ("DRPI_ARROW_LEFT", 'i'),
    ("DRPI_ARROW_RIGHT", 'j'),
    ("DRPI_ARROW_THIN_DOWN", 'k'),
    ("DRPI_ARROW_THIN_LEFT", 'l'),
    ("DRPI_ARROW_THIN_RIGHT", 'm'),
    ("DRPI_ARROW_THIN_UP", 'n'),
    ("DRPI_ARROW_UP", 'o'),
    ("DRPI_ARTBOARD", 'p'),
    ("DRPI_BATTERY_EMPTY", 'q'),
    ("DRPI_BATTERY_FULL", 'r'),
    ("DRPI_BATTERY_LOW", 's'),
    ("DRPI_BATTERY_MEDIUM", 't'),
    ("DRPI_BELL", 'u'),
    ("DRPI_BLOG", 'v'),
    ("DRPI_BLUETOOTH", 'w'),
    ("DRPI_BOLD", 'x'),
    ("DRPI_BOOKMARK", 'y'),
    ("DRPI_BOOKMARKS", 'z'),
    ("DRPI_BOX", 'A'),
    ("DRPI_BRIEFCASE", 'B'),
    ("DRPI_BRIGHTNESS_LOW", 'C'),
    ("DRPI_BRIGHTNESS_MAX", 'D'),
    ("DRPI_BRIGHTNESS_MEDIUM", 'E'),
    ("DRPI_BROADCAST", 'F'),
    ("DRPI_BROWSER", 'G'),
    ("DRPI_BROWSER_UPLOAD", 'H'),
    ("DRPI_BRUSH", 'I'),
    ("DRPI_CALENDAR", 'J'),
    ("DRPI_CAMCORDER", 'K'),
    ("DRPI_CAMERA", 'L'),
    ("DRPI_CARD", 'M'),
    ("DRPI_CART", 'N'),
    ("DRPI_CHECKLIST", 'O'),
    ("DRPI_CHECKMARK", 'P'),
    ("DRPI_HOME", '\u{e00a}'),
];

pub fn typeface() -> Result<Typeface> {
    Typeface::new(METADATA, FONT_FILE, ICONS)
}
