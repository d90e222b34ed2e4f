//! Meteocons, a set of weather icons

use fancyicons_core::{Result, Typeface, TypefaceMetadata};

pub const PREFIX: &str = "METI";
pub const FONT_FILE: &str = "meteocons.ttf";

pub const METADATA: TypefaceMetadata = TypefaceMetadata {
    family_name: "Meteocons",
    mapping_prefix: PREFIX,
    version: "1.0",
    author: "Alessio Atzeni",
    homepage_url: "http://www.alessioatzeni.com/meteocons/",
    description: "Meteocons is a set of weather icons, it contains 40+ icons available in PSD, \
                  CSH, EPS, SVG, Desktop font and Web font.",
    license: "Free for personal and commercial use",
    license_url: "http://www.alessioatzeni.com/meteocons/#about",
};

// Meteocons maps its glyphs onto printable ASCII
pub static ICONS: &[(&str, char)] = &[
    ("METI_SUNRISE", 'A'),
    ("METI_SUN", 'B'),
    ("METI_MOON", 'C'),
    ("METI_ECLIPSE", 'D'),
    ("METI_CLOUDY", 'E'),
    ("METI_WIND", 'F'),
    ("METI_SNOW", 'G'),
    ("METI_SUN_CLOUD", 'H'),
    ("METI_MOON_CLOUD", 'I'),
    ("METI_SUNRISE_SEA", 'J'),
    ("METI_MOONRISE_SEA", 'K'),
    ("METI_CLOUD_SEA", 'L'),
    ("METI_SEA", 'M'),
    ("METI_CLOUD", 'N'),
    ("METI_CLOUD_THUNDER", 'O'),
    ("METI_CLOUD_THUNDER2", 'P'),
    ("METI_CLOUD_DRIZZLE", 'Q'),
    ("METI_CLOUD_RAIN", 'R'),
    ("METI_CLOUD_WIND", 'S'),
    ("METI_CLOUD_WIND2", 'T'),
    ("METI_CLOUD_WIND3", 'U'),
    ("METI_CLOUD_SNOW", 'V'),
    ("METI_CLOUD_RAIN2", 'W'),
    ("METI_CLOUD_SNOW2", 'X'),
    ("METI_CLOUD_SNOW3", 'Y'),
    ("METI_CLOUD_DRIZZLE2", 'Z'),
    ("METI_THERMOMETER", '\''),
    ("METI_COMPASS", '('),
    ("METI_NOT_AVAILABLE", ')'),
    ("METI_CELSIUS", '*'),
    ("METI_FAHRENHEIT", '+'),
];

pub fn typeface() -> Result<Typeface> {
    Typeface::new(METADATA, FONT_FILE, ICONS)
}
