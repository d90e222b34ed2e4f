//! MFG Labs iconset, a free web font made for interfaces

use fancyicons_core::{Result, Typeface, TypefaceMetadata};

pub const PREFIX: &str = "MFGI";
pub const FONT_FILE: &str = "mfglabsiconset-webfont.ttf";

pub const METADATA: TypefaceMetadata = TypefaceMetadata {
    family_name: "MFG Labs Iconset",
    mapping_prefix: PREFIX,
    version: "1.0",
    author: "MFG Labs",
    homepage_url: "http://mfglabs.github.io/mfglabs-iconset/",
    description: "Awesome web font icon by MFG Labs",
    license: "SIL OFL 1.1",
    license_url: "http://scripts.sil.org/OFL",
};

pub static ICONS: &[(&str, char)] = &[
    ("MFGI_CLOUD", '\u{2601}'),
    ("MFGI_AT", '\u{0040}'),
    ("MFGI_PLUS", '\u{002b}'),
    ("MFGI_ARROW_UP", '\u{2191}'),
    ("MFGI_ARROW_DOWN", '\u{2193}'),
    ("MFGI_ARROW_RIGHT", '\u{2192}'),
    ("MFGI_ARROW_LEFT", '\u{2190}'),
    ("MFGI_CHEVRON_DOWN", '\u{f004}'),
    ("MFGI_CHEVRON_UP", '\u{f005}'),
    ("MFGI_CHEVRON_RIGHT", '\u{f006}'),
    ("MFGI_CHEVRON_LEFT", '\u{f007}'),
    ("MFGI_REORDER", '\u{f008}'),
    ("MFGI_LIST", '\u{f009}'),
    ("MFGI_REORDER_SQUARE", '\u{f00a}'),
    ("MFGI_REORDER_SQUARE_LINE", '\u{f00b}'),
    ("MFGI_COVERFLOW", '\u{f00c}'),
    ("MFGI_COVERFLOW_LINE", '\u{f00d}'),
    ("MFGI_PAUSE", '\u{f00e}'),
    ("MFGI_PLAY", '\u{f00f}'),
    ("MFGI_STEP_FORWARD", '\u{f010}'),
    ("MFGI_STEP_BACKWARD", '\u{f011}'),
    ("MFGI_FAST_FORWARD", '\u{f012}'),
    ("MFGI_FAST_BACKWARD", '\u{f013}'),
    ("MFGI_CLOUD_UPLOAD", '\u{f014}'),
    ("MFGI_CLOUD_DOWNLOAD", '\u{f015}'),
    ("MFGI_DATA_SCIENCE", '\u{f016}'),
    ("MFGI_DATA_SCIENCE_BLACK", '\u{f017}'),
    ("MFGI_GLOBE", '\u{f018}'),
    ("MFGI_GLOBE_BLACK", '\u{f019}'),
    ("MFGI_MATH_ICO", '\u{f01a}'),
    ("MFGI_MATH", '\u{f01b}'),
    ("MFGI_HOME", '\u{2302}'),
    ("MFGI_HEART", '\u{2665}'),
    ("MFGI_STAR", '\u{2605}'),
];

pub fn typeface() -> Result<Typeface> {
    Typeface::new(METADATA, FONT_FILE, ICONS)
}
