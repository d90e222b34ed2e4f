//! Glyphicons Halflings, the glyph set that ships with Bootstrap 3

use fancyicons_core::{Result, Typeface, TypefaceMetadata};

pub const PREFIX: &str = "GLYI";
pub const FONT_FILE: &str = "glyphicons-halflings-regular.ttf";

pub const METADATA: TypefaceMetadata = TypefaceMetadata {
    family_name: "Glyphicons Halflings",
    mapping_prefix: PREFIX,
    version: "1.9",
    author: "Jan Kovařík",
    homepage_url: "http://glyphicons.com/",
    description: "Precisely prepared monochromatic icons and symbols, created with an emphasis \
                  on simplicity and easy orientation.",
    license: "MIT",
    license_url: "https://github.com/twbs/bootstrap/blob/v3.4.1/LICENSE",
};

pub static ICONS: &[(&str, char)] = &[
    ("GLYI_ASTERISK", '\u{002a}'),
    ("GLYI_PLUS", '\u{002b}'),
    ("GLYI_EURO", '\u{20ac}'),
    ("GLYI_EUR", '\u{20ac}'),
    ("GLYI_MINUS", '\u{2212}'),
    ("GLYI_CLOUD", '\u{2601}'),
    ("GLYI_ENVELOPE", '\u{2709}'),
    ("GLYI_PENCIL", '\u{270f}'),
    ("GLYI_GLASS", '\u{e001}'),
    ("GLYI_MUSIC", '\u{e002}'),
    ("GLYI_SEARCH", '\u{e003}'),
    ("GLYI_HEART", '\u{e005}'),
    ("GLYI_STAR", '\u{e006}'),
    ("GLYI_STAR_EMPTY", '\u{e007}'),
    ("GLYI_USER", '\u{e008}'),
    ("GLYI_FILM", '\u{e009}'),
    ("GLYI_TH_LARGE", '\u{e010}'),
    ("GLYI_TH", '\u{e011}'),
    ("GLYI_TH_LIST", '\u{e012}'),
    ("GLYI_OK", '\u{e013}'),
    ("GLYI_REMOVE", '\u{e014}'),
    ("GLYI_ZOOM_IN", '\u{e015}'),
    ("GLYI_ZOOM_OUT", '\u{e016}'),
    ("GLYI_OFF", '\u{e017}'),
    ("GLYI_SIGNAL", '\u{e018}'),
    ("GLYI_COG", '\u{e019}'),
    ("GLYI_TRASH", '\u{e020}'),
    ("GLYI_HOME", '\u{e021}'),
    ("GLYI_FILE", '\u{e022}'),
    ("GLYI_TIME", '\u{e023}'),
    ("GLYI_ROAD", '\u{e024}'),
    ("GLYI_DOWNLOAD_ALT", '\u{e025}'),
    ("GLYI_DOWNLOAD", '\u{e026}'),
    ("GLYI_UPLOAD", '\u{e027}'),
    ("GLYI_INBOX", '\u{e028}'),
    ("GLYI_PLAY_CIRCLE", '\u{e029}'),
    ("GLYI_REPEAT", '\u{e030}'),
    ("GLYI_REFRESH", '\u{e031}'),
    ("GLYI_LIST_ALT", '\u{e032}'),
    ("GLYI_LOCK", '\u{e033}'),
    ("GLYI_FLAG", '\u{e034}'),
    ("GLYI_HEADPHONES", '\u{e035}'),
    ("GLYI_VOLUME_OFF", '\u{e036}'),
    ("GLYI_VOLUME_DOWN", '\u{e037}'),
    ("GLYI_VOLUME_UP", '\u{e038}'),
    ("GLYI_QRCODE", '\u{e039}'),
    ("GLYI_BARCODE", '\u{e040}'),
    ("GLYI_TAG", '\u{e041}'),
    ("GLYI_TAGS", '\u{e042}'),
    ("GLYI_BOOK", '\u{e043}'),
    ("GLYI_BOOKMARK", '\u{e044}'),
    ("GLYI_PRINT", '\u{e045}'),
    ("GLYI_CAMERA", '\u{e046}'),
];

pub fn typeface() -> Result<Typeface> {
    Typeface::new(METADATA, FONT_FILE, ICONS)
}
