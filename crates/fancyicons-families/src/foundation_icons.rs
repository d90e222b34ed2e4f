//! Foundation Icon Fonts 3 by ZURB

use fancyicons_core::{Result, Typeface, TypefaceMetadata};

pub const PREFIX: &str = "FOUI";
pub const FONT_FILE: &str = "foundation-icons.ttf";

pub const METADATA: TypefaceMetadata = TypefaceMetadata {
    family_name: "Foundation Icons",
    mapping_prefix: PREFIX,
    version: "3.0",
    author: "ZURB, Inc.",
    homepage_url: "http://zurb.com/playground/foundation-icon-fonts-3",
    description: "A custom collection of icons for Foundation, ZURB's responsive front-end \
                  framework.",
    license: "MIT",
    license_url: "http://opensource.org/licenses/mit-license.html",
};

pub static ICONS: &[(&str, char)] = &[
    ("FOUI_ADDRESS_BOOK", '\u{f100}'),
    ("FOUI_ALERT", '\u{f101}'),
    ("FOUI_ALIGN_CENTER", '\u{f102}'),
    ("FOUI_ALIGN_JUSTIFY", '\u{f103}'),
    ("FOUI_ALIGN_LEFT", '\u{f104}'),
    ("FOUI_ALIGN_RIGHT", '\u{f105}'),
    ("FOUI_ANCHOR", '\u{f106}'),
    ("FOUI_ANNOTATE", '\u{f107}'),
    ("FOUI_ARCHIVE", '\u{f108}'),
    ("FOUI_ARROW_DOWN", '\u{f109}'),
    ("FOUI_ARROW_LEFT", '\u{f10a}'),
    ("FOUI_ARROW_RIGHT", '\u{f10b}'),
    ("FOUI_ARROW_UP", '\u{f10c}'),
    ("FOUI_ARROWS_COMPRESS", '\u{f10d}'),
    ("FOUI_ARROWS_EXPAND", '\u{f10e}'),
    ("FOUI_ARROWS_IN", '\u{f10f}'),
    ("FOUI_ARROWS_OUT", '\u{f110}'),
    ("FOUI_ASL", '\u{f111}'),
    ("FOUI_ASTERISK", '\u{f112}'),
    ("FOUI_AT_SIGN", '\u{f113}'),
    ("FOUI_BACKGROUND_COLOR", '\u{f114}'),
    ("FOUI_BATTERY_EMPTY", '\u{f115}'),
    ("FOUI_BATTERY_FULL", '\u{f116}'),
    ("FOUI_BATTERY_HALF", '\u{f117}'),
    ("FOUI_BITCOIN_CIRCLE", '\u{f118}'),
    ("FOUI_BITCOIN", '\u{f119}'),
    ("FOUI_BLIND", '\u{f11a}'),
    ("FOUI_BLUETOOTH", '\u{f11b}'),
    ("FOUI_BOLD", '\u{f11c}'),
    ("FOUI_BOOK_BOOKMARK", '\u{f11d}'),
    ("FOUI_BOOK", '\u{f11e}'),
    ("FOUI_BOOKMARK", '\u{f11f}'),
    ("FOUI_HOME", '\u{f15a}'),
];

pub fn typeface() -> Result<Typeface> {
    Typeface::new(METADATA, FONT_FILE, ICONS)
}
