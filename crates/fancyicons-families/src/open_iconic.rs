//! Open Iconic, an open source sister of Iconic

use fancyicons_core::{Result, Typeface, TypefaceMetadata};

pub const PREFIX: &str = "OPNI";
pub const FONT_FILE: &str = "open-iconic.ttf";

pub const METADATA: TypefaceMetadata = TypefaceMetadata {
    family_name: "Open Iconic",
    mapping_prefix: PREFIX,
    version: "1.1.1",
    author: "Waybury",
    homepage_url: "https://useiconic.com/open",
    description: "Open Iconic is the open source sibling of Iconic. It is a hyper-legible \
                  collection of 223 icons with a tiny footprint.",
    license: "SIL OFL 1.1",
    license_url: "https://github.com/iconic/open-iconic/blob/master/FONT-LICENSE",
};

pub static ICONS: &[(&str, char)] = &[
    ("OPNI_ACCOUNT_LOGIN", '\u{e000}'),
    ("OPNI_ACCOUNT_LOGOUT", '\u{e001}'),
    ("OPNI_ACTION_REDO", '\u{e002}'),
    ("OPNI_ACTION_UNDO", '\u{e003}'),
    ("OPNI_ALIGN_CENTER", '\u{e004}'),
    ("OPNI_ALIGN_LEFT", '\u{e005}'),
    ("OPNI_ALIGN_RIGHT", '\u{e006}'),
    ("OPNI_APERTURE", '\u{e007}'),
    ("OPNI_ARROW_BOTTOM", '\u{e008}'),
    ("OPNI_ARROW_CIRCLE_BOTTOM", '\u{e009}'),
    ("OPNI_ARROW_CIRCLE_LEFT", '\u{e00a}'),
    ("OPNI_ARROW_CIRCLE_RIGHT", '\u{e00b}'),
    ("OPNI_ARROW_CIRCLE_TOP", '\u{e00c}'),
    ("OPNI_ARROW_LEFT", '\u{e00d}'),
    ("OPNI_ARROW_RIGHT", '\u{e00e}'),
    ("OPNI_ARROW_THICK_BOTTOM", '\u{e00f}'),
    ("OPNI_ARROW_THICK_LEFT", '\u{e010}'),
    ("OPNI_ARROW_THICK_RIGHT", '\u{e011}'),
    ("OPNI_ARROW_THICK_TOP", '\u{e012}'),
    ("OPNI_ARROW_TOP", '\u{e013}'),
    ("OPNI_AUDIO", '\u{e014}'),
    ("OPNI_AUDIO_SPECTRUM", '\u{e015}'),
    ("OPNI_BADGE", '\u{e016}'),
    ("OPNI_BAN", '\u{e017}'),
    ("OPNI_BAR_CHART", '\u{e018}'),
    ("OPNI_BASKET", '\u{e019}'),
    ("OPNI_BATTERY_EMPTY", '\u{e01a}'),
    ("OPNI_BATTERY_FULL", '\u{e01b}'),
    ("OPNI_BEAKER", '\u{e01c}'),
    ("OPNI_BELL", '\u{e01d}'),
    ("OPNI_BLUETOOTH", '\u{e01e}'),
    ("OPNI_BOLD", '\u{e01f}'),
    ("OPNI_HOME", '\u{e074}'),
    ("OPNI_PERSON", '\u{e0b3}'),
    ("OPNI_ACCOUNT", '\u{e0b3}'),
];

pub fn typeface() -> Result<Typeface> {
    Typeface::new(METADATA, FONT_FILE, ICONS)
}
