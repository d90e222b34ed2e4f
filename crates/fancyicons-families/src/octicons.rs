//! Octicons, GitHub's icon font

use fancyicons_core::{Result, Typeface, TypefaceMetadata};

pub const PREFIX: &str = "OCTI";
pub const FONT_FILE: &str = "octicons.ttf";

pub const METADATA: TypefaceMetadata = TypefaceMetadata {
    family_name: "Octicons",
    mapping_prefix: PREFIX,
    version: "3.1.0",
    author: "GitHub",
    homepage_url: "https://octicons.github.com/",
    description: "GitHub's icon font",
    license: "SIL OFL 1.1",
    license_url: "http://scripts.sil.org/OFL",
};

pub static ICONS: &[(&str, char)] = &[
    ("OCTI_ALERT", '\u{f02d}'),
    ("OCTI_ARROW_DOWN", '\u{f03f}'),
    ("OCTI_ARROW_LEFT", '\u{f040}'),
    ("OCTI_ARROW_RIGHT", '\u{f03e}'),
    ("OCTI_ARROW_UP", '\u{f03d}'),
    ("OCTI_BEAKER", '\u{f0dd}'),
    ("OCTI_BELL", '\u{f0de}'),
    ("OCTI_BOOK", '\u{f007}'),
    ("OCTI_BOOKMARK", '\u{f07b}'),
    ("OCTI_BRIEFCASE", '\u{f0d3}'),
    ("OCTI_BUG", '\u{f091}'),
    ("OCTI_CALENDAR", '\u{f068}'),
    ("OCTI_CHECK", '\u{f03a}'),
    ("OCTI_CLIPPY", '\u{f035}'),
    ("OCTI_CODE", '\u{f05f}'),
    ("OCTI_GEAR", '\u{f02f}'),
    ("OCTI_GIFT", '\u{f042}'),
    ("OCTI_GIT_BRANCH", '\u{f020}'),
    ("OCTI_GIT_COMMIT", '\u{f01f}'),
    ("OCTI_GIT_MERGE", '\u{f023}'),
    ("OCTI_GIT_PULL_REQUEST", '\u{f009}'),
    ("OCTI_GLOBE", '\u{f0b6}'),
    ("OCTI_HEART", '\u{2665}'),
    ("OCTI_HOME", '\u{f08d}'),
    ("OCTI_INFO", '\u{f059}'),
    ("OCTI_KEY", '\u{f049}'),
    ("OCTI_LOCK", '\u{f06a}'),
    ("OCTI_MAIL", '\u{f03b}'),
    ("OCTI_MARK_GITHUB", '\u{f00a}'),
    ("OCTI_MARKDOWN", '\u{f0c9}'),
    ("OCTI_REPO", '\u{f001}'),
    ("OCTI_SEARCH", '\u{f02e}'),
    ("OCTI_STAR", '\u{f02a}'),
    ("OCTI_X", '\u{f081}'),
];

pub fn typeface() -> Result<Typeface> {
    Typeface::new(METADATA, FONT_FILE, ICONS)
}
