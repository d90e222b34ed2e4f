//! Devicon, logos of programming languages and development tools

use fancyicons_core::{Result, Typeface, TypefaceMetadata};

pub const PREFIX: &str = "DEVI";
pub const FONT_FILE: &str = "devicon.ttf";

pub const METADATA: TypefaceMetadata = TypefaceMetadata {
    family_name: "Devicon",
    mapping_prefix: PREFIX,
    version: "2.0",
    author: "Konpa",
    homepage_url: "http://konpa.github.io/devicon/",
    description: "Devicon is a set of icons representing programming languages, designing & \
                  development tools.",
    license: "MIT",
    license_url: "https://github.com/konpa/devicon/blob/master/LICENSE",
};

pub static ICONS: &[(&str, char)] = &[
    ("DEVI_ANDROID", '\u{e600}'),
    ("DEVI_ANGULARJS", '\u{e601}'),
    ("DEVI_APPLE", '\u{e602}'),
    ("DEVI_BOOTSTRAP", '\u{e603}'),
    ("DEVI_C", '\u{e604}'),
    ("DEVI_CPLUSPLUS", '\u{e605}'),
    ("DEVI_CSHARP", '\u{e606}'),
    ("DEVI_CSS3", '\u{e607}'),
    ("DEVI_DEBIAN", '\u{e608}'),
    ("DEVI_DJANGO", '\u{e609}'),
    ("DEVI_DOCKER", '\u{e60a}'),
    ("DEVI_GIT", '\u{e60b}'),
    ("DEVI_GITHUB", '\u{e60c}'),
    ("DEVI_GO", '\u{e60d}'),
    ("DEVI_HTML5", '\u{e60e}'),
    ("DEVI_JAVA", '\u{e60f}'),
    ("DEVI_JAVASCRIPT", '\u{e610}'),
    ("DEVI_JQUERY", '\u{e611}'),
    ("DEVI_LINUX", '\u{e612}'),
    ("DEVI_MONGODB", '\u{e613}'),
    ("DEVI_MYSQL", '\u{e614}'),
    ("DEVI_NGINX", '\u{e615}'),
    ("DEVI_NODEJS", '\u{e616}'),
    ("DEVI_PHP", '\u{e617}'),
    ("DEVI_POSTGRESQL", '\u{e618}'),
    ("DEVI_PYTHON", '\u{e619}'),
    ("DEVI_RAILS", '\u{e61a}'),
    ("DEVI_REACT", '\u{e61b}'),
    ("DEVI_RUBY", '\u{e61c}'),
    ("DEVI_SASS", '\u{e61d}'),
    ("DEVI_SWIFT", '\u{e61e}'),
    ("DEVI_UBUNTU", '\u{e61f}'),
    ("DEVI_WINDOWS8", '\u{e620}'),
];

pub fn typeface() -> Result<Typeface> {
    Typeface::new(METADATA, FONT_FILE, ICONS)
}
