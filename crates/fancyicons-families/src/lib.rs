//! The icon fonts that ship with fancyicons
//!
//! Each module describes one family: its mapping prefix, the bundled font
//! file, metadata, and the icon table. Icon names are `<PREFIX>_<NAME>` in
//! upper snake case, so `GLYI_HOME` is the Glyphicons Halflings house.
//!
//! The tables cover a representative subset of each font's glyphs.
//!
//! ```rust
//! let registry = fancyicons_families::default_registry()?;
//! let home = registry.icon("GLYI_HOME")?;
//! assert_eq!(home.code_point(), '\u{e021}');
//! # Ok::<(), fancyicons_core::IconError>(())
//! ```

use fancyicons_core::{FontRegistry, Result, Typeface};

pub mod devicon;
pub mod dripicons;
pub mod foundation_icons;
pub mod glyphicons_halflings;
pub mod meteocons;
pub mod mfglabs_iconset;
pub mod mobirise_icons;
pub mod octicons;
pub mod open_iconic;
pub mod pixeden7_stroke;
pub mod themify_icons;

const FAMILIES: &[fn() -> Result<Typeface>] = &[
    devicon::typeface,
    dripicons::typeface,
    foundation_icons::typeface,
    glyphicons_halflings::typeface,
    meteocons::typeface,
    mfglabs_iconset::typeface,
    mobirise_icons::typeface,
    octicons::typeface,
    open_iconic::typeface,
    pixeden7_stroke::typeface,
    themify_icons::typeface,
];

/// Every bundled family, alphabetically
pub fn all() -> Result<Vec<Typeface>> {
    FAMILIES.iter().map(|typeface| typeface()).collect()
}

/// Registers every bundled family, returning how many were newly accepted
pub fn register_all(registry: &FontRegistry) -> Result<usize> {
    let accepted = all()?
        .into_iter()
        .map(|typeface| registry.register(typeface))
        .filter(|&accepted| accepted)
        .count();
    log::debug!("Registered {} of {} bundled families", accepted, FAMILIES.len());
    Ok(accepted)
}

/// A registry holding every bundled family
pub fn default_registry() -> Result<FontRegistry> {
    let registry = FontRegistry::new();
    register_all(&registry)?;
    Ok(registry)
}
