//! The registry: every known typeface, searchable by icon name
//!
//! Families are kept in registration order and keyed by mapping prefix.
//! Lookups scan families in that order, so when two families define the same
//! icon name the one registered first wins.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::IconEntry;
use crate::error::{IconError, Result};
use crate::font::{FallbackPolicy, FontAsset};
use crate::traits::ResourceLoader;
use crate::typeface::{Typeface, TypefaceMetadata};

#[derive(Default)]
struct Families {
    ordered: Vec<Arc<Typeface>>,
    by_prefix: HashMap<&'static str, usize>,
}

/// Process-wide collection of typefaces
///
/// Safe to share between threads; registration takes a write lock, lookups
/// take a read lock. Families are never removed.
#[derive(Default)]
pub struct FontRegistry {
    families: RwLock<Families>,
}

impl FontRegistry {
    /// Starts with no families
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `typeface` under its mapping prefix.
    ///
    /// Returns `false` and leaves the registry untouched when the prefix is
    /// already taken.
    pub fn register(&self, typeface: impl Into<Arc<Typeface>>) -> bool {
        let typeface = typeface.into();
        let prefix = typeface.mapping_prefix();
        let mut families = self.families.write();

        if families.by_prefix.contains_key(prefix) {
            log::warn!(
                "Ignoring {}: mapping prefix {} is already registered",
                typeface.metadata().family_name,
                prefix
            );
            return false;
        }

        let index = families.ordered.len();
        families.by_prefix.insert(prefix, index);
        families.ordered.push(typeface);
        log::info!("Registered typeface family {}", prefix);
        true
    }

    /// First entry named `name`, scanning families in registration order
    pub fn find_icon(&self, name: &str) -> Option<IconEntry> {
        self.families
            .read()
            .ordered
            .iter()
            .find_map(|typeface| typeface.catalog().get(name))
    }

    /// Get-or-fail variant of [`find_icon`](Self::find_icon)
    pub fn icon(&self, name: &str) -> Result<IconEntry> {
        self.find_icon(name).ok_or_else(|| IconError::NotFound {
            name: name.to_string(),
        })
    }

    pub fn icon_exists(&self, name: &str) -> bool {
        self.find_icon(name).is_some()
    }

    /// Every entry mapped to `code_point`, across families in registration order
    pub fn find_by_code_point(&self, code_point: char) -> Vec<IconEntry> {
        self.families
            .read()
            .ordered
            .iter()
            .flat_map(|typeface| typeface.catalog().find_by_code_point(code_point))
            .collect()
    }

    /// Snapshot of the registered families' metadata, in registration order
    pub fn registered_families(&self) -> Vec<TypefaceMetadata> {
        self.families
            .read()
            .ordered
            .iter()
            .map(|typeface| *typeface.metadata())
            .collect()
    }

    /// Snapshot of the registered typefaces, in registration order
    pub fn typefaces(&self) -> Vec<Arc<Typeface>> {
        self.families.read().ordered.clone()
    }

    pub fn family(&self, prefix: &str) -> Option<Arc<Typeface>> {
        let families = self.families.read();
        families
            .by_prefix
            .get(prefix)
            .map(|&index| Arc::clone(&families.ordered[index]))
    }

    pub fn len(&self) -> usize {
        self.families.read().ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves the font of the family that owns `icon`
    pub fn resolve_font_for(
        &self,
        icon: &IconEntry,
        loader: &dyn ResourceLoader,
    ) -> Result<FontAsset> {
        self.owner_of(icon)?.resolve_font(loader)
    }

    /// [`resolve_font_for`](Self::resolve_font_for) with an explicit failure policy
    pub fn resolve_font_for_with(
        &self,
        icon: &IconEntry,
        loader: &dyn ResourceLoader,
        policy: &FallbackPolicy,
    ) -> Result<FontAsset> {
        self.owner_of(icon)?.resolve_font_with(loader, policy)
    }

    // The owner must hold this exact entry, not just share its prefix: a
    // typeface rejected as a duplicate hands out entries with a taken prefix.
    // The lock is released before any font I/O happens.
    fn owner_of(&self, icon: &IconEntry) -> Result<Arc<Typeface>> {
        self.family(icon.family())
            .filter(|typeface| typeface.catalog().get(icon.name()) == Some(*icon))
            .ok_or_else(|| IconError::NotFoundInFamily {
                family: icon.family().to_string(),
                name: icon.name().to_string(),
            })
    }
}

impl std::fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefixes: Vec<&'static str> = self
            .families
            .read()
            .ordered
            .iter()
            .map(|typeface| typeface.mapping_prefix())
            .collect();
        f.debug_struct("FontRegistry")
            .field("families", &prefixes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(family_name: &'static str, mapping_prefix: &'static str) -> TypefaceMetadata {
        TypefaceMetadata {
            family_name,
            mapping_prefix,
            version: "1.0",
            author: "Test",
            homepage_url: "https://example.com",
            description: "",
            license: "MIT",
            license_url: "https://opensource.org/licenses/MIT",
        }
    }

    fn typeface(
        family_name: &'static str,
        prefix: &'static str,
        icons: &[(&'static str, char)],
    ) -> Typeface {
        Typeface::new(metadata(family_name, prefix), "test.ttf", icons).unwrap()
    }

    #[test]
    fn test_empty_registry() {
        let registry = FontRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.find_icon("ANY").is_none());
        assert!(registry.registered_families().is_empty());
    }

    #[test]
    fn test_duplicate_prefix_rejected() {
        let registry = FontRegistry::new();
        assert!(registry.register(typeface("Devicon", "DEVI", &[("DEVI_GIT", '\u{e602}')])));
        let before = registry.registered_families();

        assert!(!registry.register(typeface("Other", "DEVI", &[("DEVI_RUST", '\u{e603}')])));
        assert_eq!(registry.registered_families(), before);
        assert!(!registry.icon_exists("DEVI_RUST"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_first_registered_family_wins() {
        let registry = FontRegistry::new();
        registry.register(typeface("First", "ONE", &[("DUPLICATE_NAME", 'a')]));
        registry.register(typeface("Second", "TWO", &[("DUPLICATE_NAME", 'b')]));

        let entry = registry.find_icon("DUPLICATE_NAME").unwrap();
        assert_eq!(entry.family(), "ONE");
        assert_eq!(entry.code_point(), 'a');
    }

    #[test]
    fn test_icon_get_or_fail() {
        let registry = FontRegistry::new();
        registry.register(typeface("Octicons", "OCTI", &[("OCTI_HOME", '\u{f08d}')]));

        assert_eq!(registry.icon("OCTI_HOME").unwrap().code_point(), '\u{f08d}');
        let err = registry.icon("HOME").unwrap_err();
        assert!(matches!(err, IconError::NotFound { ref name } if name == "HOME"));
    }

    #[test]
    fn test_families_in_registration_order() {
        let registry = FontRegistry::new();
        registry.register(typeface("Zeta", "ZETA", &[]));
        registry.register(typeface("Alpha", "ALPHA", &[]));

        let names: Vec<_> = registry
            .registered_families()
            .iter()
            .map(|m| m.family_name)
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(registry.family("ALPHA").unwrap().metadata().family_name, "Alpha");
        assert!(registry.family("BETA").is_none());
    }

    #[test]
    fn test_find_by_code_point_spans_families() {
        let registry = FontRegistry::new();
        registry.register(typeface("A", "A", &[("A_X", 'x'), ("A_Y", 'y')]));
        registry.register(typeface("B", "B", &[("B_X", 'x')]));

        let names: Vec<_> = registry
            .find_by_code_point('x')
            .iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(names, vec!["A_X", "B_X"]);
    }

    #[test]
    fn test_concurrent_registration_accepts_each_prefix_once() {
        let registry = FontRegistry::new();
        let accepted: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.register(typeface("Same", "SAME", &[]))))
                .collect();
            handles
                .into_iter()
                .map(|h| usize::from(h.join().unwrap()))
                .sum()
        });
        assert_eq!(accepted, 1);
        assert_eq!(registry.len(), 1);
    }
}
