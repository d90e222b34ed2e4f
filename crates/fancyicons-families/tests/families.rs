// this_file: crates/fancyicons-families/tests/families.rs

use std::collections::HashSet;

use fancyicons_core::{FontRegistry, IconError};
use fancyicons_families::{
    default_registry, devicon, glyphicons_halflings, octicons, open_iconic, register_all,
};

#[test]
fn test_every_family_builds() {
    let families = fancyicons_families::all().unwrap();
    assert_eq!(families.len(), 11);
    assert!(families.iter().all(|f| !f.catalog().is_empty()));
}

#[test]
fn test_prefixes_are_unique() {
    let families = fancyicons_families::all().unwrap();
    let prefixes: HashSet<_> = families.iter().map(|f| f.mapping_prefix()).collect();
    assert_eq!(prefixes.len(), families.len());
}

#[test]
fn test_icon_names_carry_family_prefix() {
    for family in fancyicons_families::all().unwrap() {
        let expected = format!("{}_", family.mapping_prefix());
        for entry in family.catalog().iter() {
            assert!(
                entry.name().starts_with(&expected),
                "{} does not start with {}",
                entry.name(),
                expected
            );
            assert_eq!(entry.family(), family.mapping_prefix());
        }
    }
}

#[test]
fn test_lookup_round_trips_for_every_entry() {
    for family in fancyicons_families::all().unwrap() {
        for entry in family.catalog().all_entries() {
            assert_eq!(family.icon(entry.name()).unwrap(), *entry);
        }
        let names: HashSet<_> = family.catalog().iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), family.catalog().count());
    }
}

#[test]
fn test_glyphicons_home() {
    let glyphicons = glyphicons_halflings::typeface().unwrap();
    let home = glyphicons.icon("GLYI_HOME").unwrap();
    assert_eq!(home.code_point(), '\u{e021}');

    let err = glyphicons.icon("GLYI_NOPE").unwrap_err();
    assert!(matches!(err, IconError::NotFoundInFamily { .. }));
}

#[test]
fn test_devicon_then_octicons_lookup() {
    let registry = FontRegistry::new();
    assert!(registry.register(devicon::typeface().unwrap()));
    assert!(registry.register(octicons::typeface().unwrap()));

    let home = registry.find_icon("OCTI_HOME").unwrap();
    assert_eq!(home.code_point(), '\u{f08d}');
    assert_eq!(home.family(), octicons::PREFIX);
    assert!(registry.find_icon("HOME").is_none());
}

#[test]
fn test_register_all_is_idempotent() {
    let registry = FontRegistry::new();
    assert_eq!(register_all(&registry).unwrap(), 11);
    let families = registry.registered_families();

    assert_eq!(register_all(&registry).unwrap(), 0);
    assert_eq!(registry.registered_families(), families);
}

#[test]
fn test_default_registry_order() {
    let registry = default_registry().unwrap();
    let prefixes: Vec<_> = registry
        .registered_families()
        .iter()
        .map(|m| m.mapping_prefix)
        .collect();
    assert_eq!(
        prefixes,
        vec!["DEVI", "DRPI", "FOUI", "GLYI", "METI", "MFGI", "MBRI", "OCTI", "OPNI", "PE7I", "THEI"]
    );
}

#[test]
fn test_aliases_resolve_to_same_glyph() {
    let glyphicons = glyphicons_halflings::typeface().unwrap();
    assert_eq!(
        glyphicons.icon("GLYI_EURO").unwrap().code_point(),
        glyphicons.icon("GLYI_EUR").unwrap().code_point()
    );

    let iconic = open_iconic::typeface().unwrap();
    let aliases: Vec<_> = iconic
        .catalog()
        .find_by_code_point('\u{e0b3}')
        .iter()
        .map(|e| e.name())
        .collect();
    assert_eq!(aliases, vec!["OPNI_PERSON", "OPNI_ACCOUNT"]);
}

#[test]
fn test_font_files_are_distinct() {
    let families = fancyicons_families::all().unwrap();
    let files: HashSet<_> = families.iter().map(|f| f.font_file()).collect();
    assert_eq!(files.len(), families.len());
}
