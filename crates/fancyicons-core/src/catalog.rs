//! Icon catalogs: the closed set of named glyphs a family provides
//!
//! A catalog is built once from a static definition table and never changes
//! afterwards. Names are unique within a catalog; code points are not, so
//! several names may point at the same glyph.

use std::collections::HashMap;
use std::fmt;

use crate::error::{IconError, Result};

/// One glyph within a family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconEntry {
    name: &'static str,
    code_point: char,
    family: &'static str,
}

impl IconEntry {
    /// Stable identifier, unique within its family (e.g. `GLYI_HOME`)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The Unicode scalar value that selects this glyph in the family's font
    pub fn code_point(&self) -> char {
        self.code_point
    }

    /// Mapping prefix of the family that owns this entry
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// The glyph as a `char`, ready to drop into a text run
    pub fn as_char(&self) -> char {
        self.code_point
    }

    /// The glyph as a one-character string
    pub fn glyph(&self) -> String {
        self.code_point.to_string()
    }
}

impl fmt::Display for IconEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code_point)
    }
}

/// The frozen name → code point table of one family
#[derive(Debug, Clone)]
pub struct IconCatalog {
    family: &'static str,
    entries: Vec<IconEntry>,
    index: HashMap<&'static str, usize>,
}

impl IconCatalog {
    /// Builds a catalog for `family` from its definition table.
    ///
    /// Entries keep the table's order. A name that appears twice fails the
    /// whole catalog with [`IconError::DuplicateIcon`].
    pub fn new(family: &'static str, definitions: &[(&'static str, char)]) -> Result<Self> {
        let mut entries = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());

        for &(name, code_point) in definitions {
            if index.insert(name, entries.len()).is_some() {
                return Err(IconError::DuplicateIcon {
                    family: family.to_string(),
                    name: name.to_string(),
                });
            }
            entries.push(IconEntry {
                name,
                code_point,
                family,
            });
        }

        Ok(Self {
            family,
            entries,
            index,
        })
    }

    /// Mapping prefix of the owning family
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Exact, case-sensitive lookup
    pub fn lookup(&self, name: &str) -> Result<IconEntry> {
        self.get(name).ok_or_else(|| IconError::NotFoundInFamily {
            family: self.family.to_string(),
            name: name.to_string(),
        })
    }

    /// Like [`lookup`](Self::lookup) but without the error
    pub fn get(&self, name: &str) -> Option<IconEntry> {
        self.index.get(name).map(|&i| self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Every entry in definition order
    pub fn all_entries(&self) -> &[IconEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconEntry> + '_ {
        self.entries.iter()
    }

    /// Number of entries (not distinct code points)
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All names that map to `code_point`, in definition order
    pub fn find_by_code_point(&self, code_point: char) -> Vec<IconEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.code_point == code_point)
            .copied()
            .collect()
    }
}
