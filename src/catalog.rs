//! The fixed table of sweet names and their photos.
//!
//! A [`Catalog`] keeps its entries in declared order. That order decides
//! which entry wins a partial match and which entry an unknown name hashes
//! to, so it is kept as an ordered list next to the name index rather than
//! in the index alone.

use crate::utils::normalize_name;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Built-in entries in declared order. The first entry is the primary default.
const SWEET_IMAGES: &[(&str, &str)] = &[
    // Primary sweets
    ("rasgulla", "https://static.wixstatic.com/media/b1c664_16f2c15541e745b6b1a8f522fccd1569~mv2.png?originWidth=576&originHeight=768"),
    ("kheer", "https://static.wixstatic.com/media/b1c664_1c39759d044c4e229fe82c0c2b002e92~mv2.png?originWidth=576&originHeight=768"),
    ("laddu", "https://static.wixstatic.com/media/b1c664_e84130862ea64c25ac31f7a6c0f0fba7~mv2.png?originWidth=576&originHeight=768"),
    ("halwa", "https://static.wixstatic.com/media/b1c664_f2a6762b7f2b49c89192b22ce25932e5~mv2.png?originWidth=576&originHeight=768"),
    ("peda", "https://static.wixstatic.com/media/b1c664_af4abade60e84c359265fbd4887add4b~mv2.png?originWidth=576&originHeight=768"),
    // Additional sweets
    ("gulab jamun", "https://static.wixstatic.com/media/b1c664_b88770e9270c4485968c34cc8d115d92~mv2.png?originWidth=576&originHeight=768"),
    ("barfi", "https://static.wixstatic.com/media/b1c664_588cd13a205c44d59a92626bece6cd29~mv2.png?originWidth=576&originHeight=768"),
    ("jalebi", "https://static.wixstatic.com/media/b1c664_51171461fdff4092b31e57a3d804012d~mv2.png?originWidth=576&originHeight=768"),
    ("kaju katli", "https://static.wixstatic.com/media/b1c664_3d03d455070a4ec683c91f642453a2ad~mv2.png?originWidth=576&originHeight=768"),
    ("burfi", "https://static.wixstatic.com/media/b1c664_379121990acf479b8acfe1e1f71e50ab~mv2.png?originWidth=576&originHeight=768"),
];

static SWEETS: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_trusted(SWEET_IMAGES.iter().map(|(name, url)| CatalogEntry {
        name: (*name).to_string(),
        url: (*url).to_string(),
    }))
});

/// Error type for catalog construction
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog has no entries")]
    Empty,
    #[error("Duplicate catalog name: {0}")]
    DuplicateName(String),
    #[error("Catalog name is not trimmed lowercase text: {0:?}")]
    UnnormalizedName(String),
    #[error("Blank image URL for catalog name: {0}")]
    EmptyUrl(String),
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single name-to-photo pairing
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical lowercase name
    pub name: String,
    /// Photo URL for the name
    pub url: String,
}

/// An ordered, non-empty, immutable catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Returns the built-in sweets catalog
    pub fn sweets() -> &'static Catalog {
        &SWEETS
    }

    /// Builds a catalog from entries, validating each one
    ///
    /// Names must be unique, non-empty, and already normalized (trimmed and
    /// lowercase). URLs must not be blank. Declared order is preserved.
    ///
    /// # Arguments
    ///
    /// * `entries` - The entries in declared order
    ///
    /// # Returns
    ///
    /// The catalog, or the first validation error found
    pub fn from_entries<I>(entries: I) -> Result<Catalog, CatalogError>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut catalog = Catalog {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for entry in entries {
            if entry.name.is_empty() || normalize_name(&entry.name) != entry.name {
                return Err(CatalogError::UnnormalizedName(entry.name));
            }
            if entry.url.trim().is_empty() {
                return Err(CatalogError::EmptyUrl(entry.name));
            }
            if catalog.index.contains_key(&entry.name) {
                return Err(CatalogError::DuplicateName(entry.name));
            }
            catalog.push(entry);
        }

        if catalog.entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(catalog)
    }

    /// Loads a catalog from a JSON array of `{"name": ..., "url": ...}` objects
    ///
    /// An array is used instead of an object so declared order survives parsing.
    pub fn from_json_str(json: &str) -> Result<Catalog, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Catalog::from_entries(entries)
    }

    // Compiled-in tables are checked by tests instead of at runtime
    fn from_trusted<I>(entries: I) -> Catalog
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut catalog = Catalog {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for entry in entries {
            catalog.push(entry);
        }
        catalog
    }

    fn push(&mut self, entry: CatalogEntry) {
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// The primary entry, used for absent names
    pub fn primary(&self) -> &CatalogEntry {
        &self.entries[0]
    }

    /// Exact lookup by canonical name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.entries[i].url.as_str())
    }

    /// Entries in declared order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entry at a position in declared order
    pub fn entry_at(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All photo URLs in declared order
    pub fn urls(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.url.clone()).collect()
    }

    /// All names in declared order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }
}
