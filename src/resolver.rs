//! Photo resolution for product display names.
//!
//! This module picks a catalog photo for an arbitrary display name. The rules
//! are applied in a fixed order: absent names get the primary photo, then an
//! exact name match is tried, then a containment match in either direction,
//! and finally a one-character hash picks a stable photo for anything else.

use crate::catalog::Catalog;
use crate::utils::{fallback_index, normalize_name};
use log::{debug, trace};

/// Resolves a display name to a photo URL from `catalog`
///
/// # Arguments
///
/// * `catalog` - The catalog to resolve against
/// * `name` - The display name, if the product has one
///
/// # Returns
///
/// A non-empty URL taken from `catalog`. The same catalog and name always
/// yield the same URL.
pub fn resolve_image<'a>(catalog: &'a Catalog, name: Option<&str>) -> &'a str {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => {
            debug!("No product name, using primary image");
            return &catalog.primary().url;
        }
    };

    let normalized = normalize_name(name);

    if let Some(url) = catalog.get(&normalized) {
        trace!("Exact image match for '{}'", normalized);
        return url;
    }

    // Declared order decides ties. An all-whitespace name normalizes to ""
    // and is contained in the first entry.
    if let Some(entry) = catalog.entries().iter().find(|entry| {
        normalized.contains(entry.name.as_str()) || entry.name.contains(normalized.as_str())
    }) {
        trace!("Partial image match for '{}': '{}'", normalized, entry.name);
        return &entry.url;
    }

    let index = fallback_index(&normalized, catalog.len());
    debug!(
        "No image match for '{}', using fallback entry {}",
        normalized, index
    );
    match catalog.entry_at(index) {
        Some(entry) => entry.url.as_str(),
        None => catalog.primary().url.as_str(),
    }
}

/// Resolves a display name against the built-in sweets catalog
///
/// # Arguments
///
/// * `product_name` - The display name, if the product has one
///
/// # Returns
///
/// A photo URL from the built-in catalog
pub fn get_product_image_url(product_name: Option<&str>) -> &'static str {
    resolve_image(Catalog::sweets(), product_name)
}

/// All built-in photo URLs in declared order
pub fn get_all_sweet_images() -> Vec<String> {
    Catalog::sweets().urls()
}

/// All built-in sweet names in declared order
pub fn get_all_sweet_names() -> Vec<String> {
    Catalog::sweets().names()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;

    fn small_catalog() -> Catalog {
        Catalog::from_entries(vec![
            CatalogEntry {
                name: "tea".to_string(),
                url: "https://example.com/tea.png".to_string(),
            },
            CatalogEntry {
                name: "green tea".to_string(),
                url: "https://example.com/green.png".to_string(),
            },
            CatalogEntry {
                name: "coffee".to_string(),
                url: "https://example.com/coffee.png".to_string(),
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_match_beats_earlier_partial() {
        // "tea" is contained in "green tea" and is declared first, but the
        // exact match is checked before the scan.
        let catalog = small_catalog();
        assert_eq!(
            resolve_image(&catalog, Some("Green Tea")),
            "https://example.com/green.png"
        );
    }

    #[test]
    fn test_partial_match_uses_declared_order() {
        let catalog = small_catalog();
        assert_eq!(
            resolve_image(&catalog, Some("Iced Green Tea")),
            "https://example.com/tea.png"
        );
        assert_eq!(
            resolve_image(&catalog, Some("cof")),
            "https://example.com/coffee.png"
        );
    }

    #[test]
    fn test_fallback_uses_first_character() {
        let catalog = small_catalog();
        // 'z' -> 122 % 3 = 2 -> coffee
        assert_eq!(
            resolve_image(&catalog, Some("Zzyzx")),
            "https://example.com/coffee.png"
        );
        // 'm' -> 109 % 3 = 1 -> green tea
        assert_eq!(
            resolve_image(&catalog, Some("Mocha")),
            "https://example.com/green.png"
        );
    }

    #[test]
    fn test_absent_and_empty_names() {
        let catalog = small_catalog();
        assert_eq!(resolve_image(&catalog, None), "https://example.com/tea.png");
        assert_eq!(resolve_image(&catalog, Some("")), "https://example.com/tea.png");
        assert_eq!(
            resolve_image(&catalog, Some("   ")),
            "https://example.com/tea.png"
        );
    }
}
