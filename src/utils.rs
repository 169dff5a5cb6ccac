//! ABOUTME: Small string helpers shared by the catalog and the resolver
//! ABOUTME: Contains name normalization and the one-character fallback hash

/// Normalizes a display name for catalog lookups
///
/// Surrounding whitespace is trimmed first, then the remainder is lower-cased.
///
/// # Arguments
///
/// * `name` - The raw display name
///
/// # Returns
///
/// The normalized name
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Picks a catalog position for a name that matched nothing
///
/// The position is the Unicode code point of the first character reduced
/// modulo `len`. This is a weak hash used only to spread unknown names over
/// the catalog; existing snapshots depend on it, so it must not change.
///
/// # Arguments
///
/// * `normalized` - The normalized name (see [`normalize_name`])
/// * `len` - Number of catalog entries
///
/// # Returns
///
/// An index in `0..len`, or 0 when `normalized` is empty or `len` is 0
pub fn fallback_index(normalized: &str, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    normalized
        .chars()
        .next()
        .map_or(0, |c| c as u32 as usize % len)
}
