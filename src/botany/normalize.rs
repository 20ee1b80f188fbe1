//! Name normalization applied to both indexed keys and queries.
//!
//! - Common names: Unicode NFKD, combining characters stripped, lowercased
//! - Scientific names: lowercased only

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Fold a common name: `"Achillée"` → `"achillee"`.
pub fn normalize_common_name(value: &str) -> String {
    value
        .nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect::<String>()
        .to_lowercase()
}

/// Fold a scientific name. Diacritics are kept.
pub fn normalize_scientific_name(value: &str) -> String {
    value.to_lowercase()
}
