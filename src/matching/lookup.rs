// src/matching/lookup.rs
// Exact-match lookup: candidate tokens joined against the reference
// dictionary of canonical additive names.

use log::debug;

use crate::matching::normalize::normalize_label;
use crate::models::ReferenceDictionary;

/// Match a raw label string against the reference dictionary and return the
/// codes of every entry whose canonical name equals one of the normalized
/// candidate tokens, case-insensitively and whitespace-trimmed.
///
/// Result order follows dictionary order, not token order. Entries with an
/// empty canonical name never match. Distinct entries sharing a canonical
/// name all match. "No match" is an empty result, never an error.
pub fn lookup_additives(raw: &str, reference: &ReferenceDictionary) -> Vec<String> {
    let tokens = normalize_label(raw);
    debug!(
        "label {:?} normalized into {} candidate token(s)",
        raw,
        tokens.len()
    );
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut codes = Vec::new();
    for entry in reference.entries() {
        let canonical = entry.name.trim().to_lowercase();
        if canonical.is_empty() {
            continue;
        }
        if tokens.iter().any(|token| token.trim() == canonical) {
            codes.push(entry.code.clone());
        }
    }
    debug!("matched {} reference code(s)", codes.len());
    codes
}
