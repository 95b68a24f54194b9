// src/models/mod.rs
// Core data model: reference dictionary entries keyed by stable additive codes

use serde::{Deserialize, Serialize};

/// Key suffix marking display-name entries in the strings resource. An
/// entry's code is its resource key with this suffix removed.
pub const NAME_KEY_SUFFIX: &str = "_name";

/// One canonical dictionary entry: a display name and the stable code that
/// downstream consumers use to fetch the full record (risk level,
/// description, sources).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub code: String,
    pub name: String,
}

/// Read-only set of canonical additive names. Loaded once at process start
/// and never mutated afterwards; safe to share across threads by reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceDictionary {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceDictionary {
    pub fn from_entries(entries: Vec<ReferenceEntry>) -> Self {
        Self { entries }
    }

    /// Entries in resource order. Match results preserve this order.
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display name for a known additive code, for rendering product records
    /// whose additive keys are already resolved. First entry wins when the
    /// resource carries duplicates.
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, name: &str) -> ReferenceEntry {
        ReferenceEntry {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_display_name_lookup() {
        let dictionary = ReferenceDictionary::from_entries(vec![
            entry("e300", "Ascorbic acid"),
            entry("e330", "Citric acid"),
        ]);

        assert_eq!(dictionary.display_name("e330"), Some("Citric acid"));
        assert_eq!(dictionary.display_name("e999"), None);
    }

    #[test]
    fn test_display_name_first_entry_wins() {
        let dictionary = ReferenceDictionary::from_entries(vec![
            entry("e160b", "Annatto"),
            entry("e160b", "Bixin"),
        ]);

        assert_eq!(dictionary.display_name("e160b"), Some("Annatto"));
    }

    #[test]
    fn test_empty_dictionary() {
        let dictionary = ReferenceDictionary::default();
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.len(), 0);
        assert_eq!(dictionary.display_name("e300"), None);
    }
}
