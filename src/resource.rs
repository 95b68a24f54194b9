// src/resource.rs
// Loads the additive strings resource (a JSON rendering of an Android-style
// strings file) into a ReferenceDictionary. Only the loading layer is
// fallible; the matching core never is.

use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::models::{ReferenceDictionary, ReferenceEntry, NAME_KEY_SUFFIX};

/// Environment variable pointing at an external strings resource file that
/// overrides the bundled one.
pub const STRINGS_PATH_ENV: &str = "ADDITIVE_STRINGS_PATH";

const BUNDLED_STRINGS: &str = include_str!("../assets/strings.json");

static BUNDLED_DICTIONARY: Lazy<ReferenceDictionary> = Lazy::new(|| {
    parse_reference_dictionary(BUNDLED_STRINGS).expect("bundled strings.json must parse")
});

#[derive(Debug, Deserialize)]
struct StringsDocument {
    resources: Resources,
}

#[derive(Debug, Deserialize)]
struct Resources {
    #[serde(default)]
    string: Vec<StringResource>,
}

#[derive(Debug, Deserialize)]
struct StringResource {
    #[serde(rename = "_name")]
    name: String,
    #[serde(rename = "__text", default)]
    text: Option<String>,
}

/// Parse a strings resource document into a reference dictionary. Only
/// entries whose key ends in `_name` carry canonical display names; their
/// code is the key with that suffix removed. Other keys (descriptions, risk
/// levels) belong to downstream consumers and are skipped here.
pub fn parse_reference_dictionary(json: &str) -> Result<ReferenceDictionary> {
    let document: StringsDocument =
        serde_json::from_str(json).context("Failed to parse strings resource JSON")?;

    let entries: Vec<ReferenceEntry> = document
        .resources
        .string
        .into_iter()
        .filter_map(|resource| {
            let code = resource.name.strip_suffix(NAME_KEY_SUFFIX)?.to_string();
            Some(ReferenceEntry {
                code,
                name: resource.text.unwrap_or_default(),
            })
        })
        .collect();

    debug!("strings resource yielded {} reference entries", entries.len());
    Ok(ReferenceDictionary::from_entries(entries))
}

pub fn load_reference_dictionary<P: AsRef<Path>>(path: P) -> Result<ReferenceDictionary> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read strings resource from {}", path.display()))?;
    parse_reference_dictionary(&json)
        .with_context(|| format!("Failed to parse strings resource from {}", path.display()))
}

/// The compiled-in reference dictionary, parsed once per process.
pub fn bundled() -> &'static ReferenceDictionary {
    &BUNDLED_DICTIONARY
}

/// Dictionary for the current process: the `ADDITIVE_STRINGS_PATH` override
/// when set and loadable, otherwise the bundled asset.
pub fn load_default() -> ReferenceDictionary {
    if let Ok(path) = env::var(STRINGS_PATH_ENV) {
        match load_reference_dictionary(&path) {
            Ok(dictionary) => {
                debug!("loaded {} reference entries from {}", dictionary.len(), path);
                return dictionary;
            }
            Err(e) => warn!(
                "{}={} could not be loaded, falling back to bundled resource: {:#}",
                STRINGS_PATH_ENV, path, e
            ),
        }
    }
    bundled().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "resources": {
            "string": [
                { "_name": "app_title", "__text": "Additive Watch" },
                { "_name": "e300_name", "__text": "Ascorbic acid" },
                { "_name": "e300_description", "__text": "Antioxidant, vitamin C." },
                { "_name": "e300_danger", "__text": "0" },
                { "_name": "e160b_name", "__text": "Annatto" },
                { "_name": "e171_name" }
            ]
        }
    }"#;

    #[test]
    fn test_parse_keeps_only_name_entries() {
        let dictionary = parse_reference_dictionary(SAMPLE).unwrap();
        assert_eq!(dictionary.len(), 3);

        let codes: Vec<&str> = dictionary
            .entries()
            .iter()
            .map(|e| e.code.as_str())
            .collect();
        assert_eq!(codes, vec!["e300", "e160b", "e171"]);
    }

    #[test]
    fn test_parse_derives_codes_and_names() {
        let dictionary = parse_reference_dictionary(SAMPLE).unwrap();
        assert_eq!(dictionary.display_name("e300"), Some("Ascorbic acid"));
        // Entry without text stays in the dictionary with an empty name; the
        // matcher skips it.
        assert_eq!(dictionary.display_name("e171"), Some(""));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_reference_dictionary("not json").is_err());
        assert!(parse_reference_dictionary(r#"{ "resources": 3 }"#).is_err());
    }

    #[test]
    fn test_parse_tolerates_empty_resource_list() {
        let dictionary = parse_reference_dictionary(r#"{ "resources": {} }"#).unwrap();
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_bundled_dictionary_loads() {
        let dictionary = bundled();
        assert!(!dictionary.is_empty());
        assert_eq!(dictionary.display_name("e300"), Some("Ascorbic acid"));
    }

    // Single test so the env var mutations stay sequential.
    #[test]
    fn test_load_default_override_and_fallback() {
        let _ = env_logger::builder().is_test(true).try_init();

        let path = env::temp_dir().join("ingredient_matching_strings_override.json");
        fs::write(&path, SAMPLE).unwrap();
        env::set_var(STRINGS_PATH_ENV, &path);
        let dictionary = load_default();
        assert_eq!(dictionary.len(), 3);

        env::set_var(STRINGS_PATH_ENV, "/nonexistent/strings.json");
        let dictionary = load_default();
        assert_eq!(dictionary.len(), bundled().len());

        // Cleanup
        env::remove_var(STRINGS_PATH_ENV);
        let _ = fs::remove_file(&path);
    }
}
