// src/matching/normalize.rs
// Ordered normalization pipeline turning a raw label string into candidate
// ingredient/additive tokens. Each step feeds the next; the steps are split
// into named functions so they stay independently testable.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separators that are structurally equivalent to a comma on ingredient
/// labels: slashes, interior periods, colon-space, and the connector words
/// "or" / "and".
static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/|\.|: | or | and ").unwrap());

/// Characters that carry no label structure: trademark/registration glyphs,
/// hyphens, accent decoration. ASCII word class on purpose; non-Latin
/// letters are dropped too. Colons stay — a bare colon with no following
/// space is missed by the separator rewrite and must survive for the
/// dedicated colon split at the end of the pipeline.
static NON_LABEL_CHAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_\s,():]").unwrap());

/// Whole-word "as" inside a segment marks an alias list ("Color (as
/// annatto)") and is turned into a comma so both sides become candidates.
static AS_CONNECTOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bas ").unwrap());

/// Leading quantity-plus-unit prefix, e.g. the "2mg " in "2mg Riboflavin".
static QUANTITY_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s*\w+\s*").unwrap());

/// Decompose a raw label string into normalized candidate tokens: lowercase,
/// trimmed, stripped of quantity prefixes and enclosing punctuation. Order
/// follows first occurrence in the source string; duplicates are kept. Total
/// over all inputs, an empty or separator-only string yields no tokens.
///
/// Empty pieces are dropped before the quantity prefix is stripped, so a
/// piece that is nothing but a quantity ("2mg") comes out as an empty
/// token. Downstream matching skips empty canonical names, so such tokens
/// never match anything.
pub fn normalize_label(raw: &str) -> Vec<String> {
    let label = strip_trailing_period(raw);
    let label = canonicalize_separators(label);
    let label = strip_foreign_chars(&label);

    let mut tokens = Vec::new();
    for segment in split_unprotected_commas(&label) {
        for unwrapped in expand_parentheticals(&segment) {
            for listed in unwrapped.split(',') {
                for piece in listed.split(':') {
                    let piece = piece.trim();
                    if piece.is_empty() {
                        continue;
                    }
                    tokens.push(strip_quantity_prefix(piece));
                }
            }
        }
    }
    tokens
}

/// Ingredient lists are often terminated by a full stop that is not a
/// separator; drop a single trailing period before anything else.
fn strip_trailing_period(raw: &str) -> &str {
    raw.strip_suffix('.').unwrap_or(raw)
}

/// Rewrite the separator variants to plain commas. The connector " from "
/// introduces a sourcing clause rather than a second ingredient ("Vitamin E
/// from soybean oil"), so it is dropped without introducing a separator,
/// leaving a single space where it stood.
fn canonicalize_separators(label: &str) -> String {
    let label = label.replace(" from ", " ");
    SEPARATOR_RE.replace_all(&label, ",").into_owned()
}

fn strip_foreign_chars(label: &str) -> String {
    NON_LABEL_CHAR_RE.replace_all(label, "").into_owned()
}

/// Split on commas, except commas protected by parentheses. A comma is
/// protected when it sits inside a still-open paren, or when scanning
/// forward a `)` is reached before any `(`. An unmatched open paren
/// protects every comma after it until string end; best effort, not an
/// error.
fn split_unprotected_commas(label: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    for (i, ch) in label.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 && !closes_before_opening(&label[i + 1..]) => {
                segments.push(label[start..i].to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(label[start..].to_string());
    segments
}

fn closes_before_opening(rest: &str) -> bool {
    for ch in rest.chars() {
        match ch {
            ')' => return true,
            '(' => return false,
            _ => {}
        }
    }
    false
}

/// Flatten parenthetical aliases into sibling candidates: rewrite whole-word
/// "as " to a comma, then split on both paren characters, trimming and
/// lowercasing every piece.
fn expand_parentheticals(segment: &str) -> Vec<String> {
    AS_CONNECTOR_RE
        .replace_all(segment, ",")
        .split(['(', ')'])
        .map(|piece| piece.trim().to_lowercase())
        .collect()
}

fn strip_quantity_prefix(piece: &str) -> String {
    QUANTITY_PREFIX_RE.replace(piece, "").into_owned()
}
