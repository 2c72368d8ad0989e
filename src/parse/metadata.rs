//! `key:value` metadata extraction and due-date resolution.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::model::todo::MetadataPair;
use crate::parse::line_parser::DATE_PATTERN;

/// Anchored date check for `due:` values.
static DUE_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{}$", DATE_PATTERN)).unwrap());

/// First character of a metadata key.
fn is_key_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-'
}

/// Remaining key characters and value characters: word characters and
/// hyphens.
fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Extract every `key:value` pair from `text`, names lowercased, values
/// verbatim, in text order, duplicates preserved.
///
/// A pair counts when the key is at least two characters long and starts
/// with a letter, `_` or `-`, the value is one or more word characters or
/// hyphens, the token follows a non-word character or the start of the
/// text, and whitespace or end of text comes right after the value.
pub fn find_metadata(text: &str) -> Vec<MetadataPair> {
    let chars: Vec<char> = text.chars().collect();
    let mut pairs = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let mut next = pos + 1;

        // Boundary alternatives in preference order: a consumed non-word
        // character before the key, then a key at start of text.
        let mut starts = [None, None];
        if !is_word_char(chars[pos]) {
            starts[0] = Some(pos + 1);
        }
        if pos == 0 {
            starts[1] = Some(0);
        }

        for start in starts.into_iter().flatten() {
            if let Some((pair, end)) = metadata_token(&chars, start) {
                pairs.push(pair);
                next = end;
                break;
            }
        }

        pos = next;
    }

    pairs
}

/// Parse one `key:value` token at `start`. Returns the pair and the index
/// just past the value.
fn metadata_token(chars: &[char], start: usize) -> Option<(MetadataPair, usize)> {
    if start >= chars.len() || !is_key_start(chars[start]) {
        return None;
    }

    let mut key_end = start + 1;
    while key_end < chars.len() && is_key_char(chars[key_end]) {
        key_end += 1;
    }
    if key_end - start < 2 || chars.get(key_end) != Some(&':') {
        return None;
    }

    let value_start = key_end + 1;
    let mut value_end = value_start;
    while value_end < chars.len() && is_key_char(chars[value_end]) {
        value_end += 1;
    }
    if value_end == value_start {
        return None;
    }
    if value_end < chars.len() && !chars[value_end].is_whitespace() {
        return None;
    }

    let name = chars[start..key_end]
        .iter()
        .collect::<String>()
        .to_lowercase();
    let value = chars[value_start..value_end].iter().collect();
    Some((MetadataPair { name, value }, value_end))
}

/// Resolve the due date from extracted metadata: the first `due` pair
/// whose value is a real `YYYY-MM-DD` calendar date wins. Pairs whose
/// value fails the date pattern, or passes it with an impossible date
/// like `2021-02-30`, are skipped and scanning continues.
pub fn resolve_due_date(metadata: &[MetadataPair]) -> Option<NaiveDate> {
    metadata
        .iter()
        .filter(|pair| pair.name == "due" && DUE_DATE_RE.is_match(&pair.value))
        .find_map(|pair| NaiveDate::parse_from_str(&pair.value, "%Y-%m-%d").ok())
}
