//! Marker-prefixed token extraction (`+project`, `@context`).

/// ASCII word character: letter, digit or underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Extract every marker-prefixed token from `text`, lowercased, in text
/// order, duplicates preserved.
///
/// A token starts at `marker` when the marker sits at the start of the
/// text or right after a non-word character, and covers the whole run of
/// non-whitespace characters that follows. The run only counts when it is
/// at least two characters long and its last character is a word
/// character, so `@mom.` and `+a` yield nothing while `+wash/fold` is
/// kept intact.
pub fn find_flags(text: &str, marker: char) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut flags = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let mut next = pos + 1;

        // Boundary alternatives in preference order: a consumed non-word
        // character before the marker, then the marker at start of text.
        let mut starts = [None, None];
        if !is_word_char(chars[pos]) && chars.get(pos + 1) == Some(&marker) {
            starts[0] = Some(pos + 2);
        }
        if pos == 0 && chars[0] == marker {
            starts[1] = Some(1);
        }

        for start in starts.into_iter().flatten() {
            if let Some(end) = token_end(&chars, start) {
                let token: String = chars[start..end].iter().collect();
                flags.push(token.to_lowercase());
                next = end;
                break;
            }
        }

        pos = next;
    }

    flags
}

/// End of a valid token run starting at `start`, if any.
fn token_end(chars: &[char], start: usize) -> Option<usize> {
    let mut end = start;
    while end < chars.len() && !chars[end].is_whitespace() {
        end += 1;
    }
    (end - start >= 2 && is_word_char(chars[end - 1])).then_some(end)
}
