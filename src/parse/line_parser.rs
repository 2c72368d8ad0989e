use std::sync::LazyLock;

use regex::Regex;

/// Date token: `YYYY-MM-DD` with year 1900-2099 and digit-range checks
/// only, so `2021-02-30` is syntactically a date.
pub(crate) const DATE_PATTERN: &str =
    r"(?:19|20)[0-9]{2}-(?:0[1-9]|1[012])-(?:0[1-9]|[12][0-9]|3[01])";

/// The combined line grammar. Groups, left to right:
/// 1: completion marker, 2: completion date, 3: priority,
/// 4: creation date, 5: content.
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?:(x) (?:({date}) )?)?(?:\(([A-Z])\) )?(?:({date}) )?(.+)$",
        date = DATE_PATTERN
    ))
    .unwrap()
});

/// The positional fields of one todo.txt line, before tag extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineParts {
    pub completed: bool,
    pub completed_date: Option<String>,
    pub priority: Option<char>,
    pub creation_date: Option<String>,
    pub content: Option<String>,
}

/// Parse a single todo.txt line into its positional parts.
///
/// Groups are matched strictly left to right and every one of them is
/// optional except content: a date straight after `x ` is always the
/// completion date, and the next date is always the creation date. A line
/// that fits none of the prefix tokens lands entirely in `content`; only
/// an empty line matches nothing at all.
pub fn parse_line(line: &str) -> LineParts {
    let mut parts = LineParts::default();
    let Some(caps) = LINE_RE.captures(line) else {
        return parts;
    };

    parts.completed = caps.get(1).is_some();
    if parts.completed {
        parts.completed_date = caps.get(2).map(|m| m.as_str().to_string());
    }
    parts.priority = caps.get(3).and_then(|m| m.as_str().chars().next());
    parts.creation_date = caps.get(4).map(|m| m.as_str().to_string());
    parts.content = caps.get(5).map(|m| m.as_str().to_string());

    parts
}
