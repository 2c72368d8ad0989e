use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::parse::flags::find_flags;
use crate::parse::line_parser::{LineParts, parse_line};
use crate::parse::line_serializer::serialize_line;
use crate::parse::metadata::{find_metadata, resolve_due_date};

/// Score for a task with no priority; sorts after `Z` (score 26).
const UNPRIORITIZED_SCORE: i32 = 100;

/// A single `key:value` metadata pair embedded in task content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataPair {
    pub name: String,
    pub value: String,
}

/// What a `set_completed` call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionChange {
    /// Open → completed; the completion date was stamped with today.
    Completed,
    /// Completed → open; the completion date was cleared.
    Reopened,
    /// The flag already had the requested value.
    Unchanged,
}

/// Error type for record construction
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("todo line is not text: {0}")]
    NotText(#[from] std::str::Utf8Error),
}

/// One todo.txt task line and its parsed fields, kept in sync both ways:
/// replacing the raw text re-parses every field, and writing a field
/// re-renders the raw text from the current snapshot.
///
/// `content`, `projects`, `contexts`, `metadata` and the due date are
/// derived from the raw text and have no setters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Todo {
    raw: Option<String>,
    completed: bool,
    completed_date: Option<String>,
    priority: Option<char>,
    creation_date: Option<String>,
    content: Option<String>,
    projects: Vec<String>,
    contexts: Vec<String>,
    metadata: Vec<MetadataPair>,
}

impl Todo {
    /// A record with no text at all: nothing is parsed and every field is
    /// at its default. Distinct from a record holding an empty line.
    pub fn new() -> Self {
        Todo::default()
    }

    /// Parse a record from a line of text.
    pub fn from_line(line: impl Into<String>) -> Self {
        let mut todo = Todo::default();
        todo.set_raw_text(line);
        todo
    }

    /// Parse a record from raw bytes. Fails when the bytes are not valid
    /// UTF-8; absent input is `Todo::new`, not an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TodoError> {
        Ok(Todo::from_line(std::str::from_utf8(bytes)?))
    }

    // -----------------------------------------------------------------------
    // Raw text
    // -----------------------------------------------------------------------

    /// The raw line, or `None` for a record that never had text.
    pub fn raw_text(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Replace the raw line and re-parse every field from it.
    pub fn set_raw_text(&mut self, text: impl Into<String>) {
        self.raw = Some(text.into());
        self.reparse();
    }

    /// Render the current field snapshot to a canonical line without
    /// touching the record.
    pub fn to_line(&self) -> String {
        serialize_line(&self.parts())
    }

    // -----------------------------------------------------------------------
    // Settable fields
    // -----------------------------------------------------------------------

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Set the completion flag. Completing an open task stamps the
    /// completion date with today's local date; reopening clears it;
    /// writing the current value again leaves the date alone. The returned
    /// change is the caller's completion notification.
    pub fn set_completed(&mut self, completed: bool) -> CompletionChange {
        let change = match (self.completed, completed) {
            (false, true) => {
                self.completed_date = Some(today());
                CompletionChange::Completed
            }
            (true, false) => {
                self.completed_date = None;
                CompletionChange::Reopened
            }
            _ => CompletionChange::Unchanged,
        };
        self.completed = completed;
        self.render();
        change
    }

    pub fn completed_date(&self) -> Option<&str> {
        self.completed_date.as_deref()
    }

    /// Stored verbatim; callers are trusted with the value.
    pub fn set_completed_date(&mut self, date: Option<String>) {
        self.completed_date = date;
        self.render();
    }

    pub fn priority(&self) -> Option<char> {
        self.priority
    }

    /// Stored verbatim. The grammar only ever produces `A`-`Z`, but
    /// nothing here rejects other characters.
    pub fn set_priority(&mut self, priority: Option<char>) {
        self.priority = priority;
        self.render();
    }

    /// `A` → 1 … `Z` → 26; a task without priority scores 100.
    pub fn priority_score(&self) -> i32 {
        match self.priority {
            Some(p) => p as i32 - 64,
            None => UNPRIORITIZED_SCORE,
        }
    }

    pub fn creation_date(&self) -> Option<&str> {
        self.creation_date.as_deref()
    }

    /// Stored verbatim; callers are trusted with the value.
    pub fn set_creation_date(&mut self, date: Option<String>) {
        self.creation_date = date;
        self.render();
    }

    // -----------------------------------------------------------------------
    // Derived, read-only fields
    // -----------------------------------------------------------------------

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// `+`-tagged tokens in content, lowercased, text order, duplicates
    /// kept.
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    /// `@`-tagged tokens in content, same rules as `projects`.
    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    /// `key:value` pairs in content, names lowercased, text order,
    /// duplicates kept.
    pub fn metadata(&self) -> &[MetadataPair] {
        &self.metadata
    }

    /// First `due:` pair carrying a real calendar date, if any.
    pub fn due_date(&self) -> Option<NaiveDate> {
        resolve_due_date(&self.metadata)
    }

    // -----------------------------------------------------------------------
    // Sync
    // -----------------------------------------------------------------------

    fn parts(&self) -> LineParts {
        LineParts {
            completed: self.completed,
            completed_date: self.completed_date.clone(),
            priority: self.priority,
            creation_date: self.creation_date.clone(),
            content: self.content.clone(),
        }
    }

    /// Re-derive every field from the raw text. Absent text skips the
    /// grammar entirely; an empty line runs it and matches nothing.
    fn reparse(&mut self) {
        let parts = match &self.raw {
            Some(line) => parse_line(line),
            None => LineParts::default(),
        };
        self.completed = parts.completed;
        self.completed_date = parts.completed_date;
        self.priority = parts.priority;
        self.creation_date = parts.creation_date;
        self.content = parts.content;

        match self.content.as_deref() {
            Some(content) => {
                self.projects = find_flags(content, '+');
                self.contexts = find_flags(content, '@');
                self.metadata = find_metadata(content);
            }
            None => {
                self.projects = Vec::new();
                self.contexts = Vec::new();
                self.metadata = Vec::new();
            }
        }
    }

    /// Re-render the raw text from the current field snapshot. Render
    /// never re-parses its own output, so a setter cannot recurse.
    fn render(&mut self) {
        self.raw = Some(self.to_line());
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
