use chrono::NaiveDate;
use serde::Serialize;

use crate::model::todo::{MetadataPair, Todo};

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<char>,
    pub priority_score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetadataPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

pub fn todo_to_json(todo: &Todo) -> TodoJson {
    TodoJson {
        raw: todo.raw_text().map(str::to_string),
        completed: todo.completed(),
        completed_date: todo.completed_date().map(str::to_string),
        priority: todo.priority(),
        priority_score: todo.priority_score(),
        creation_date: todo.creation_date().map(str::to_string),
        content: todo.content().map(str::to_string),
        projects: todo.projects().to_vec(),
        contexts: todo.contexts().to_vec(),
        metadata: todo.metadata().to_vec(),
        due_date: todo.due_date(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format the parsed record, one field per line.
pub fn format_todo_detail(todo: &Todo) -> Vec<String> {
    let mut lines = Vec::new();

    let check = if todo.completed() { 'x' } else { ' ' };
    let pri = todo
        .priority()
        .map(|p| format!(" ({})", p))
        .unwrap_or_default();
    lines.push(format!("[{}]{} {}", check, pri, todo.content().unwrap_or("")));

    if let Some(date) = todo.completed_date() {
        lines.push(format!("completed: {}", date));
    }
    if let Some(date) = todo.creation_date() {
        lines.push(format!("created: {}", date));
    }
    if !todo.projects().is_empty() {
        lines.push(format!("projects: {}", todo.projects().join(" ")));
    }
    if !todo.contexts().is_empty() {
        lines.push(format!("contexts: {}", todo.contexts().join(" ")));
    }
    for pair in todo.metadata() {
        lines.push(format!("{}: {}", pair.name, pair.value));
    }
    if let Some(due) = todo.due_date() {
        lines.push(format!("due date: {}", due));
    }

    lines
}
