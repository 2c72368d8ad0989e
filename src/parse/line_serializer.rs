use crate::parse::line_parser::LineParts;

/// Render line parts back to a todo.txt line.
///
/// Component order is fixed no matter which field was edited last:
/// completion marker and date, priority, creation date, content. Each
/// component carries one trailing separator space; absent and empty
/// components are omitted together with their separator, and content is
/// appended bare.
pub fn serialize_line(parts: &LineParts) -> String {
    let mut line = String::new();

    if parts.completed {
        line.push_str("x ");
        if let Some(date) = non_empty(&parts.completed_date) {
            line.push_str(date);
            line.push(' ');
        }
    }

    if let Some(p) = parts.priority {
        line.push('(');
        line.push(p);
        line.push_str(") ");
    }

    if let Some(date) = non_empty(&parts.creation_date) {
        line.push_str(date);
        line.push(' ');
    }

    if let Some(content) = non_empty(&parts.content) {
        line.push_str(content);
    }

    line
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
