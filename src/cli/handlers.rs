use std::io::BufRead;

use crate::cli::commands::{Cli, Commands, LineArgs, PriArgs};
use crate::cli::output::{format_todo_detail, todo_to_json};
use crate::model::todo::{CompletionChange, Todo};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    match cli.command {
        Commands::Show(args) => cmd_show(args, json),
        Commands::Fmt(args) => cmd_fmt(args),
        Commands::Done(args) => cmd_done(args, json),
        Commands::Undo(args) => cmd_undo(args, json),
        Commands::Pri(args) => cmd_pri(args, json),
    }
}

/// Take the line from the argument, or read a single line of bytes from
/// stdin. Stdin goes through `Todo::from_bytes`, so non-text input is
/// rejected instead of mangled.
fn todo_from_input(line: Option<String>) -> Result<Todo, Box<dyn std::error::Error>> {
    match line {
        Some(line) => Ok(Todo::from_line(line)),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_until(b'\n', &mut buf)?;
            while buf.last().is_some_and(|b| *b == b'\n' || *b == b'\r') {
                buf.pop();
            }
            Ok(Todo::from_bytes(&buf)?)
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_show(args: LineArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let todo = todo_from_input(args.line)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&todo_to_json(&todo))?);
    } else {
        for line in format_todo_detail(&todo) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_fmt(args: LineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let todo = todo_from_input(args.line)?;
    println!("{}", todo.to_line());
    Ok(())
}

fn cmd_done(args: LineArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut todo = todo_from_input(args.line)?;
    if todo.set_completed(true) == CompletionChange::Unchanged {
        eprintln!("already completed");
    }
    print_updated(&todo, json)
}

fn cmd_undo(args: LineArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut todo = todo_from_input(args.line)?;
    if todo.set_completed(false) == CompletionChange::Unchanged {
        eprintln!("not completed");
    }
    print_updated(&todo, json)
}

fn cmd_pri(args: PriArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let priority = parse_priority_arg(&args.priority)?;
    let mut todo = todo_from_input(args.line)?;
    todo.set_priority(priority);
    print_updated(&todo, json)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse the priority argument: one letter A-Z, or '-' to clear.
fn parse_priority_arg(arg: &str) -> Result<Option<char>, Box<dyn std::error::Error>> {
    if arg == "-" {
        return Ok(None);
    }
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(p), None) if p.is_ascii_uppercase() => Ok(Some(p)),
        _ => Err(format!("invalid priority '{}' (expected A-Z, or '-' to clear)", arg).into()),
    }
}

fn print_updated(todo: &Todo, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&todo_to_json(todo))?);
    } else {
        println!("{}", todo.raw_text().unwrap_or_default());
    }
    Ok(())
}
