use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tt", about = concat!("tt v", env!("CARGO_PKG_VERSION"), " - one todo.txt line at a time"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a line and show its fields
    Show(LineArgs),
    /// Re-render a line in canonical form
    Fmt(LineArgs),
    /// Mark a line completed (stamps today's date)
    Done(LineArgs),
    /// Reopen a completed line (clears the completion date)
    Undo(LineArgs),
    /// Set or clear a line's priority
    Pri(PriArgs),
}

#[derive(Args)]
pub struct LineArgs {
    /// The todo.txt line (read from stdin when omitted)
    pub line: Option<String>,
}

#[derive(Args)]
pub struct PriArgs {
    /// Priority letter A-Z, or '-' to clear
    pub priority: String,

    /// The todo.txt line (read from stdin when omitted)
    pub line: Option<String>,
}
