pub mod flags;
pub mod line_parser;
pub mod line_serializer;
pub mod metadata;

pub use flags::find_flags;
pub use line_parser::{LineParts, parse_line};
pub use line_serializer::serialize_line;
pub use metadata::{find_metadata, resolve_due_date};
