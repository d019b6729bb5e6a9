pub mod buffer;
pub mod editor;
pub mod heading;
pub mod section;
pub mod types;

// Re-export primary API
pub use buffer::{
    Document, EditRecorder, LineBuffer, LineEdit, LineEnding, apply_edits, split_lines,
};
pub use editor::SectionEditor;
pub use heading::{find_headings, heading_level, parse_heading};
pub use section::{locate_section, rewrite_section, section_body};
pub use types::{HeadingInfo, RewriteOutcome, RewriteResult, SectionError, SectionSpan};
