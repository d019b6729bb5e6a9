use crate::markdown::buffer::{Document, EditRecorder, LineEdit};
use crate::markdown::heading;
use crate::markdown::section;
use crate::markdown::types::*;

/// High-level API for section rewriting over full document text
pub struct SectionEditor;

impl SectionEditor {
    /// Replace the body of a heading's section
    ///
    /// # Arguments
    /// * `input` - The source Markdown document
    /// * `heading` - Full heading line, including its `#` markers (e.g. `## Prompts`)
    /// * `content` - Replacement body
    ///
    /// # Returns
    /// The rewritten document and whether the section was replaced or appended
    ///
    /// # Errors
    /// * `InvalidHeading` - `heading` is not a markdown heading
    pub fn replace_section(
        input: &str,
        heading: &str,
        content: &str,
    ) -> Result<RewriteResult, SectionError> {
        let mut doc = Document::parse(input);
        let outcome = section::rewrite_section(&mut doc, heading, content)?;
        Ok(RewriteResult { content: doc.render(), outcome })
    }

    /// Compute the same rewrite as an ordered list of line edits
    ///
    /// Applying the edits to `Document::parse(input)` yields exactly the
    /// text `replace_section` returns.
    pub fn plan_edits(
        input: &str,
        heading: &str,
        content: &str,
    ) -> Result<Vec<LineEdit>, SectionError> {
        let doc = Document::parse(input);
        let mut recorder = EditRecorder::new(&doc);
        section::rewrite_section(&mut recorder, heading, content)?;
        Ok(recorder.into_edits())
    }

    /// Current body of a section, or `None` when the heading is absent
    pub fn section_content(input: &str, heading: &str) -> Result<Option<String>, SectionError> {
        section::section_body(&Document::parse(input), heading)
    }

    /// Find all headings in a document
    pub fn find_headings(input: &str) -> Vec<HeadingInfo> {
        heading::find_headings(input)
    }

    /// Check if a section exists in the document
    pub fn section_exists(input: &str, heading: &str) -> bool {
        matches!(section::locate_section(&Document::parse(input), heading), Ok(Some(_)))
    }
}
