use std::ops::Range;

use thiserror::Error;

/// Information about a heading found in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingInfo {
    /// The heading text content
    pub title: String,
    /// The heading level (1-6)
    pub level: u8,
}

/// Line range owned by a heading.
///
/// `start` is the line after the heading and `end` is the next heading of
/// equal or shallower level, or the line count. Both are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    /// Index of the heading line itself.
    pub heading: usize,
    /// Level of the heading.
    pub level: u8,
    /// First line of the section body (inclusive).
    pub start: usize,
    /// End of the section body (exclusive).
    pub end: usize,
}

impl SectionSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// What a rewrite did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The section existed; its previous body span is reported.
    Replaced(SectionSpan),
    /// The section was missing and was appended; `heading_line` is the
    /// index of the new heading in the rewritten document.
    Appended { heading_line: usize },
}

/// Result of a full-text rewrite
#[derive(Debug, Clone)]
pub struct RewriteResult {
    /// The rewritten document
    pub content: String,
    /// How the section was written
    pub outcome: RewriteOutcome,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error("target '{0}' is not a markdown heading (expected 1-6 '#', a space, then text)")]
    InvalidHeading(String),
}
