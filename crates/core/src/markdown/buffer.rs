//! Line-addressed buffers.
//!
//! The section rewriter is written once against [`LineBuffer`]. Two
//! backends implement it:
//!
//! - [`Document`]: an in-memory copy of the note that is rewritten in
//!   place and rendered back to full text.
//! - [`EditRecorder`]: reads from a snapshot and records the ordered
//!   [`LineEdit`]s instead of applying them, for callers that own a live
//!   buffer (an editor, a remote document) and want range edits.

use std::fmt;
use std::ops::Range;

const BOM: char = '\u{feff}';

/// Line ending convention of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") { Self::CrLf } else { Self::Lf }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Split a block of text into lines.
///
/// A final `\n` terminates the last line rather than opening an empty
/// one, and a `\r` before each `\n` is dropped.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();
    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// A buffer addressed by 0-based line indices.
pub trait LineBuffer {
    /// Number of lines in the buffer.
    fn line_count(&self) -> usize;

    /// Text of line `index` without its terminator.
    fn line(&self, index: usize) -> Option<&str>;

    /// Replace lines `[span.start, span.end)` with the lines of `text`.
    ///
    /// When the span reaches the end of the buffer the inserted block is
    /// terminated by a newline.
    fn replace_span(&mut self, span: Range<usize>, text: &str);

    /// Insert the lines of `text` before line `line` (or at the end).
    fn insert_at(&mut self, line: usize, text: &str) {
        self.replace_span(line..line, text);
    }
}

/// An in-memory markdown document split into lines.
///
/// Lines keep any trailing `\r` so untouched lines render byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Vec<String>,
    line_ending: LineEnding,
    trailing_newline: bool,
    bom: bool,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        let (bom, body) = match text.strip_prefix(BOM) {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let trailing_newline = body.ends_with('\n');
        let mut lines: Vec<String> = body.split('\n').map(str::to_string).collect();
        if trailing_newline || body.is_empty() {
            lines.pop();
        }

        Self { lines, line_ending: LineEnding::detect(body), trailing_newline, bom }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the document back to full text.
    pub fn render(&self) -> String {
        let capacity = self.lines.iter().map(|l| l.len() + 1).sum::<usize>() + 3;
        let mut out = String::with_capacity(capacity);
        if self.bom {
            out.push(BOM);
        }
        out.push_str(&self.lines.join("\n"));
        if self.trailing_newline && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl LineBuffer for Document {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    fn replace_span(&mut self, span: Range<usize>, text: &str) {
        let len = self.lines.len();
        let start = span.start.min(len);
        let end = span.end.clamp(start, len);

        let mut incoming = split_lines(text);
        if start == end && incoming.is_empty() {
            return;
        }

        if self.line_ending == LineEnding::CrLf {
            for line in &mut incoming {
                line.push('\r');
            }
            // The old last line stops being last once lines follow it.
            if start == len
                && !incoming.is_empty()
                && let Some(last) = self.lines.last_mut()
                && !last.ends_with('\r')
            {
                last.push('\r');
            }
        }

        if end == len {
            self.trailing_newline = true;
        }

        self.lines.splice(start..end, incoming);
    }
}

/// One range edit against a line-addressed buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    /// Lines removed, half-open.
    pub span: Range<usize>,
    /// Text inserted at `span.start`.
    pub text: String,
}

/// Records edits against a read-only snapshot.
///
/// Reads always see the snapshot; recorded edits become visible only once
/// applied with [`apply_edits`].
#[derive(Debug)]
pub struct EditRecorder<'a> {
    snapshot: &'a Document,
    edits: Vec<LineEdit>,
}

impl<'a> EditRecorder<'a> {
    pub fn new(snapshot: &'a Document) -> Self {
        Self { snapshot, edits: Vec::new() }
    }

    pub fn into_edits(self) -> Vec<LineEdit> {
        self.edits
    }
}

impl LineBuffer for EditRecorder<'_> {
    fn line_count(&self) -> usize {
        self.snapshot.line_count()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.snapshot.line(index)
    }

    fn replace_span(&mut self, span: Range<usize>, text: &str) {
        self.edits.push(LineEdit { span, text: text.to_string() });
    }
}

/// Apply recorded edits, in order, to any buffer.
pub fn apply_edits<B: LineBuffer + ?Sized>(buffer: &mut B, edits: &[LineEdit]) {
    for edit in edits {
        buffer.replace_span(edit.span.clone(), &edit.text);
    }
}
