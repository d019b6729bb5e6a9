//! Locating and rewriting a heading-delimited section.

use tracing::debug;

use crate::markdown::buffer::LineBuffer;
use crate::markdown::heading::heading_level;
use crate::markdown::types::{RewriteOutcome, SectionError, SectionSpan};

/// Validate a target heading and return its trimmed text and level.
///
/// The target must be a single heading line; a line break inside it could
/// never match a document line.
pub fn target_heading(heading: &str) -> Result<(&str, u8), SectionError> {
    let trimmed = heading.trim();
    if trimmed.contains(['\n', '\r']) {
        return Err(SectionError::InvalidHeading(heading.to_string()));
    }
    heading_level(trimmed)
        .map(|level| (trimmed, level))
        .ok_or_else(|| SectionError::InvalidHeading(heading.to_string()))
}

/// Find the span owned by `heading`.
///
/// The first line whose trimmed text equals the trimmed heading owns the
/// section. The section ends at the next line whose heading level is less
/// than or equal to the target's, or at the end of the buffer; deeper
/// headings stay inside it.
pub fn locate_section<B: LineBuffer + ?Sized>(
    buffer: &B,
    heading: &str,
) -> Result<Option<SectionSpan>, SectionError> {
    let (target, level) = target_heading(heading)?;
    let count = buffer.line_count();

    let Some(heading_index) =
        (0..count).find(|&i| buffer.line(i).is_some_and(|l| l.trim() == target))
    else {
        return Ok(None);
    };

    let end = (heading_index + 1..count)
        .find(|&i| {
            buffer
                .line(i)
                .and_then(heading_level)
                .is_some_and(|found| found <= level)
        })
        .unwrap_or(count);

    Ok(Some(SectionSpan { heading: heading_index, level, start: heading_index + 1, end }))
}

/// Replace the body of `heading`'s section with `content`, or append a
/// new section at the end of the buffer when the heading is absent.
///
/// An appended section is preceded by one blank line. A document that
/// already ends with a blank line therefore gains two at the join.
pub fn rewrite_section<B: LineBuffer + ?Sized>(
    buffer: &mut B,
    heading: &str,
    content: &str,
) -> Result<RewriteOutcome, SectionError> {
    match locate_section(buffer, heading)? {
        Some(span) => {
            debug!(
                heading = heading.trim(),
                start = span.start,
                end = span.end,
                "replacing section body"
            );
            buffer.replace_span(span.range(), content);
            Ok(RewriteOutcome::Replaced(span))
        }
        None => {
            let count = buffer.line_count();
            debug!(heading = heading.trim(), at = count, "section absent, appending");
            buffer.insert_at(count, &format!("\n{}\n{content}", heading.trim()));
            Ok(RewriteOutcome::Appended { heading_line: count + 1 })
        }
    }
}

/// Current body of `heading`'s section, every line `\n`-terminated.
///
/// Feeding the result back to [`rewrite_section`] reproduces the body.
pub fn section_body<B: LineBuffer + ?Sized>(
    buffer: &B,
    heading: &str,
) -> Result<Option<String>, SectionError> {
    let Some(span) = locate_section(buffer, heading)? else {
        return Ok(None);
    };
    let mut body = String::new();
    for line in span.range().filter_map(|i| buffer.line(i)) {
        body.push_str(line.strip_suffix('\r').unwrap_or(line));
        body.push('\n');
    }
    Ok(Some(body))
}
