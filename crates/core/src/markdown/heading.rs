//! ATX heading classification.
//!
//! Classification is purely line based: a heading is 1-6 `#` characters,
//! at least one whitespace character, then some non-whitespace content.
//! Code fences and setext headings are not recognised.

use std::sync::LazyLock;

use regex::Regex;

use crate::markdown::types::HeadingInfo;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Captures the hash run; `\S` requires real content after the gap.
    Regex::new(r"^(#{1,6})\s+\S").unwrap()
});

/// Return the heading level (1-6) of `line`, or `None` if it is not a heading.
pub fn heading_level(line: &str) -> Option<u8> {
    HEADING_RE.captures(line).and_then(|caps| u8::try_from(caps[1].len()).ok())
}

/// Classify a line and extract its title.
///
/// The title is the text after the hash run with surrounding whitespace
/// and any closing `#` sequence removed.
pub fn parse_heading(line: &str) -> Option<HeadingInfo> {
    let level = heading_level(line)?;
    let rest = &line[usize::from(level)..];
    let title = strip_closing_hashes(rest.trim());
    Some(HeadingInfo { title: title.to_string(), level })
}

/// Find all headings in the document, in order.
pub fn find_headings(input: &str) -> Vec<HeadingInfo> {
    input.lines().filter_map(parse_heading).collect()
}

fn strip_closing_hashes(title: &str) -> &str {
    let without = title.trim_end_matches('#');
    // `## Title ##` closes, `## C#` does not
    if without.len() < title.len() && without.ends_with(char::is_whitespace) {
        without.trim_end()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some(1))]
    #[case("### Title", Some(3))]
    #[case("###### Six", Some(6))]
    #[case("##\tTabbed", Some(2))]
    #[case("## Prompts  ", Some(2))]
    #[case("####### Too deep", None)]
    #[case("#NoSpace", None)]
    #[case("#tag and more", None)]
    #[case("##   ", None)]
    #[case("#", None)]
    #[case("", None)]
    #[case(" # Indented", None)]
    #[case("plain text", None)]
    fn classifies_lines(#[case] line: &str, #[case] expected: Option<u8>) {
        assert_eq!(heading_level(line), expected);
    }

    #[test]
    fn crlf_line_is_still_a_heading() {
        assert_eq!(heading_level("## Prompts\r"), Some(2));
    }

    #[test]
    fn parse_heading_extracts_title() {
        let h = parse_heading("##  Morning review  ").unwrap();
        assert_eq!(h.title, "Morning review");
        assert_eq!(h.level, 2);
    }

    #[test]
    fn parse_heading_strips_closing_sequence_only() {
        assert_eq!(parse_heading("## Done ##").unwrap().title, "Done");
        assert_eq!(parse_heading("## Learning C#").unwrap().title, "Learning C#");
    }

    #[test]
    fn find_headings_skips_non_headings() {
        let doc = "# A\ntext\n#tag\n## B\n####### no\n";
        let titles: Vec<_> =
            find_headings(doc).into_iter().map(|h| (h.title, h.level)).collect();
        assert_eq!(titles, vec![("A".to_string(), 1), ("B".to_string(), 2)]);
    }
}
