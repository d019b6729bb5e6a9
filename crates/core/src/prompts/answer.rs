//! Normalisation of raw answers before rendering.
//!
//! Answers arrive as plain strings whatever the field type. Checkbox answers
//! become `"true"`/`"false"`, slider answers an integer in range, and note
//! references lose any wikilink brackets the user typed.

use thiserror::Error;

use crate::prompts::types::FieldType;

pub const SLIDER_MIN: i64 = 0;
pub const SLIDER_MAX: i64 = 100;
pub const SLIDER_DEFAULT: i64 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("'{0}' is not a yes/no answer (use true/false, yes/no, y/n, on/off or 1/0)")]
    InvalidBoolean(String),

    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("{0} is outside the slider range 0-100")]
    OutOfRange(i64),
}

impl FieldType {
    /// Validate and normalise a raw answer for this field type.
    pub fn normalize(self, raw: &str) -> Result<String, AnswerError> {
        let value = raw.trim();
        match self {
            FieldType::Text | FieldType::TextArea => Ok(value.to_string()),
            FieldType::Note | FieldType::EmbeddedNoteFile => Ok(strip_link(value).to_string()),
            FieldType::Checkbox => parse_bool(value).map(|b| b.to_string()),
            FieldType::Slider => parse_slider(value).map(|n| n.to_string()),
        }
    }
}

/// Parse a checkbox answer.
pub fn parse_bool(value: &str) -> Result<bool, AnswerError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "no" | "n" | "off" | "0" => Ok(false),
        _ => Err(AnswerError::InvalidBoolean(value.to_string())),
    }
}

/// Parse a slider answer within `SLIDER_MIN..=SLIDER_MAX`; blank means
/// `SLIDER_DEFAULT`.
pub fn parse_slider(value: &str) -> Result<i64, AnswerError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(SLIDER_DEFAULT);
    }
    let n: i64 = value.parse().map_err(|_| AnswerError::NotANumber(value.to_string()))?;
    if (SLIDER_MIN..=SLIDER_MAX).contains(&n) {
        Ok(n)
    } else {
        Err(AnswerError::OutOfRange(n))
    }
}

fn strip_link(value: &str) -> &str {
    let inner = value
        .strip_prefix("![[")
        .or_else(|| value.strip_prefix("[["))
        .and_then(|v| v.strip_suffix("]]"));
    inner.map_or(value, str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed() {
        assert_eq!(FieldType::Text.normalize("  hello \n").unwrap(), "hello");
        assert_eq!(
            FieldType::TextArea.normalize("\nline 1\nline 2\n\n").unwrap(),
            "line 1\nline 2"
        );
    }

    #[test]
    fn note_reference_loses_brackets() {
        assert_eq!(FieldType::Note.normalize("[[Project X]]").unwrap(), "Project X");
        assert_eq!(FieldType::EmbeddedNoteFile.normalize("![[cat.png]]").unwrap(), "cat.png");
        assert_eq!(FieldType::Note.normalize("Plain").unwrap(), "Plain");
    }

    #[test]
    fn checkbox_accepts_common_spellings() {
        assert_eq!(FieldType::Checkbox.normalize("Yes").unwrap(), "true");
        assert_eq!(FieldType::Checkbox.normalize("off").unwrap(), "false");
        assert_eq!(
            FieldType::Checkbox.normalize("maybe"),
            Err(AnswerError::InvalidBoolean("maybe".into()))
        );
    }

    #[test]
    fn slider_is_range_checked() {
        assert_eq!(FieldType::Slider.normalize(" 75 ").unwrap(), "75");
        assert_eq!(FieldType::Slider.normalize("101"), Err(AnswerError::OutOfRange(101)));
        assert_eq!(FieldType::Slider.normalize("-1"), Err(AnswerError::OutOfRange(-1)));
        assert_eq!(
            FieldType::Slider.normalize("lots"),
            Err(AnswerError::NotANumber("lots".into()))
        );
        assert_eq!(FieldType::Slider.normalize("  "), Ok("50".to_string()));
    }
}
