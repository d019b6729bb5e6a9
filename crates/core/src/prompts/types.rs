use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Heading used when none is configured.
pub const DEFAULT_HEADING: &str = "## Prompts";

/// How a question is asked and how its answer is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// Single-line free text.
    #[default]
    Text,
    /// Reference to another note, rendered as a wikilink.
    Note,
    /// Reference to a note or file, rendered as an embed.
    EmbeddedNoteFile,
    /// Yes/no toggle.
    Checkbox,
    /// Multi-line free text.
    TextArea,
    /// Integer between 0 and 100.
    Slider,
}

impl FieldType {
    pub const ALL: [FieldType; 6] = [
        FieldType::Text,
        FieldType::Note,
        FieldType::EmbeddedNoteFile,
        FieldType::Checkbox,
        FieldType::TextArea,
        FieldType::Slider,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Note => "note",
            FieldType::EmbeddedNoteFile => "embedded-note-file",
            FieldType::Checkbox => "checkbox",
            FieldType::TextArea => "text-area",
            FieldType::Slider => "slider",
        }
    }

    /// Whether answers of this type name another note in the vault.
    pub fn is_note_reference(self) -> bool {
        matches!(self, FieldType::Note | FieldType::EmbeddedNoteFile)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown field type '{0}' (expected one of: text, note, embedded-note-file, checkbox, text-area, slider)")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('_', "-");
        match norm.as_str() {
            "text" => Ok(FieldType::Text),
            "note" => Ok(FieldType::Note),
            "embedded-note-file" | "embed" => Ok(FieldType::EmbeddedNoteFile),
            "checkbox" | "bool" | "boolean" => Ok(FieldType::Checkbox),
            "text-area" | "textarea" => Ok(FieldType::TextArea),
            "slider" | "number" => Ok(FieldType::Slider),
            _ => Err(UnknownFieldType(s.to_string())),
        }
    }
}

/// A configured question.
///
/// In TOML a question is either a table (`{ text = "...", field = "slider" }`)
/// or a bare string, which is a text question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QuestionRepr")]
pub struct Question {
    pub text: String,
    pub field: FieldType,
}

impl Question {
    pub fn new(text: impl Into<String>, field: FieldType) -> Self {
        Self { text: text.into(), field }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionRepr {
    Plain(String),
    Full {
        text: String,
        #[serde(default)]
        field: FieldType,
    },
}

impl From<QuestionRepr> for Question {
    fn from(repr: QuestionRepr) -> Self {
        match repr {
            QuestionRepr::Plain(text) => Question::new(text, FieldType::Text),
            QuestionRepr::Full { text, field } => Question::new(text, field),
        }
    }
}

/// Styling of question lines above each answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionStyle {
    #[default]
    Bold,
    #[serde(alias = "no-style")]
    Plain,
}

/// Everything that controls prompting and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSettings {
    /// Heading line owning the answers section, e.g. `## Prompts`.
    #[serde(default = "default_heading")]
    pub heading: String,
    /// Prefix for each answer line, e.g. `- ` or `- [ ] `.
    #[serde(default)]
    pub line_prefix: String,
    /// Write the question above each answer.
    #[serde(default = "default_include_questions")]
    pub include_questions: bool,
    #[serde(default)]
    pub question_style: QuestionStyle,
    #[serde(default = "default_questions")]
    pub questions: Vec<Question>,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            heading: default_heading(),
            line_prefix: String::new(),
            include_questions: default_include_questions(),
            question_style: QuestionStyle::default(),
            questions: default_questions(),
        }
    }
}

fn default_heading() -> String {
    DEFAULT_HEADING.to_string()
}

fn default_include_questions() -> bool {
    true
}

fn default_questions() -> Vec<Question> {
    vec![Question::new("Example prompt", FieldType::Text)]
}
