//! Interactive collection of prompt answers.
//!
//! Answers given with `--answer` are used first, in order. Remaining
//! questions are asked with a widget matching their field type, unless
//! stdin is not a terminal or batch mode is on, in which case a missing
//! answer is an error.

use dailyprompt_core::prompts::answer::{SLIDER_DEFAULT, parse_slider};
use dailyprompt_core::prompts::{FieldType, Question};
use dailyprompt_core::vault::list_entries;
use dialoguer::{Confirm, Editor, FuzzySelect, Input, theme::ColorfulTheme};
use std::io::{self, IsTerminal};
use std::path::Path;

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, fail on missing answers instead of prompting.
    pub batch_mode: bool,
}

/// Error type for answer collection.
#[derive(Debug)]
pub enum PromptError {
    /// No answer for a question in batch mode.
    MissingAnswer { index: usize, question: String },
    /// More `--answer` values than questions.
    TooManyAnswers { expected: usize, got: usize },
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::MissingAnswer { index, question } => {
                write!(
                    f,
                    "missing answer for question {index}: {question}\n  Hint: pass one --answer per question or remove --batch"
                )
            }
            PromptError::TooManyAnswers { expected, got } => {
                write!(f, "got {got} answers but only {expected} questions are configured")
            }
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Collect one raw answer per question.
///
/// `vault_root` is scanned for note names when a note field is asked
/// interactively.
pub fn collect_answers(
    questions: &[Question],
    provided: &[String],
    vault_root: &Path,
    options: &PromptOptions,
) -> Result<Vec<String>, PromptError> {
    if provided.len() > questions.len() {
        return Err(PromptError::TooManyAnswers {
            expected: questions.len(),
            got: provided.len(),
        });
    }

    let is_interactive = io::stdin().is_terminal() && !options.batch_mode;

    let mut answers = provided.to_vec();
    for (index, question) in questions.iter().enumerate().skip(provided.len()) {
        if !is_interactive {
            return Err(PromptError::MissingAnswer {
                index: index + 1,
                question: question.text.clone(),
            });
        }
        answers.push(ask(question, vault_root)?);
    }

    Ok(answers)
}

fn ask(question: &Question, vault_root: &Path) -> Result<String, PromptError> {
    let theme = ColorfulTheme::default();
    let prompt = question.text.as_str();

    match question.field {
        FieldType::Text => Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(dialoguer_error_to_prompt_error),
        FieldType::Note => ask_note(&theme, prompt, vault_root, true),
        FieldType::EmbeddedNoteFile => ask_note(&theme, prompt, vault_root, false),
        FieldType::Checkbox => Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map(|yes| yes.to_string())
            .map_err(dialoguer_error_to_prompt_error),
        FieldType::TextArea => {
            eprintln!("{prompt} (opening editor)");
            Editor::new()
                .edit("")
                .map(Option::unwrap_or_default)
                .map_err(|e| PromptError::Io(io::Error::other(e.to_string())))
        }
        FieldType::Slider => Input::<String>::with_theme(&theme)
            .with_prompt(format!("{prompt} (0-100)"))
            .default(SLIDER_DEFAULT.to_string())
            .validate_with(|input: &String| -> Result<(), String> {
                parse_slider(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(dialoguer_error_to_prompt_error),
    }
}

/// Pick a vault file by fuzzy search, or type a name when the vault is
/// empty or the picker is dismissed.
fn ask_note(
    theme: &ColorfulTheme,
    prompt: &str,
    vault_root: &Path,
    markdown_only: bool,
) -> Result<String, PromptError> {
    let names: Vec<String> =
        list_entries(vault_root, markdown_only).into_iter().map(|e| e.name).collect();

    if !names.is_empty() {
        let picked = FuzzySelect::with_theme(theme)
            .with_prompt(prompt)
            .items(&names)
            .interact_opt()
            .map_err(dialoguer_error_to_prompt_error)?;
        if let Some(i) = picked {
            return Ok(names[i].clone());
        }
    }

    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}
