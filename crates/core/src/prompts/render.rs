//! Rendering answers into the section body.

use thiserror::Error;

use crate::prompts::answer::{AnswerError, parse_bool};
use crate::prompts::types::{FieldType, PromptSettings, Question, QuestionStyle};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("expected {expected} answers (one per question), got {got}")]
    AnswerCountMismatch { expected: usize, got: usize },

    #[error("invalid answer for '{question}': {source}")]
    InvalidAnswer {
        question: String,
        #[source]
        source: AnswerError,
    },
}

/// Normalise raw answers against their questions.
///
/// Fails if the counts differ or any answer is invalid for its field type.
pub fn normalize_answers(
    questions: &[Question],
    raw: &[String],
) -> Result<Vec<String>, RenderError> {
    check_count(questions, raw)?;
    questions
        .iter()
        .zip(raw)
        .map(|(q, a)| {
            q.field.normalize(a).map_err(|source| RenderError::InvalidAnswer {
                question: q.text.clone(),
                source,
            })
        })
        .collect()
}

/// Render one block per question, in configured order.
///
/// Each block is the optional question line, the formatted answer, then a
/// blank line.
pub fn render_answers(
    settings: &PromptSettings,
    answers: &[String],
) -> Result<String, RenderError> {
    check_count(&settings.questions, answers)?;

    let mut out = String::new();
    for (question, answer) in settings.questions.iter().zip(answers) {
        if settings.include_questions {
            match settings.question_style {
                QuestionStyle::Bold => out.push_str(&format!("**{}**\n", question.text)),
                QuestionStyle::Plain => out.push_str(&format!("{}\n", question.text)),
            }
        }
        out.push_str(&format_answer(question.field, answer, &settings.line_prefix));
        out.push_str("\n\n");
    }
    Ok(out)
}

/// Format a single normalised answer for its field type.
pub fn format_answer(field: FieldType, answer: &str, prefix: &str) -> String {
    match field {
        FieldType::Text => format!("{prefix}{answer}"),
        FieldType::Note => wikilink(prefix, "[[", answer),
        FieldType::EmbeddedNoteFile => wikilink(prefix, "![[", answer),
        FieldType::Checkbox => {
            let shown = if parse_bool(answer).unwrap_or(false) { "Yes" } else { "No" };
            format!("{prefix}{shown}")
        }
        FieldType::TextArea => {
            if answer.is_empty() {
                return prefix.to_string();
            }
            answer.lines().map(|line| format!("{prefix}{line}")).collect::<Vec<_>>().join("\n")
        }
        FieldType::Slider => format!("{prefix}{answer}"),
    }
}

fn wikilink(prefix: &str, open: &str, target: &str) -> String {
    if target.is_empty() { prefix.to_string() } else { format!("{prefix}{open}{target}]]") }
}

fn check_count<T>(questions: &[Question], answers: &[T]) -> Result<(), RenderError> {
    if questions.len() == answers.len() {
        Ok(())
    } else {
        Err(RenderError::AnswerCountMismatch { expected: questions.len(), got: answers.len() })
    }
}
